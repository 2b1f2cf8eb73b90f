//! # Main Entry Point
//!
//! Initializes the application:
//! - Domain: Configuration and Types
//! - Infrastructure: OpenWeather, Gemini, Console
//! - Application: Dialogue Engine, Session Store
//!
//! Runs a console chat loop bound to a single session. The engine itself is
//! transport-agnostic; replies are descriptors rendered by the adapter.

mod application;
mod domain;
mod infrastructure;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::engine::DialogueEngine;
use crate::application::session::SessionStore;
use crate::domain::config::AppConfig;
use crate::domain::traits::{AdvisorProvider, ChatTransport, WeatherProvider};
use crate::infrastructure::advisor::GeminiAdvisor;
use crate::infrastructure::console::{self, ConsoleChat};
use crate::infrastructure::weather::OpenWeatherProvider;

#[derive(Parser, Debug)]
#[command(name = "climabot", about = "ClimaBot Ecuador - asistente conversacional del clima")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = "data/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&args.config)?;

    // 2. Logging Setup
    // The console is the chat surface, so logs go to the session file only.
    if !std::path::Path::new("data").exists() {
        fs::create_dir("data").context("Failed to create data directory")?;
    }
    let file_appender = tracing_appender::rolling::never("data", "session.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,hyper=warn,reqwest=warn"));

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Starting ClimaBot...");

    // 3. Initialize Infrastructure
    let weather: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherProvider::new(
        &config.services.weather,
        config.system.lookup_timeout_secs,
    )?);
    let advisor: Arc<dyn AdvisorProvider> = Arc::new(GeminiAdvisor::new(&config.services.advisor)?);

    // 4. Initialize Application Components
    let engine = DialogueEngine::new(&config.system, weather, advisor);
    let store = SessionStore::new();

    // 5. Console Chat Loop
    let chat = ConsoleChat::new("console");
    let session = store.session(&chat.session_id());

    let mut last_choices = Vec::new();
    {
        let mut guard = session.lock().await;
        for reply in engine.greet(&mut guard) {
            chat.send_reply(&reply).await.map_err(anyhow::Error::msg)?;
            last_choices = reply.choices;
        }
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim().to_string();
        if input.is_empty() {
            continue;
        }
        if input == "/salir" || input == "/quit" {
            break;
        }

        let replies = {
            let mut guard = session.lock().await;
            if input == "/start" {
                engine.greet(&mut guard)
            } else if let Some(choice) = console::match_choice(&last_choices, &input) {
                let city = choice.value.clone();
                engine.handle_city_selection(&mut guard, &city).await
            } else {
                engine.handle_message(&mut guard, &input).await
            }
        };

        last_choices.clear();
        for reply in replies {
            if let Err(e) = chat.send_reply(&reply).await {
                tracing::error!("Failed to send reply: {e}");
            }
            if !reply.choices.is_empty() {
                last_choices = reply.choices;
            }
        }
    }

    tracing::info!("ClimaBot session ended");
    Ok(())
}
