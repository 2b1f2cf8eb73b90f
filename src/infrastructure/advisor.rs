//! # Gemini Advisor Adapter
//!
//! Implements the `AdvisorProvider` trait against Google's `generateContent`
//! endpoint. Errors stay at the trait's `Result<String, String>` seam; the
//! engine decides how to surface them.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::config::AdvisorConfig;
use crate::domain::traits::AdvisorProvider;
use crate::domain::types::WeatherSnapshot;
use crate::strings::prompts;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// HTTP client reused across requests
fn http_client() -> &'static Client {
    use std::sync::OnceLock;
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client")
    })
}

pub struct GeminiAdvisor {
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiAdvisor {
    pub fn new(config: &AdvisorConfig) -> Result<Self> {
        Ok(Self {
            api_key: config.resolve_api_key()?,
            model: config.model.clone(),
            base_url: config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

/// Gemini API request format
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

/// Gemini content (message)
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

/// Gemini content part
#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

/// Gemini API response format
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[async_trait]
impl AdvisorProvider for GeminiAdvisor {
    async fn clothing_advice(&self, weather: &WeatherSnapshot) -> Result<String, String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: prompts::clothing_advice(weather),
                }],
            }],
        };

        let response = http_client()
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("HTTP request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            // Try to parse error message from response
            if let Ok(error_json) = serde_json::from_str::<serde_json::Value>(&error_text) {
                if let Some(message) = error_json
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                {
                    return Err(message.to_string());
                }
            }
            return Err(format!("HTTP {status}: {error_text}"));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {e}"))?;

        let Some(candidate) = gemini_response.candidates.first() else {
            return Err("No candidates in response".to_string());
        };

        let advice: String = candidate
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        if advice.trim().is_empty() {
            return Err("Empty advice text in response".to_string());
        }
        Ok(advice)
    }
}
