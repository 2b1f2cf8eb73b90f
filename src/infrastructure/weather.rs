//! # OpenWeather Service Adapter
//!
//! Implements the `WeatherProvider` trait against the OpenWeather current-weather
//! endpoint. A 404 from the API means "city not recognized" and maps to
//! `LookupError::NotFound`; every other failure (transport, auth, rate limit,
//! server error) maps to `LookupError::Unavailable`.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::config::WeatherConfig;
use crate::domain::traits::WeatherProvider;
use crate::domain::types::{LookupError, WeatherReport};
use crate::strings::messages;

const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org";

pub struct OpenWeatherProvider {
    client: Client,
    api_key: String,
    base_url: String,
    units: String,
    lang: String,
}

impl OpenWeatherProvider {
    pub fn new(config: &WeatherConfig, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key: config.resolve_api_key()?,
            base_url: config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            units: config.units.clone(),
            lang: config.lang.clone(),
        })
    }
}

/// OpenWeather current-weather response (the fields we consume).
#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
    weather: Vec<OwmCondition>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, LookupError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", &self.api_key),
                ("units", &self.units),
                ("lang", &self.lang),
            ])
            .send()
            .await
            .map_err(|e| LookupError::Unavailable(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound {
                suggestion: messages::CITY_NOT_FOUND.to_string(),
            });
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(LookupError::Unavailable(format!("HTTP {status}: {body}")));
        }

        let data: OwmResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Unavailable(format!("Failed to parse response: {e}")))?;

        let condition = data
            .weather
            .first()
            .map(|c| messages::capitalize(&c.description))
            .unwrap_or_default();

        Ok(WeatherReport {
            city: city.to_string(),
            temperature: data.main.temp,
            condition: condition.clone(),
            humidity: data.main.humidity,
            summary: messages::weather_summary(city, data.main.temp, &condition, data.main.humidity),
        })
    }
}
