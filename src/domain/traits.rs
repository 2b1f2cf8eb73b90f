//! # Domain Traits
//!
//! Abstract interfaces for the bot's collaborators (weather lookup, clothing
//! advisor, chat transport). Allows for pluggable implementations in the
//! Infrastructure layer.

use async_trait::async_trait;

use crate::domain::types::{LookupError, Reply, WeatherReport, WeatherSnapshot};

/// Abstract interface for current-weather lookups (e.g., OpenWeather).
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Resolve a city name to current conditions. `LookupError` is a normal
    /// control-flow outcome, not an exception: the engine turns it into a
    /// user-visible reply.
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, LookupError>;
}

/// Abstract interface for the generative clothing advisor (e.g., Gemini).
#[async_trait]
pub trait AdvisorProvider: Send + Sync {
    /// Generate a short clothing recommendation from stored weather data.
    async fn clothing_advice(&self, weather: &WeatherSnapshot) -> Result<String, String>;
}

/// Abstract interface for an outbound chat surface (e.g., Console, Matrix).
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Render one reply descriptor, including any structured choices.
    async fn send_reply(&self, reply: &Reply) -> Result<(), String>;

    /// Get the session id this transport is bound to.
    fn session_id(&self) -> String;
}
