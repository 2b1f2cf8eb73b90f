//! # Domain Types
//!
//! Value types exchanged between the dialogue engine and its collaborators:
//! weather lookup results, stored session weather, and outbound reply descriptors.

/// Result of a successful weather lookup for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// City name as the user typed it (lowercased).
    pub city: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Human-readable condition description (e.g., "Cielo despejado").
    pub condition: String,
    /// Relative humidity percentage.
    pub humidity: u8,
    /// Formatted, user-displayable summary block.
    pub summary: String,
}

impl WeatherReport {
    /// The triple a session retains after a successful lookup.
    pub fn snapshot(&self) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: self.temperature,
            condition: self.condition.clone(),
            humidity: self.humidity,
        }
    }
}

/// The most recent weather data held by a session, passed to the advisor.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub condition: String,
    pub humidity: u8,
}

/// Failure modes of a weather lookup. Both surface to the user as a corrective
/// reply; neither aborts the session or raises upward.
#[derive(Debug, Clone)]
pub enum LookupError {
    /// The provider did not recognize the city. Carries a user-displayable
    /// suggestion message.
    NotFound { suggestion: String },
    /// The provider could not be reached, answered with a server error, or
    /// timed out.
    Unavailable(String),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::NotFound { suggestion } => write!(f, "city not found: {suggestion}"),
            LookupError::Unavailable(reason) => write!(f, "lookup unavailable: {reason}"),
        }
    }
}

impl std::error::Error for LookupError {}

/// A structured choice the transport may render as a button or numbered option.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Outbound reply descriptor. The engine never talks to a transport directly;
/// it returns these for the transport layer to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub choices: Vec<Choice>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            choices: Vec::new(),
        }
    }

    pub fn with_choices(text: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            text: text.into(),
            choices,
        }
    }
}
