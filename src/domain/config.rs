//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file
//! (`data/config.yaml`). Defines the structs for the weather service, the
//! advisor service, and system-level settings.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

impl AppConfig {
    /// Loads and parses the configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// Configuration for the connected external services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub weather: WeatherConfig,
    pub advisor: AdvisorConfig,
}

/// Specific configuration for the weather lookup service.
#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>, // e.g. "OPENWEATHER_API_KEY"
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_units")]
    pub units: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl WeatherConfig {
    pub fn resolve_api_key(&self) -> Result<String> {
        resolve_api_key("weather", self.api_key.as_deref(), self.api_key_env.as_deref())
    }
}

/// Specific configuration for the clothing advisor service.
#[derive(Debug, Deserialize, Clone)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>, // e.g. "GEMINI_API_KEY"
    #[serde(default = "default_advisor_model")]
    pub model: String,
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl AdvisorConfig {
    pub fn resolve_api_key(&self) -> Result<String> {
        resolve_api_key("advisor", self.api_key.as_deref(), self.api_key_env.as_deref())
    }
}

fn resolve_api_key(service: &str, literal: Option<&str>, env_var: Option<&str>) -> Result<String> {
    if let Some(key) = literal {
        return Ok(key.to_string());
    }
    if let Some(var) = env_var {
        return std::env::var(var)
            .with_context(|| format!("{service}: API key env var {var} not set"));
    }
    bail!("{service}: no API key provided - set api_key or api_key_env");
}

/// System-level settings for the bot.
#[derive(Debug, Deserialize, Clone)]
pub struct SystemConfig {
    /// Cities offered as structured choices on the start greeting.
    #[serde(default = "default_quick_cities")]
    pub quick_cities: Vec<String>,
    /// Hard ceiling on a single weather lookup before it is surfaced to the
    /// user as a failed lookup.
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_secs: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            quick_cities: default_quick_cities(),
            lookup_timeout_secs: default_lookup_timeout(),
        }
    }
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_lang() -> String {
    "es".to_string()
}

fn default_advisor_model() -> String {
    "gemini-flash-latest".to_string()
}

fn default_quick_cities() -> Vec<String> {
    ["Quito", "Guayaquil", "Cuenca", "Loja"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_lookup_timeout() -> u64 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL_YAML: &str = r#"
services:
  weather:
    api_key: "owm-key"
  advisor:
    api_key: "gemini-key"
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str(MINIMAL_YAML).unwrap();
        assert_eq!(config.services.weather.units, "metric");
        assert_eq!(config.services.weather.lang, "es");
        assert_eq!(config.services.advisor.model, "gemini-flash-latest");
        assert_eq!(
            config.system.quick_cities,
            vec!["Quito", "Guayaquil", "Cuenca", "Loja"]
        );
        assert_eq!(config.system.lookup_timeout_secs, 15);
    }

    #[test]
    fn test_full_config_overrides() {
        let yaml = r#"
services:
  weather:
    api_key_env: "OWM_KEY"
    endpoint: "http://localhost:9100"
    lang: "en"
  advisor:
    api_key: "k"
    model: "gemini-1.5-pro"
system:
  quick_cities: ["Loja"]
  lookup_timeout_secs: 3
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.services.weather.api_key_env.as_deref(), Some("OWM_KEY"));
        assert_eq!(
            config.services.weather.endpoint.as_deref(),
            Some("http://localhost:9100")
        );
        assert_eq!(config.services.weather.lang, "en");
        assert_eq!(config.services.advisor.model, "gemini-1.5-pro");
        assert_eq!(config.system.quick_cities, vec!["Loja"]);
        assert_eq!(config.system.lookup_timeout_secs, 3);
    }

    #[test]
    fn test_resolve_api_key_prefers_literal() {
        let weather = WeatherConfig {
            api_key: Some("literal".to_string()),
            api_key_env: Some("UNSET_VAR_FOR_TEST".to_string()),
            endpoint: None,
            units: default_units(),
            lang: default_lang(),
        };
        assert_eq!(weather.resolve_api_key().unwrap(), "literal");
    }

    #[test]
    fn test_resolve_api_key_requires_some_source() {
        let weather = WeatherConfig {
            api_key: None,
            api_key_env: None,
            endpoint: None,
            units: default_units(),
            lang: default_lang(),
        };
        assert!(weather.resolve_api_key().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL_YAML.as_bytes()).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.services.weather.api_key.as_deref(), Some("owm-key"));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(AppConfig::load(Path::new("data/does-not-exist.yaml")).is_err());
    }
}
