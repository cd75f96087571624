//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;

/// How dashboards are written by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// How log lines are formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Symbol appended to every displayed amount
    pub currency_symbol: String,

    /// Dashboard output format
    pub output_format: OutputFormat,

    /// Log line format
    pub log_format: LogFormat,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency_symbol = lookup("CURRENCY_SYMBOL").unwrap_or_else(|| "€".to_string());

        let output_format = lookup("OUTPUT_FORMAT")
            .unwrap_or_else(|| "text".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("OUTPUT_FORMAT"))?;

        let log_format = lookup("LOG_FORMAT")
            .unwrap_or_else(|| "pretty".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("LOG_FORMAT"))?;

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        Ok(Self {
            currency_symbol,
            output_format,
            log_format,
            environment,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            output_format: OutputFormat::Text,
            log_format: LogFormat::Pretty,
            environment: "development".to_string(),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("CURRENCY_SYMBOL", "$"),
            ("OUTPUT_FORMAT", "JSON"),
            ("LOG_FORMAT", "json"),
            ("ENVIRONMENT", "production"),
        ]))
        .unwrap();

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.is_production());
    }

    #[test]
    fn test_invalid_output_format() {
        let result = Config::from_lookup(lookup(&[("OUTPUT_FORMAT", "html")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue("OUTPUT_FORMAT"))));
    }
}
