//! Application configuration.
//!
//! Loaded from a TOML file; every field has a default, so an empty file (or
//! no file at all) is a valid configuration.
//!
//! ```toml
//! [store]
//! channel_capacity = 32
//!
//! [logging]
//! level = "info"       # used when RUST_LOG is unset
//! format = "compact"   # compact | pretty | json
//! ```

use actor_framework::tracing::{setup_tracing, LogFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "VENDOR_SCORECARD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Actor store settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Request channel capacity of each resource actor.
    pub channel_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    /// Installs the global tracing subscriber. Fails if one is already set.
    pub fn init(&self) -> Result<(), ConfigError> {
        setup_tracing(&self.level, self.format).map_err(|e| ConfigError::Logging(e.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parses and validates a TOML document.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml(&content)
    }

    /// Loads `.env` if present, then the file named by `VENDOR_SCORECARD_CONFIG`.
    /// Defaults when the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.channel_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.channel_capacity",
                reason: "must be at least 1".into(),
            });
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = AppConfig::parse_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.store.channel_capacity, 32);
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_parse_full_document() {
        let config = AppConfig::parse_toml(
            r#"
            [store]
            channel_capacity = 8

            [logging]
            level = "vendor_scorecard=debug"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.channel_capacity, 8);
        assert_eq!(config.logging.level, "vendor_scorecard=debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let err = AppConfig::parse_toml("[store]\nchannel_capacity = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "store.channel_capacity", .. }
        ));
    }

    #[test]
    fn test_unknown_format_is_a_parse_error() {
        let err = AppConfig::parse_toml("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nformat = \"pretty\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AppConfig::load("/nonexistent/scorecard.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/scorecard.toml"));
    }
}
