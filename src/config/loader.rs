use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Upper bound for `content.philosopher_count`.
pub const MAX_PHILOSOPHER_COUNT: u32 = 50;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/philosphere/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("philosphere").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Service base URL and model are non-empty
    /// - Philosopher count is within `1..=MAX_PHILOSOPHER_COUNT`
    /// - Timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "service.base_url must not be empty".to_string(),
            });
        }

        if self.service.model.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "service.model must not be empty".to_string(),
            });
        }

        let count = self.content.philosopher_count;
        if count == 0 || count > MAX_PHILOSOPHER_COUNT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "content.philosopher_count must be between 1 and {}, got {}",
                    MAX_PHILOSOPHER_COUNT, count
                ),
            });
        }

        if self.service.timeout_seconds == 0 || self.service.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "service timeouts must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
