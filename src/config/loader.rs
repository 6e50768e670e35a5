use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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
    /// Uses `~/.config/storyreel/config.toml` on Unix,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("storyreel").join("config.toml")
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
    /// Durations and tick rate must be positive, the swipe threshold must not
    /// be negative and rows must map to a positive distance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let preview = &self.preview;
        if preview.settle_ms == 0 {
            return Err(invalid("preview.settle_ms must be greater than 0"));
        }
        if preview.progress_ms == 0 {
            return Err(invalid("preview.progress_ms must be greater than 0"));
        }
        if preview.tick_ms == 0 {
            return Err(invalid("preview.tick_ms must be greater than 0"));
        }
        if !(preview.swipe_threshold >= 0.0) {
            return Err(invalid("preview.swipe_threshold must not be negative"));
        }
        if !(preview.units_per_row > 0.0) {
            return Err(invalid("preview.units_per_row must be greater than 0"));
        }
        if self.editor.max_image_bytes == 0 {
            return Err(invalid("editor.max_image_bytes must be greater than 0"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::ValidationError {
        message: message.to_string(),
    }
}
