use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, RepositoryConfig};
use crate::model::{bank_messages, Message};

/// Upper bound for simulated latency.
pub const MAX_LATENCY_MS: u64 = 60_000;

/// Upper bound for the generated fixture size.
pub const MAX_MESSAGE_COUNT: u32 = 10_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read file '{path}': {source}")]
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

    #[error("Failed to parse fixture file '{path}': {source}")]
    FixtureError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `dirs::config_dir()/bank-messages/config.toml`, falling back to
    /// the current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("bank-messages").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
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
    /// - Latency stays within `MAX_LATENCY_MS`
    /// - Generated fixture size stays within `MAX_MESSAGE_COUNT`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let repository = &self.repository;

        if repository.latency_ms > MAX_LATENCY_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "latency_ms {} exceeds maximum of {}",
                    repository.latency_ms, MAX_LATENCY_MS
                ),
            });
        }

        if repository.message_count > MAX_MESSAGE_COUNT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "message_count {} exceeds maximum of {}",
                    repository.message_count, MAX_MESSAGE_COUNT
                ),
            });
        }

        Ok(())
    }
}

impl RepositoryConfig {
    /// Resolve the initial message set.
    ///
    /// Reads `fixture_path` when set, otherwise generates `message_count`
    /// fixture messages. Duplicate ids in a fixture file are rejected.
    pub fn load_fixture(&self) -> Result<Vec<Message>, ConfigError> {
        let Some(path) = &self.fixture_path else {
            return Ok(bank_messages(self.message_count));
        };

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let messages: Vec<Message> =
            serde_json::from_str(&content).map_err(|e| ConfigError::FixtureError {
                path: path.clone(),
                source: e,
            })?;

        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = messages.iter().find(|m| !seen.insert(m.id)) {
            return Err(ConfigError::ValidationError {
                message: format!("duplicate message id {} in '{}'", dup.id, path.display()),
            });
        }

        Ok(messages)
    }
}
