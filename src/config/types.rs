use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::{SortOrder, DEFAULT_MESSAGE_COUNT};
use crate::repository::DEFAULT_LATENCY;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// Settings for the simulated message backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Simulated fetch latency in milliseconds (default: 1000).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Number of generated fixture messages (default: 21).
    #[serde(default = "default_message_count")]
    pub message_count: u32,
    /// JSON file with a message array, used instead of the generated fixture.
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,
}

/// Initial view preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Sort order applied before the user picks one.
    #[serde(default)]
    pub default_sort: SortOrder,
}

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY.as_millis() as u64
}

fn default_message_count() -> u32 {
    DEFAULT_MESSAGE_COUNT
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            message_count: default_message_count(),
            fixture_path: None,
        }
    }
}
