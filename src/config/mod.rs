//! Configuration loading.
//!
//! Settings live in `~/.config/bank-messages/config.toml`. A missing file
//! means defaults; command-line flags override individual values.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, RepositoryConfig, ViewConfig};
