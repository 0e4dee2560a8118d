//! Configuration module for the editor
//!
//! Provides types and parsing for `tilepaint.toml` configuration.

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, ConfigError, CONFIG_FILE_NAME};
pub use schema::*;
