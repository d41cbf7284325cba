//! Error types for propnav-core
//!
//! Only configuration loading can fail. Menu transitions, route matching and
//! icon resolution are total and never produce an error.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while loading or validating a navigation configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read navigation config: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse TOML in {path}: {message}")]
    TomlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    // ===================
    // Validation Errors
    // ===================
    #[error("Navigation config has no items")]
    NoItems,

    #[error("Duplicate navigation path: {path}")]
    DuplicatePath { path: String },

    #[error("Navigation path must start with '/': {path}")]
    RelativePath { path: String },

    #[error("Empty label for navigation path: {path}")]
    EmptyLabel { path: String },

    #[error("More than one favorites entry: {first} and {second}")]
    MultipleFavorites { first: String, second: String },

    #[error(
        "Breakpoints must be strictly ascending (secondary_bar={secondary_bar}, compact={compact}, wide={wide})"
    )]
    InvalidBreakpoints {
        secondary_bar: u32,
        compact: u32,
        wide: u32,
    },

    #[error("compact_limit must be at least 1")]
    InvalidCompactLimit,
}

impl ConfigError {
    /// Actionable hint shown by the CLI next to the error message
    pub fn suggestion(&self) -> Option<String> {
        match self {
            ConfigError::FileRead { path, .. } => {
                Some(format!("Check the file exists: ls {}", path.display()))
            }
            ConfigError::JsonParse { .. } => {
                Some("Validate JSON syntax with: jq . <file>".to_string())
            }
            ConfigError::DuplicatePath { .. } => {
                Some("Each navigation item needs its own path".to_string())
            }
            ConfigError::MultipleFavorites { .. } => {
                Some("Set `favorites = true` on a single item".to_string())
            }
            _ => None,
        }
    }
}
