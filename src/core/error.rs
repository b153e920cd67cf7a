//! Error types for configuration loading.

use thiserror::Error;

/// Errors that can occur when loading the game config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be found.
    #[error("Config file not found: {0}")]
    NotFound(String),

    /// File could not be read.
    #[error("Failed to read config '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    /// A value is outside the range the game can use.
    #[error("Invalid value for '{field}': {value}")]
    Invalid { field: &'static str, value: f32 },
}
