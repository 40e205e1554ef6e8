//! Error types for site configuration loading

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading or saving a site configuration
///
/// The record itself never fails; only file I/O and JSON decoding do.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {detail}")]
    Read { path: String, detail: String },

    /// Configuration file is not valid site config JSON
    #[error("Failed to parse config file '{path}': {detail}")]
    Parse { path: String, detail: String },

    /// Configuration file could not be written
    #[error("Failed to write config file '{path}': {detail}")]
    Write { path: String, detail: String },

    /// No home directory to look up the user-level config in
    #[error("HOME or USERPROFILE not set")]
    HomeNotSet,

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
