//! Error types for header manifest parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for manifest parsing and validation.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Manifest file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}
