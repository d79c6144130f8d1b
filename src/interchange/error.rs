//! Error types for sample export.

use thiserror::Error;

/// Errors that can occur while exporting extraction samples.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// IO error while writing an export.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No format is registered for a file extension.
    #[error("Unsupported format: {0}")]
    Unsupported(String),
}

impl InterchangeError {
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }
}
