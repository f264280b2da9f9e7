// src/error.rs

//! Unified error handling for the sentiment trigger.

use std::fmt;

use thiserror::Error;

/// Result type alias for trigger operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// AWS S3 error
    #[error("S3 error: {0}")]
    S3(String),

    /// Amazon Comprehend error
    #[error("Comprehend error: {0}")]
    Service(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization failed
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The trigger event did not have the expected shape
    #[error("Malformed event record {index}: {message}")]
    Event { index: usize, message: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an S3 error from any displayable source.
    pub fn s3(message: impl fmt::Display) -> Self {
        Self::S3(message.to_string())
    }

    /// Create a Comprehend error from any displayable source.
    pub fn service(message: impl fmt::Display) -> Self {
        Self::Service(message.to_string())
    }

    /// Create a malformed event error for the record at `index`.
    pub fn event(index: usize, message: impl fmt::Display) -> Self {
        Self::Event {
            index,
            message: message.to_string(),
        }
    }

    /// Whether this error means the invocation payload itself is unusable.
    pub fn is_malformed_event(&self) -> bool {
        matches!(self, Self::Event { .. })
    }
}
