//! Core error types and traits for askchoice

use std::time::Duration;

use thiserror::Error;

use crate::choice::ChoiceError;

/// Result type alias for askchoice operations
pub type AskResult<T> = Result<T, AskError>;

/// Unified error trait that all askchoice errors implement.
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }

    /// Check if this error is retryable
    fn is_retryable(&self) -> bool {
        false
    }
}

/// Main error type for askchoice
#[derive(Error, Debug, Clone)]
pub enum AskError {
    /// The choice request failed structural validation
    #[error("Invalid choice request: {0}")]
    Structural(#[from] ChoiceError),

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// The channel between the invocation and the UI broke down
    #[error("Input channel error: {message}")]
    Channel {
        message: String,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        context: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        context: Option<String>,
    },

    /// Waiting for the operator timed out
    #[error("Input timeout after {after:?}")]
    Timeout {
        after: Duration,
        context: Option<String>,
    },

    /// The invocation was cancelled
    #[error("Task was cancelled")]
    Cancelled,

    /// Generic error with context
    #[error("Error: {message}")]
    Other {
        message: String,
        context: Option<String>,
    },
}
