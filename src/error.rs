//! Error types for the StockPilot session core

use thiserror::Error;

/// Result type alias for session core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the StockPilot session core
#[derive(Error, Debug)]
pub enum Error {
    /// Credentials rejected, backend unreachable, or malformed login response
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Login result discarded because a newer login attempt was issued
    #[error("Login superseded by a newer attempt")]
    Superseded,

    /// Authorization failed (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Validation error (422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server error (5xx)
    #[error("Server error: {0}")]
    Server(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Durable storage error
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Server(_))
    }

    /// Create an error from an HTTP status code and message
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 => Error::Authentication(message),
            403 => Error::Forbidden(message),
            422 => Error::Validation(message),
            500..=599 => Error::Server(message),
            _ => Error::Other(format!("HTTP {}: {}", status, message)),
        }
    }
}
