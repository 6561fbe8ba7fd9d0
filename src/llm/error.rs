//! Generation call error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a generation call
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Invalid or rejected API key: {0}")]
    Unauthorized(String),

    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response carried no text: {0}")]
    EmptyResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenerationError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, message: String, retry_after: Option<Duration>) -> Self {
        match status {
            401 | 403 => GenerationError::Unauthorized(message),
            429 => GenerationError::RateLimited { retry_after },
            status => GenerationError::Api { status, message },
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            GenerationError::RateLimited { .. } => true,
            GenerationError::Api { status, .. } => *status >= 500,
            GenerationError::Transport(_) | GenerationError::Http(_) => true,
            GenerationError::Unauthorized(_)
            | GenerationError::EmptyResponse(_)
            | GenerationError::Json(_) => false,
        }
    }
}
