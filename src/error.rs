//! Error types and handling for the `TripAI` backend

use thiserror::Error;

/// Main error type for the `TripAI` backend
#[derive(Error, Debug)]
pub enum TripAiError {
    /// Missing credential or invalid configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Provider or network failure on the primary generation call
    #[error("Upstream error: {message}")]
    Upstream { message: String },

    /// Response envelope or body could not be understood
    #[error("Format error: {message}")]
    Format { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Export could not be produced from the plan
    #[error("Export error: {message}")]
    Export { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TripAiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new format error
    pub fn format<S: Into<String>>(message: S) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new export error
    pub fn export<S: Into<String>>(message: S) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripAiError::Config { .. } => {
                "The trip planner is not configured correctly. Please check the API keys."
                    .to_string()
            }
            TripAiError::Upstream { .. } => {
                "Failed to generate trip plan. The AI model may be temporarily unavailable or the request was too complex."
                    .to_string()
            }
            TripAiError::Format { message } => message.clone(),
            TripAiError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripAiError::Export { message } => message.clone(),
            TripAiError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
