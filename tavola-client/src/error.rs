//! Client error types

use thiserror::Error;

/// Client error type
///
/// Backend failures are passed through as they arrive: the client does not
/// interpret status codes beyond success or failure.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or transport failure
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response from the backend
    #[error("Request rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client-side validation failed; nothing was sent
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the backend was reached and answered with a failure
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
