//! Client error types

use thiserror::Error;

/// Errors that can occur when talking to the analysis service
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Analysis service unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx reply carrying an `{"error": ...}` body
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Non-2xx reply without a recognizable error body
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Error text reported by the service itself, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } | ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Unavailable
        } else {
            ClientError::Request(err)
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
