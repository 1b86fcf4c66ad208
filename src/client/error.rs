//! Review backend errors

use thiserror::Error;

/// Errors that can occur when talking to the review backend
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Review backend unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    Decode(String),

    #[error("Question is empty")]
    EmptyQuestion,
}

impl ClientError {
    /// Classify a transport error the way callers care about it
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ClientError::Timeout
        } else if error.is_connect() {
            ClientError::Unavailable
        } else {
            ClientError::Request(error)
        }
    }

    /// Whether the backend answered at all (as opposed to a transport failure)
    pub fn is_status(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }
}
