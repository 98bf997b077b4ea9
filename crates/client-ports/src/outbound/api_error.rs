//! Transport-level errors reported by API adapters.

use thiserror::Error;

/// Everything that can go wrong between building a request and decoding its
/// response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The backend answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body could not be decoded
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),

    /// The payload was rejected before sending (e.g., undecodable image)
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
