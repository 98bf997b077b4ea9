//! Service layer error types
//!
//! Exactly two kinds are distinguished: a request-level failure (any transport
//! or status problem, collapsed together) and an entity missing from a fetched
//! collection.

use thiserror::Error;

use arena_client_ports::outbound::ApiError;
use arena_domain::CharacterId;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Non-OK status, unreachable backend, malformed body, bad image...
    #[error("Request failed: {0}")]
    RequestFailed(#[from] ApiError),

    /// The backend answered, but the expected character was not in it
    #[error("Character {id} not found")]
    NotFound { id: CharacterId },
}

impl ServiceError {
    pub fn not_found(id: CharacterId) -> Self {
        Self::NotFound { id }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Message suitable for showing inline in place of content.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::RequestFailed(_) => "Request failed. Please try again.",
            Self::NotFound { .. } => "Character not found.",
        }
    }
}
