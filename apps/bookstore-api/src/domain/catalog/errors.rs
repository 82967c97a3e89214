//! Catalog errors.

use thiserror::Error;

use crate::domain::shared::BookId;

/// Errors returned by catalog persistence and services.
///
/// Adapters produce these; services pass them through unchanged; only the
/// HTTP controller translates them into status codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// No stored book has the given identifier.
    #[error("book not found: {id}")]
    NotFound {
        /// Requested identifier.
        id: String,
    },

    /// The adapter failed for a reason unrelated to the request.
    #[error("internal storage error: {message}")]
    Internal {
        /// Failure description.
        message: String,
    },
}

impl BookError {
    /// Create a `NotFound` error for an identifier.
    #[must_use]
    pub fn not_found(id: &BookId) -> Self {
        Self::NotFound {
            id: id.as_str().to_string(),
        }
    }

    /// Create an `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this is a `NotFound` error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
