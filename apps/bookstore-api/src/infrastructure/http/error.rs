//! Mapping from application errors to HTTP responses.
//!
//! | Error | Status | Code |
//! |-------|--------|------|
//! | Malformed body | 400 | `INVALID_REQUEST` |
//! | Undecodable path segment | 400 | `INVALID_REQUEST` |
//! | `BookError::NotFound` | 404 | `BOOK_NOT_FOUND` |
//! | `BookError::Internal` | 500 | `INTERNAL_ERROR` |

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::response::ErrorResponse;
use crate::domain::catalog::BookError;
use crate::infrastructure::metrics::Outcome;

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be decoded.
    #[error("{0}")]
    InvalidRequest(String),

    /// Referenced book does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure below the controller.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::NotFound(_) => "BOOK_NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Metrics outcome label for this error.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        match self {
            Self::InvalidRequest(_) => Outcome::InvalidRequest,
            Self::NotFound(_) => Outcome::NotFound,
            Self::Internal(_) => Outcome::Error,
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound { .. } => Self::NotFound(err.to_string()),
            BookError::Internal { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(message) = &self {
            tracing::error!(error = %message, "Request failed");
        }

        let body = ErrorResponse {
            code: self.code().to_string(),
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
