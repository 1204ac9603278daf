//! HTTP error responses.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors a handler can return; each maps to one status code and a
/// plain-text body.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Path segment failed identifier validation.
    #[error("Invalid Note ID")]
    InvalidNoteId,

    #[error("{0}")]
    BadRequest(String),

    /// Raw-mode read of an absent note.
    #[error("Note not found.")]
    NotFound,

    /// Key-value store call failed.
    #[error("Storage temporarily unavailable")]
    StoreUnavailable(String),

    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidNoteId | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<notepad_core::Error> for ApiError {
    fn from(err: notepad_core::Error) -> Self {
        match err {
            notepad_core::Error::InvalidIdentifier(_) => ApiError::InvalidNoteId,
            notepad_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            notepad_core::Error::StoreUnavailable(msg) => ApiError::StoreUnavailable(msg),
            notepad_core::Error::Config(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::StoreUnavailable(detail) | ApiError::Internal(detail) => {
                tracing::error!(subsystem = "api", status = status.as_u16(), error = %detail, "Request failed");
            }
            _ => {
                tracing::debug!(subsystem = "api", status = status.as_u16(), error = %self, "Request rejected");
            }
        }

        (
            status,
            [
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/plain; charset=utf-8"),
                ),
                (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
            ],
            self.to_string(),
        )
            .into_response()
    }
}
