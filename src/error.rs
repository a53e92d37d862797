//! Application error type and its HTTP representation.
//!
//! Every request-path failure is an [`AppError`]. Client-facing variants carry
//! a fixed human-readable message; server-side variants are logged with full
//! detail and rendered as a generic 500 so that no internals leak.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned for any server-side failure.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Flat JSON error body: `{ "error": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors produced while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The `longUrl` field was absent, null or empty.
    #[error("The URL field is required.")]
    MissingUrl,

    /// The `longUrl` value did not match the accepted URL pattern.
    #[error("Invalid URL format. Please provide a valid URL.")]
    InvalidUrl,

    /// The request body could not be decoded.
    #[error("{0}")]
    InvalidBody(String),

    /// No mapping exists for the requested short code.
    #[error("URL not found")]
    NotFound,

    /// Every generated code collided with an existing one.
    #[error("Failed to generate a unique short code")]
    CodeCollision,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingUrl | AppError::InvalidUrl | AppError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::CodeCollision | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns true for failures caused by the server rather than the client.
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Message safe to show to clients.
    pub fn public_message(&self) -> String {
        if self.is_server_error() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
