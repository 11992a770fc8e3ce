//! Movies Error Types
//!
//! This module provides movie-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Movies-specific result type alias
pub type MovieResult<T> = Result<T, MovieError>;

/// Movies-specific error variants
#[derive(Debug, Error)]
pub enum MovieError {
    /// Missing title, out-of-range paging, malformed body or query
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No movie under this id (or the id is not a valid id)
    #[error("Movie not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MovieError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MovieError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            MovieError::NotFound => StatusCode::NOT_FOUND,
            MovieError::Database(_) | MovieError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MovieError::InvalidInput(_) => ErrorKind::BadRequest,
            MovieError::NotFound => ErrorKind::NotFound,
            MovieError::Database(_) | MovieError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Fixed message shown to the caller
    pub fn public_message(&self) -> &'static str {
        match self {
            MovieError::NotFound => "Movie not found",
            _ => self.kind().as_str(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MovieError::Database(e) => {
                tracing::error!(error = %e, "Movies database error");
            }
            MovieError::Internal(msg) => {
                tracing::error!(message = %msg, "Movies internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Movies error");
            }
        }
    }
}

impl IntoResponse for MovieError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = kernel::response::Envelope::empty(self.public_message());
        (status, axum::Json(body)).into_response()
    }
}

impl From<MovieError> for AppError {
    fn from(err: MovieError) -> Self {
        err.to_app_error()
    }
}
