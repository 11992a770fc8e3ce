//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Required field missing, blank or malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An account with this email already exists
    #[error("User already exists")]
    UserAlreadyExists,

    /// Unknown email or wrong password (deliberately indistinguishable)
    #[error("Wrong credential")]
    WrongCredential,

    /// No bearer token on a protected route
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token present but rejected
    #[error("Invalid bearer token: {0}")]
    InvalidToken(TokenError),

    /// Token could not be issued
    #[error("Token issuance failed: {0}")]
    TokenIssue(TokenError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidInput(_)
            | AuthError::UserAlreadyExists
            | AuthError::WrongCredential => StatusCode::BAD_REQUEST,
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken(_) => StatusCode::FORBIDDEN,
            AuthError::TokenIssue(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidInput(_)
            | AuthError::UserAlreadyExists
            | AuthError::WrongCredential => ErrorKind::BadRequest,
            AuthError::MissingToken => ErrorKind::Unauthorized,
            AuthError::InvalidToken(_) => ErrorKind::Forbidden,
            AuthError::TokenIssue(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Fixed message shown to the caller; never carries internal detail
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthError::UserAlreadyExists => "User already exists",
            AuthError::WrongCredential => "Wrong credential",
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
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::TokenIssue(e) => {
                tracing::error!(error = %e, "Token issuance failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::WrongCredential => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken(e) => {
                tracing::warn!(reason = %e, "Bearer token rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = kernel::response::Envelope::empty(self.public_message());
        (status, axum::Json(body)).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::InvalidInput(err.message().to_owned()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}
