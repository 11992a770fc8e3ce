//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::bad_request("Bad Request").with_source(err)
        } else {
            AppError::internal_default().with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Store failures never leak detail; every one of them is a generic 500.
#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::internal_default().with_source(err)
    }
}

/// Postgres `unique_violation`
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use crate::response::Envelope;
        use axum::Json;
        use axum::http::StatusCode;

        self.log();

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(Envelope::empty(self.message().to_owned()))).into_response()
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request("Bad Request").with_source(rejection)
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        AppError::bad_request("Bad Request").with_source(rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
        assert_eq!(app_err.message(), "Bad Request");
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_error_is_generic_500() {
        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.status_code(), 500);
        assert_eq!(app_err.message(), "Internal Server Error");
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response_uses_envelope() {
        use axum::response::IntoResponse;

        let response = AppError::not_found("Movie not found").into_response();
        assert_eq!(response.status(), 404);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Movie not found");
        assert_eq!(json["data"], serde_json::json!({}));
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_internal_error_hides_source() {
        use axum::response::IntoResponse;

        let err = AppError::internal_default()
            .with_source(std::io::Error::other("password authentication failed"));
        let response = err.into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("password authentication"));
        assert!(text.contains("Internal Server Error"));
    }
}
