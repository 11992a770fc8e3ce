//! Boundary Extractors
//!
//! Wrappers around axum's `Json` and `Query` whose rejections become
//! [`AppError`] (400 "Bad Request" in the standard envelope) instead of
//! axum's plain-text rejection bodies.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::app_error::AppError;

/// JSON request body
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        count: u32,
    }

    #[tokio::test]
    async fn test_json_rejection_is_bad_request() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"count":"many"}"#))
            .unwrap();

        let err = AppJson::<Payload>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Bad Request");
    }

    #[tokio::test]
    async fn test_json_accepts_valid_body() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"count":3}"#))
            .unwrap();

        let AppJson(payload) = AppJson::<Payload>::from_request(req, &()).await.unwrap();
        assert_eq!(payload.count, 3);
    }

    #[tokio::test]
    async fn test_query_rejection_is_bad_request() {
        let req = Request::builder()
            .uri("/?count=-1")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = req.into_parts();

        let err = AppQuery::<Payload>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
