//! Unit and router tests for Auth crate

#[cfg(test)]
mod helpers {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, Response, header};
    use std::sync::Arc;

    use crate::application::config::AuthConfig;
    use crate::infra::memory::InMemoryUserRepository;
    use crate::presentation::router::{auth_router, users_router};

    pub fn app(repo: InMemoryUserRepository, config: Arc<AuthConfig>) -> Router {
        let repo = Arc::new(repo);
        Router::new()
            .nest("/users", users_router(repo.clone(), config.clone()))
            .nest("/auth", auth_router(repo, config))
    }

    pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub async fn body_json(response: Response<Body>) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    pub fn ana() -> serde_json::Value {
        serde_json::json!({
            "name": "Ana",
            "email": "ana@movies.test",
            "password": "s3cret-pass"
        })
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::AuthError;
    use axum::http::StatusCode;
    use kernel::error::kind::ErrorKind;
    use platform::token::TokenError;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::InvalidInput("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::UserAlreadyExists.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::WrongCredential.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::InvalidToken(TokenError::Expired).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_messages() {
        assert_eq!(AuthError::InvalidInput("email".into()).public_message(), "Bad Request");
        assert_eq!(AuthError::UserAlreadyExists.public_message(), "User already exists");
        assert_eq!(AuthError::WrongCredential.public_message(), "Wrong credential");
        assert_eq!(
            AuthError::Internal("pool timed out".into()).public_message(),
            "Internal Server Error"
        );
    }

    #[test]
    fn test_to_app_error() {
        let app = AuthError::WrongCredential.to_app_error();
        assert_eq!(app.kind(), ErrorKind::BadRequest);
        assert_eq!(app.message(), "Wrong credential");
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::config::AuthConfig;
    use crate::application::{
        CheckTokenUseCase, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase,
    };
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::email::Email;
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryUserRepository;
    use platform::token::TokenError;

    fn sign_up_input(email: &str) -> SignUpInput {
        SignUpInput {
            name: "Ana".into(),
            email: email.into(),
            password: "s3cret-pass".into(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_normalizes_email() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let output = SignUpUseCase::new(repo.clone())
            .execute(sign_up_input("  Ana@Movies.TEST "))
            .await
            .unwrap();

        let stored = repo
            .find_by_email(&Email::new("ana@movies.test").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.user_id, output.user_id);
        assert_eq!(repo.find_by_id(&output.user_id).await.unwrap().unwrap().name.as_str(), "Ana");
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_email_case_insensitive() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let use_case = SignUpUseCase::new(repo.clone());

        use_case.execute(sign_up_input("ana@movies.test")).await.unwrap();
        let err = use_case
            .execute(sign_up_input("ANA@movies.test"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserAlreadyExists));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_sign_up_rejects_malformed_email() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let err = SignUpUseCase::new(repo.clone())
            .execute(sign_up_input("not-an-email"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidInput(_)));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_sign_in_token_resolves_to_user() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let config = Arc::new(AuthConfig::with_random_secret());

        let signed_up = SignUpUseCase::new(repo.clone())
            .execute(sign_up_input("ana@movies.test"))
            .await
            .unwrap();

        let signed_in = SignInUseCase::new(repo, config.clone())
            .execute(SignInInput {
                email: "ANA@movies.test".into(),
                password: "s3cret-pass".into(),
            })
            .await
            .unwrap();

        let caller = CheckTokenUseCase::new(config)
            .execute(Some(&signed_in.token))
            .unwrap();
        assert_eq!(caller.user_id, signed_up.user_id);
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password_and_unknown_email_identical() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let config = Arc::new(AuthConfig::with_random_secret());
        SignUpUseCase::new(repo.clone())
            .execute(sign_up_input("ana@movies.test"))
            .await
            .unwrap();

        let use_case = SignInUseCase::new(repo, config);

        let wrong_password = use_case
            .execute(SignInInput {
                email: "ana@movies.test".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        let unknown_email = use_case
            .execute(SignInInput {
                email: "bob@movies.test".into(),
                password: "s3cret-pass".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::WrongCredential));
        assert!(matches!(unknown_email, AuthError::WrongCredential));
    }

    #[test]
    fn test_check_token_missing_and_invalid() {
        let config = Arc::new(AuthConfig::with_random_secret());
        let use_case = CheckTokenUseCase::new(config);

        assert!(matches!(use_case.execute(None), Err(AuthError::MissingToken)));
        assert!(matches!(
            use_case.execute(Some("garbage")),
            Err(AuthError::InvalidToken(TokenError::Malformed))
        ));
    }

    #[test]
    fn test_check_token_from_other_secret() {
        let issuer = AuthConfig::with_random_secret();
        let token = issuer.tokens.issue(uuid::Uuid::new_v4()).unwrap();

        let use_case = CheckTokenUseCase::new(Arc::new(AuthConfig::with_random_secret()));
        assert!(matches!(
            use_case.execute(Some(&token)),
            Err(AuthError::InvalidToken(TokenError::InvalidSignature))
        ));
    }

    #[test]
    fn test_config_rejects_empty_secret() {
        let err = AuthConfig::new("", std::time::Duration::from_secs(3600)).unwrap_err();
        assert_eq!(err, TokenError::MissingSecret);
    }
}

#[cfg(test)]
mod router_tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    use super::helpers::*;
    use crate::application::config::AuthConfig;
    use crate::infra::memory::InMemoryUserRepository;

    #[tokio::test]
    async fn test_greeting() {
        let app = app(
            InMemoryUserRepository::default(),
            Arc::new(AuthConfig::with_random_secret()),
        );

        let response = app
            .oneshot(Request::get("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Hello from users");
    }

    #[tokio::test]
    async fn test_create_user_twice() {
        let app = app(
            InMemoryUserRepository::default(),
            Arc::new(AuthConfig::with_random_secret()),
        );

        let first = app
            .clone()
            .oneshot(json_request("POST", "/users", ana()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);
        let body = body_json(first).await;
        assert_eq!(body["message"], "User created");
        assert!(body["data"]["_id"].as_str().is_some());

        let second = app
            .oneshot(json_request("POST", "/users", ana()))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(second).await,
            serde_json::json!({ "message": "User already exists", "data": {} })
        );
    }

    #[tokio::test]
    async fn test_create_user_missing_field() {
        let app = app(
            InMemoryUserRepository::default(),
            Arc::new(AuthConfig::with_random_secret()),
        );

        let response = app
            .oneshot(json_request(
                "POST",
                "/users",
                serde_json::json!({ "name": "Ana", "email": "ana@movies.test" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "Bad Request");
    }

    #[tokio::test]
    async fn test_create_user_malformed_json() {
        let app = app(
            InMemoryUserRepository::default(),
            Arc::new(AuthConfig::with_random_secret()),
        );

        let request = Request::post("/users")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "Bad Request");
    }

    #[tokio::test]
    async fn test_login_returns_bare_token() {
        let config = Arc::new(AuthConfig::with_random_secret());
        let app = app(InMemoryUserRepository::default(), config.clone());

        let created = app
            .clone()
            .oneshot(json_request("POST", "/users", ana()))
            .await
            .unwrap();
        let user_id = body_json(created).await["data"]["_id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .oneshot(json_request(
                "POST",
                "/auth/login",
                serde_json::json!({ "email": "ana@movies.test", "password": "s3cret-pass" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body.get("message").is_none());
        let token = body["token"].as_str().unwrap();
        assert_eq!(config.tokens.verify(token).unwrap().to_string(), user_id);
    }

    #[tokio::test]
    async fn test_login_wrong_credential() {
        let app = app(
            InMemoryUserRepository::default(),
            Arc::new(AuthConfig::with_random_secret()),
        );
        app.clone()
            .oneshot(json_request("POST", "/users", ana()))
            .await
            .unwrap();

        let wrong_password = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/auth/login",
                serde_json::json!({ "email": "ana@movies.test", "password": "nope" }),
            ))
            .await
            .unwrap();
        let unknown_email = app
            .oneshot(json_request(
                "POST",
                "/auth/login",
                serde_json::json!({ "email": "bob@movies.test", "password": "s3cret-pass" }),
            ))
            .await
            .unwrap();

        assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
        assert_eq!(unknown_email.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(wrong_password).await, body_json(unknown_email).await);
    }

    #[tokio::test]
    async fn test_login_missing_password() {
        let app = app(
            InMemoryUserRepository::default(),
            Arc::new(AuthConfig::with_random_secret()),
        );

        let response = app
            .oneshot(json_request(
                "POST",
                "/auth/login",
                serde_json::json!({ "email": "ana@movies.test" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "Bad Request");
    }
}

#[cfg(test)]
mod middleware_tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::application::AuthenticatedUser;
    use crate::application::config::AuthConfig;
    use crate::presentation::middleware::{AuthMiddlewareState, require_bearer_token};

    fn protected(config: Arc<AuthConfig>) -> Router {
        Router::new()
            .route(
                "/secret",
                get(|Extension(user): Extension<AuthenticatedUser>| async move {
                    user.user_id.to_string()
                }),
            )
            .route_layer(axum::middleware::from_fn_with_state(
                AuthMiddlewareState::new(config),
                require_bearer_token,
            ))
    }

    fn request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::get("/secret");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_is_401() {
        let app = protected(Arc::new(AuthConfig::with_random_secret()));

        let response = app.clone().oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app.oneshot(request(Some("Bearer "))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_token_is_403() {
        let app = protected(Arc::new(AuthConfig::with_random_secret()));

        let response = app.oneshot(request(Some("Bearer not.a.jwt"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_other_scheme_is_403() {
        let config = Arc::new(AuthConfig::with_random_secret());
        let token = config.tokens.issue(uuid::Uuid::new_v4()).unwrap();
        let app = protected(config);

        // The scheme word is ignored, so the value is judged as a token
        let response = app
            .clone()
            .oneshot(request(Some("Token abc")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app
            .oneshot(request(Some(&format!("Token {}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_expired_token_is_403() {
        let config = Arc::new(AuthConfig::with_random_secret());
        let issued = chrono::Utc::now() - chrono::Duration::hours(2);
        let token = config.tokens.issue_at(uuid::Uuid::new_v4(), issued).unwrap();

        let response = protected(config)
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_valid_token_passes_user_through() {
        let config = Arc::new(AuthConfig::with_random_secret());
        let user_id = uuid::Uuid::new_v4();
        let token = config.tokens.issue(user_id).unwrap();

        let response = protected(config)
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(bytes.to_vec()).unwrap(), user_id.to_string());
    }
}
