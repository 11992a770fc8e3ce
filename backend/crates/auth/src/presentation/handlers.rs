//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use kernel::extract::AppJson;
use kernel::response::{ApiResponse, IdData};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{CreateUserRequest, LoginRequest, LoginResponse};

/// Shared state for user and auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Unwrap a required body field, treating absent and blank alike
fn required(field: Option<String>, name: &str) -> AuthResult<String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AuthError::InvalidInput(format!("{} is required", name))),
    }
}

// ============================================================================
// Users
// ============================================================================

/// GET /users
pub async fn greeting() -> &'static str {
    "Hello from users"
}

/// POST /users
pub async fn create_user<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> AuthResult<ApiResponse<IdData>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let input = SignUpInput {
        name: required(req.name, "name")?,
        email: required(req.email, "email")?,
        password: required(req.password, "password")?,
    };

    let output = SignUpUseCase::new(state.repo.clone()).execute(input).await?;

    Ok(ApiResponse::created("User created", IdData::from(output.user_id)))
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let input = SignInInput {
        email: required(req.email, "email")?,
        password: required(req.password, "password")?,
    };

    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
    }))
}
