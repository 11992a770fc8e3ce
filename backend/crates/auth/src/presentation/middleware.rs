//! Auth Middleware
//!
//! Bearer token gate for protected routes.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{AuthenticatedUser, CheckTokenUseCase};
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub config: Arc<AuthConfig>,
}

impl AuthMiddlewareState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Middleware that requires a valid bearer token
///
/// Missing token → 401, rejected token → 403. On success the caller is
/// stored in request extensions as [`AuthenticatedUser`].
///
/// ```ignore
/// router.route_layer(axum::middleware::from_fn_with_state(state, require_bearer_token))
/// ```
pub async fn require_bearer_token(
    State(state): State<AuthMiddlewareState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer_token(req.headers());

    let user = CheckTokenUseCase::new(state.config.clone()).execute(token)?;

    tracing::debug!(user_id = %user.user_id, "Bearer token accepted");
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Handlers behind [`require_bearer_token`] can take the caller directly
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or(AuthError::MissingToken)
    }
}
