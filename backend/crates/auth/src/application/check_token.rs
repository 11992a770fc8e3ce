//! Check Token Use Case
//!
//! Verifies a bearer token and resolves the caller's user id.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Caller identity attached to requests that passed the bearer check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Check token use case
pub struct CheckTokenUseCase {
    config: Arc<AuthConfig>,
}

impl CheckTokenUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// `None` means no token was sent (401); a rejected token is 403
    pub fn execute(&self, token: Option<&str>) -> AuthResult<AuthenticatedUser> {
        let token = token.ok_or(AuthError::MissingToken)?;

        let user_id = self
            .config
            .tokens
            .verify(token)
            .map_err(AuthError::InvalidToken)?;

        Ok(AuthenticatedUser {
            user_id: UserId::from_uuid(user_id),
        })
    }
}
