//! Sign In Use Case
//!
//! Checks email + password and issues a bearer token.

use std::sync::Arc;

use platform::password::{ClearTextPassword, verify_unknown_user};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed bearer token
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::InvalidInput("email and password are required".into()));
        }

        // A malformed email cannot belong to any account
        let email = Email::new(input.email).map_err(|_| AuthError::WrongCredential)?;
        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::WrongCredential)?;

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            verify_unknown_user(&password);
            return Err(AuthError::WrongCredential);
        };

        if !user.verify_password(&password) {
            return Err(AuthError::WrongCredential);
        }

        let token = self
            .config
            .tokens
            .issue(user.user_id.into_uuid())
            .map_err(AuthError::TokenIssue)?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput { token })
    }
}
