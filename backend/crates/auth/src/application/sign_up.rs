//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_id: UserId,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let name = UserName::new(&input.name)?;
        let email = Email::new(input.email)?;
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::InvalidInput(e.to_string()))?;

        // Fast path; the unique index still catches a concurrent insert
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let user = User::new(name, email, &password);
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email_domain = %user.email.domain(),
            "User signed up"
        );

        Ok(SignUpOutput {
            user_id: user.user_id,
        })
    }
}
