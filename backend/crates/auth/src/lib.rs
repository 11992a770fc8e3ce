//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Use cases (sign up, sign in, token check)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, routers, bearer middleware
//!
//! ## Features
//! - Account creation with name + email + password (`POST /users`)
//! - Login by email + password returning a bearer token (`POST /auth/login`)
//! - Middleware that gates other crates' routes on a valid bearer token
//!
//! ## Security Model
//! - Passwords stored as salted PBKDF2-HMAC-SHA512 (see `platform::password`)
//! - Unknown email and wrong password are indistinguishable to the caller
//! - Tokens are stateless HS256 JWTs; no refresh, no revocation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::AuthenticatedUser;
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{auth_router, users_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
