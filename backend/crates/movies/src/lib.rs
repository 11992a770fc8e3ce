//! Movies Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Movie entity, filters and pagination, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Behaviour
//! - Listing is always sorted by release date, newest first
//! - Updates only overwrite fields sent with a truthy value
//! - Unknown and malformed ids are both "Movie not found"
//! - Deleting requires a bearer token (see `auth::middleware`)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::MoviesConfig;
pub use error::{MovieError, MovieResult};
pub use infra::postgres::PgMovieRepository;
pub use presentation::router::movies_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
