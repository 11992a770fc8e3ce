//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{Movie, MovieDetails, MoviePatch, NewMovie};
pub use repository::MovieRepository;
pub use value_objects::{MovieFilter, PageRequest, Pagination, RangeFilter};
