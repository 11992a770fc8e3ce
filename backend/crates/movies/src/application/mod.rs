//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_movie;
pub mod delete_movie;
pub mod get_movie;
pub mod list_movies;
pub mod update_movie;

// Re-exports
pub use config::MoviesConfig;
pub use create_movie::{CreateMovieInput, CreateMovieUseCase};
pub use delete_movie::DeleteMovieUseCase;
pub use get_movie::GetMovieUseCase;
pub use list_movies::{ListMoviesInput, ListMoviesOutput, ListMoviesUseCase};
pub use update_movie::UpdateMovieUseCase;
