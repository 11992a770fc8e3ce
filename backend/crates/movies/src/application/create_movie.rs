//! Create Movie Use Case

use std::sync::Arc;

use kernel::id::MovieId;

use crate::domain::entities::{MovieDetails, NewMovie};
use crate::domain::repository::MovieRepository;
use crate::error::MovieResult;

/// Input DTO for create movie
#[derive(Debug, Clone, Default)]
pub struct CreateMovieInput {
    pub title: Option<String>,
    pub details: MovieDetails,
}

/// Create Movie Use Case
pub struct CreateMovieUseCase<R>
where
    R: MovieRepository,
{
    repo: Arc<R>,
}

impl<R> CreateMovieUseCase<R>
where
    R: MovieRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateMovieInput) -> MovieResult<MovieId> {
        let new_movie = NewMovie::new(input.title, input.details)?;
        let movie = self.repo.insert(new_movie).await?;

        tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

        Ok(movie.id)
    }
}
