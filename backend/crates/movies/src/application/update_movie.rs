//! Update Movie Use Case

use std::sync::Arc;

use kernel::id::MovieId;

use crate::domain::entities::MoviePatch;
use crate::domain::repository::MovieRepository;
use crate::error::{MovieError, MovieResult};

/// Update Movie Use Case
pub struct UpdateMovieUseCase<R>
where
    R: MovieRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateMovieUseCase<R>
where
    R: MovieRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &MovieId, patch: MoviePatch) -> MovieResult<MovieId> {
        let movie = self
            .repo
            .update_by_id(id, &patch)
            .await?
            .ok_or(MovieError::NotFound)?;

        tracing::info!(movie_id = %movie.id, "Movie updated");

        Ok(movie.id)
    }
}
