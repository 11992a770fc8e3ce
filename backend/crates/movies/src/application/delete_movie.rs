//! Delete Movie Use Case

use std::sync::Arc;

use kernel::id::{MovieId, UserId};

use crate::domain::repository::MovieRepository;
use crate::error::{MovieError, MovieResult};

/// Delete Movie Use Case
pub struct DeleteMovieUseCase<R>
where
    R: MovieRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteMovieUseCase<R>
where
    R: MovieRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `deleted_by` is recorded in the log only
    pub async fn execute(&self, id: &MovieId, deleted_by: &UserId) -> MovieResult<()> {
        if !self.repo.delete_by_id(id).await? {
            return Err(MovieError::NotFound);
        }

        tracing::info!(movie_id = %id, user_id = %deleted_by, "Movie deleted");

        Ok(())
    }
}
