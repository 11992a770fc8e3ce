//! Get Movie Use Case

use std::sync::Arc;

use kernel::id::MovieId;

use crate::domain::entities::Movie;
use crate::domain::repository::MovieRepository;
use crate::error::{MovieError, MovieResult};

/// Get Movie Use Case
pub struct GetMovieUseCase<R>
where
    R: MovieRepository,
{
    repo: Arc<R>,
}

impl<R> GetMovieUseCase<R>
where
    R: MovieRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &MovieId) -> MovieResult<Movie> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(MovieError::NotFound)
    }
}
