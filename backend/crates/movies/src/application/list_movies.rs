//! List Movies Use Case

use std::sync::Arc;

use crate::application::config::MoviesConfig;
use crate::domain::entities::Movie;
use crate::domain::repository::MovieRepository;
use crate::domain::value_objects::{MovieFilter, PageRequest, Pagination};
use crate::error::MovieResult;

/// Input DTO for list movies
#[derive(Debug, Clone, Default)]
pub struct ListMoviesInput {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub filter: MovieFilter,
}

/// Output DTO for list movies
#[derive(Debug, Clone)]
pub struct ListMoviesOutput {
    pub movies: Vec<Movie>,
    pub pagination: Pagination,
}

/// List Movies Use Case
pub struct ListMoviesUseCase<R>
where
    R: MovieRepository,
{
    repo: Arc<R>,
    config: Arc<MoviesConfig>,
}

impl<R> ListMoviesUseCase<R>
where
    R: MovieRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<MoviesConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: ListMoviesInput) -> MovieResult<ListMoviesOutput> {
        let page = PageRequest::new(input.page, input.limit, self.config.max_page_size)?;

        let (movies, total) = self
            .repo
            .find(&input.filter, page.skip(), page.limit())
            .await?;

        tracing::debug!(
            total,
            page = page.page(),
            returned = movies.len(),
            "Listed movies"
        );

        Ok(ListMoviesOutput {
            movies,
            pagination: Pagination::new(total, &page),
        })
    }
}
