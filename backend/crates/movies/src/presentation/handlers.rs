//! HTTP Handlers

use auth::AuthenticatedUser;
use axum::extract::{Path, State};
use kernel::extract::{AppJson, AppQuery};
use kernel::id::MovieId;
use kernel::response::{ApiResponse, Empty, IdData};
use std::sync::Arc;

use crate::application::config::MoviesConfig;
use crate::application::{
    CreateMovieUseCase, DeleteMovieUseCase, GetMovieUseCase, ListMoviesUseCase,
    UpdateMovieUseCase,
};
use crate::domain::repository::MovieRepository;
use crate::error::{MovieError, MovieResult};
use crate::presentation::dto::{ListMoviesQuery, ListMoviesResponse, MovieRequest, MovieResponse};

/// Shared state for movie handlers
#[derive(Clone)]
pub struct MoviesAppState<R>
where
    R: MovieRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<MoviesConfig>,
}

/// An id that does not parse cannot name a stored movie
fn parse_id(raw: &str) -> MovieResult<MovieId> {
    raw.parse().map_err(|_| MovieError::NotFound)
}

/// GET /movies
pub async fn list_movies<R>(
    State(state): State<MoviesAppState<R>>,
    AppQuery(query): AppQuery<ListMoviesQuery>,
) -> MovieResult<ApiResponse<ListMoviesResponse>>
where
    R: MovieRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListMoviesUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(query.into()).await?;

    Ok(ApiResponse::ok("Success", output.into()))
}

/// GET /movies/{id}
pub async fn get_movie<R>(
    State(state): State<MoviesAppState<R>>,
    Path(id): Path<String>,
) -> MovieResult<ApiResponse<MovieResponse>>
where
    R: MovieRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let movie = GetMovieUseCase::new(state.repo.clone()).execute(&id).await?;

    Ok(ApiResponse::ok("Success", movie.into()))
}

/// POST /movies
pub async fn create_movie<R>(
    State(state): State<MoviesAppState<R>>,
    AppJson(req): AppJson<MovieRequest>,
) -> MovieResult<ApiResponse<IdData>>
where
    R: MovieRepository + Clone + Send + Sync + 'static,
{
    let id = CreateMovieUseCase::new(state.repo.clone())
        .execute(req.into())
        .await?;

    Ok(ApiResponse::created("Movie created", id.into()))
}

/// PUT /movies/{id}
pub async fn update_movie<R>(
    State(state): State<MoviesAppState<R>>,
    Path(id): Path<String>,
    AppJson(req): AppJson<MovieRequest>,
) -> MovieResult<ApiResponse<IdData>>
where
    R: MovieRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let id = UpdateMovieUseCase::new(state.repo.clone())
        .execute(&id, req.into())
        .await?;

    Ok(ApiResponse::ok("Movie updated", id.into()))
}

/// DELETE /movies/{id} (bearer token required)
pub async fn delete_movie<R>(
    State(state): State<MoviesAppState<R>>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> MovieResult<ApiResponse<Empty>>
where
    R: MovieRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    DeleteMovieUseCase::new(state.repo.clone())
        .execute(&id, &user.user_id)
        .await?;

    Ok(ApiResponse::ok("Movie deleted", Empty {}))
}
