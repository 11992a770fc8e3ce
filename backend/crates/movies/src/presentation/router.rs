//! Movies Router

use auth::AuthConfig;
use auth::middleware::{AuthMiddlewareState, require_bearer_token};
use axum::handler::Handler;
use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::MoviesConfig;
use crate::domain::repository::MovieRepository;
use crate::presentation::handlers::{self, MoviesAppState};

/// Routes mounted at `/movies`; only DELETE requires a bearer token
pub fn movies_router<R>(
    repo: Arc<R>,
    config: Arc<MoviesConfig>,
    auth_config: Arc<AuthConfig>,
) -> Router
where
    R: MovieRepository + Clone + Send + Sync + 'static,
{
    let state = MoviesAppState { repo, config };
    let require_token = axum::middleware::from_fn_with_state(
        AuthMiddlewareState::new(auth_config),
        require_bearer_token,
    );

    Router::new()
        .route(
            "/",
            get(handlers::list_movies::<R>).post(handlers::create_movie::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_movie::<R>)
                .put(handlers::update_movie::<R>)
                .delete(handlers::delete_movie::<R>.layer(require_token)),
        )
        .with_state(state)
}
