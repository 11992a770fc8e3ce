//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::MovieId;

use crate::domain::entities::{Movie, MoviePatch, NewMovie};
use crate::domain::value_objects::MovieFilter;
use crate::error::MovieResult;

/// Movie repository trait
#[trait_variant::make(MovieRepository: Send)]
pub trait LocalMovieRepository {
    /// One page of matches plus the total match count
    ///
    /// Ordered by release date descending (missing dates last), then id.
    async fn find(
        &self,
        filter: &MovieFilter,
        skip: u64,
        limit: u32,
    ) -> MovieResult<(Vec<Movie>, u64)>;

    /// Find movie by ID
    async fn find_by_id(&self, id: &MovieId) -> MovieResult<Option<Movie>>;

    /// Persist a new movie
    async fn insert(&self, movie: NewMovie) -> MovieResult<Movie>;

    /// Apply a partial update; `None` if no such movie
    async fn update_by_id(&self, id: &MovieId, patch: &MoviePatch) -> MovieResult<Option<Movie>>;

    /// Delete; `false` if no such movie
    async fn delete_by_id(&self, id: &MovieId) -> MovieResult<bool>;
}
