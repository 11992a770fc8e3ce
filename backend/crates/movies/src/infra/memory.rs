//! In-memory movie repository for router and use case tests

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use kernel::id::MovieId;

use crate::domain::entities::{Movie, MoviePatch, NewMovie};
use crate::domain::repository::MovieRepository;
use crate::domain::value_objects::MovieFilter;
use crate::error::MovieResult;

#[derive(Clone, Default)]
pub struct InMemoryMovieRepository {
    movies: Arc<Mutex<HashMap<MovieId, Movie>>>,
}

impl InMemoryMovieRepository {
    pub fn len(&self) -> usize {
        self.movies.lock().unwrap().len()
    }
}

/// Release date descending, missing dates last, then id
fn listing_order(a: &Movie, b: &Movie) -> Ordering {
    match (a.details.release_date, b.details.release_date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
}

impl MovieRepository for InMemoryMovieRepository {
    async fn find(
        &self,
        filter: &MovieFilter,
        skip: u64,
        limit: u32,
    ) -> MovieResult<(Vec<Movie>, u64)> {
        let movies = self.movies.lock().unwrap();
        let mut matched: Vec<Movie> = movies.values().filter(|m| filter.matches(m)).cloned().collect();
        matched.sort_by(listing_order);

        let total = matched.len() as u64;
        let page = matched
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect();

        Ok((page, total))
    }

    async fn find_by_id(&self, id: &MovieId) -> MovieResult<Option<Movie>> {
        Ok(self.movies.lock().unwrap().get(id).cloned())
    }

    async fn insert(&self, new_movie: NewMovie) -> MovieResult<Movie> {
        let movie = Movie::create(new_movie);
        self.movies.lock().unwrap().insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn update_by_id(&self, id: &MovieId, patch: &MoviePatch) -> MovieResult<Option<Movie>> {
        let mut movies = self.movies.lock().unwrap();
        Ok(movies.get_mut(id).map(|movie| {
            movie.apply(patch);
            movie.clone()
        }))
    }

    async fn delete_by_id(&self, id: &MovieId) -> MovieResult<bool> {
        Ok(self.movies.lock().unwrap().remove(id).is_some())
    }
}
