//! Domain Entities
//!
//! The movie record, the validated input for creating one, and the partial
//! update applied by PUT.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::MovieId;

use crate::error::{MovieError, MovieResult};

/// Optional descriptive fields shared by create, update and stored records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDetails {
    pub overview: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub vote_average: Option<f64>,
    /// Id in the external catalog the record was imported from
    pub provider_id: Option<i64>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub original_language: Option<String>,
    pub adult: Option<bool>,
}

/// Movie entity
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    /// Always non-blank
    pub title: String,
    pub details: MovieDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    /// Assign an id and timestamps to validated input
    pub fn create(new: NewMovie) -> Self {
        let now = Utc::now();
        Self {
            id: MovieId::new(),
            title: new.title,
            details: new.details,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every field the patch carries a truthy value for
    pub fn apply(&mut self, patch: &MoviePatch) {
        let patch = patch.clone().effective();
        let d = &mut self.details;

        if let Some(title) = patch.title {
            self.title = title;
        }
        overwrite(&mut d.overview, patch.details.overview);
        overwrite(&mut d.release_date, patch.details.release_date);
        overwrite(&mut d.vote_average, patch.details.vote_average);
        overwrite(&mut d.provider_id, patch.details.provider_id);
        overwrite(&mut d.poster_path, patch.details.poster_path);
        overwrite(&mut d.backdrop_path, patch.details.backdrop_path);
        overwrite(&mut d.original_language, patch.details.original_language);
        overwrite(&mut d.adult, patch.details.adult);

        self.updated_at = Utc::now();
    }
}

fn overwrite<T>(slot: &mut Option<T>, incoming: Option<T>) {
    if incoming.is_some() {
        *slot = incoming;
    }
}

/// Input for creating a movie; holding one means the title is valid
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    title: String,
    pub details: MovieDetails,
}

impl NewMovie {
    pub fn new(title: Option<String>, details: MovieDetails) -> MovieResult<Self> {
        match title {
            Some(title) if !title.trim().is_empty() => Ok(Self { title, details }),
            _ => Err(MovieError::InvalidInput("title is required".into())),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Partial update
///
/// A field replaces the stored value only when it is "truthy": a non-empty
/// string, a non-zero number, `true`, or any date. Empty strings, zero and
/// `false` are indistinguishable from an absent field, so a field can never
/// be cleared through an update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub details: MovieDetails,
}

impl MoviePatch {
    /// Drop every falsy value, leaving only the fields that will overwrite
    pub fn effective(self) -> Self {
        let d = self.details;
        Self {
            // A blank title would break the non-blank invariant
            title: self.title.filter(|t| !t.trim().is_empty()),
            details: MovieDetails {
                overview: d.overview.filter(|s| !s.is_empty()),
                release_date: d.release_date,
                vote_average: d.vote_average.filter(|v| *v != 0.0 && !v.is_nan()),
                provider_id: d.provider_id.filter(|v| *v != 0),
                poster_path: d.poster_path.filter(|s| !s.is_empty()),
                backdrop_path: d.backdrop_path.filter(|s| !s.is_empty()),
                original_language: d.original_language.filter(|s| !s.is_empty()),
                adult: d.adult.filter(|b| *b),
            },
        }
    }
}
