//! API DTOs (Data Transfer Objects)

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

use crate::application::{CreateMovieInput, ListMoviesInput, ListMoviesOutput};
use crate::domain::entities::{Movie, MovieDetails, MoviePatch};
use crate::domain::value_objects::{MovieFilter, Pagination, RangeFilter};

/// Query for GET /movies
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMoviesQuery {
    #[serde(default, deserialize_with = "blank_param")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "blank_param")]
    pub limit: Option<i64>,
    pub title: Option<String>,
    pub overview: Option<String>,
    /// Exact date; overrides the from/to bounds
    #[serde(default, deserialize_with = "blank_param")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_param")]
    pub release_date_from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_param")]
    pub release_date_to: Option<NaiveDate>,
    /// Exact score; overrides the min/max bounds
    #[serde(default, deserialize_with = "blank_param")]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "blank_param")]
    pub vote_average_min: Option<f64>,
    #[serde(default, deserialize_with = "blank_param")]
    pub vote_average_max: Option<f64>,
}

/// Query parameter where `key=` means the same as leaving the key out
fn blank_param<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

/// A typed JSON field that may also arrive as `""`
#[derive(Deserialize)]
#[serde(untagged)]
enum OrBlank<T> {
    Value(T),
    Text(String),
}

/// `""` in a body field counts as not sent
fn blank_field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<OrBlank<T>>::deserialize(deserializer)? {
        Some(OrBlank::Value(value)) => Ok(Some(value)),
        Some(OrBlank::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(OrBlank::Text(text)) => Err(de::Error::invalid_value(
            de::Unexpected::Str(&text),
            &"a value of the field's type or an empty string",
        )),
        None => Ok(None),
    }
}

impl From<ListMoviesQuery> for ListMoviesInput {
    fn from(q: ListMoviesQuery) -> Self {
        let release_date = match q.release_date {
            Some(date) => RangeFilter::exact(date),
            None => RangeFilter {
                min: q.release_date_from,
                max: q.release_date_to,
            },
        };
        let vote_average = match q.vote_average {
            Some(score) => RangeFilter::exact(score),
            None => RangeFilter {
                min: q.vote_average_min,
                max: q.vote_average_max,
            },
        };

        Self {
            page: q.page,
            limit: q.limit,
            filter: MovieFilter {
                title: q.title.filter(|s| !s.is_empty()),
                overview: q.overview.filter(|s| !s.is_empty()),
                release_date,
                vote_average,
            },
        }
    }
}

/// Body for POST /movies and PUT /movies/{id}
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    pub title: Option<String>,
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "blank_field")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_field")]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "blank_field")]
    pub provider_id: Option<i64>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub original_language: Option<String>,
    #[serde(default, deserialize_with = "blank_field")]
    pub adult: Option<bool>,
}

impl MovieRequest {
    fn split(self) -> (Option<String>, MovieDetails) {
        (
            self.title,
            MovieDetails {
                overview: self.overview,
                release_date: self.release_date,
                vote_average: self.vote_average,
                provider_id: self.provider_id,
                poster_path: self.poster_path,
                backdrop_path: self.backdrop_path,
                original_language: self.original_language,
                adult: self.adult,
            },
        )
    }
}

impl From<MovieRequest> for CreateMovieInput {
    fn from(req: MovieRequest) -> Self {
        let (title, details) = req.split();
        Self { title, details }
    }
}

impl From<MovieRequest> for MoviePatch {
    fn from(req: MovieRequest) -> Self {
        let (title, details) = req.split();
        Self { title, details }
    }
}

/// A stored movie; absent optional fields are omitted
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adult: Option<bool>,
}

impl From<Movie> for MovieResponse {
    fn from(m: Movie) -> Self {
        let d = m.details;
        Self {
            id: m.id.into_uuid(),
            title: m.title,
            overview: d.overview,
            release_date: d.release_date,
            vote_average: d.vote_average,
            provider_id: d.provider_id,
            poster_path: d.poster_path,
            backdrop_path: d.backdrop_path,
            original_language: d.original_language,
            adult: d.adult,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u32,
    pub page_size: u32,
}

impl From<Pagination> for PaginationResponse {
    fn from(p: Pagination) -> Self {
        Self {
            total_items: p.total_items,
            total_pages: p.total_pages,
            current_page: p.current_page,
            page_size: p.page_size,
        }
    }
}

/// Data for GET /movies
#[derive(Debug, Clone, Serialize)]
pub struct ListMoviesResponse {
    pub movies: Vec<MovieResponse>,
    pub pagination: PaginationResponse,
}

impl From<ListMoviesOutput> for ListMoviesResponse {
    fn from(out: ListMoviesOutput) -> Self {
        Self {
            movies: out.movies.into_iter().map(MovieResponse::from).collect(),
            pagination: out.pagination.into(),
        }
    }
}
