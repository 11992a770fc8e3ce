//! PostgreSQL Repository Implementations

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::MovieId;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::entities::{Movie, MovieDetails, MoviePatch, NewMovie};
use crate::domain::repository::MovieRepository;
use crate::domain::value_objects::MovieFilter;
use crate::error::{MovieError, MovieResult};

const MOVIE_COLUMNS: &str = r#"
    movie_id,
    title,
    overview,
    release_date,
    vote_average,
    provider_id,
    poster_path,
    backdrop_path,
    original_language,
    adult,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed movie repository
#[derive(Clone)]
pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl MovieRepository for PgMovieRepository {
    async fn find(
        &self,
        filter: &MovieFilter,
        skip: u64,
        limit: u32,
    ) -> MovieResult<(Vec<Movie>, u64)> {
        let offset =
            i64::try_from(skip).map_err(|_| MovieError::InvalidInput("page is too large".into()))?;

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM movies");
        push_filter(&mut count, filter);
        let total = count.build_query_scalar::<i64>().fetch_one(&self.pool).await?;

        let mut select = QueryBuilder::<Postgres>::new("SELECT");
        select.push(MOVIE_COLUMNS).push("FROM movies");
        push_filter(&mut select, filter);
        select
            .push(" ORDER BY release_date DESC NULLS LAST, movie_id ASC")
            .push(" OFFSET ")
            .push_bind(offset)
            .push(" LIMIT ")
            .push_bind(i64::from(limit));

        let rows = select.build_query_as::<MovieRow>().fetch_all(&self.pool).await?;

        Ok((
            rows.into_iter().map(MovieRow::into_movie).collect(),
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn find_by_id(&self, id: &MovieId) -> MovieResult<Option<Movie>> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {} FROM movies WHERE movie_id = $1",
            MOVIE_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MovieRow::into_movie))
    }

    async fn insert(&self, new_movie: NewMovie) -> MovieResult<Movie> {
        let movie = Movie::create(new_movie);
        let d = &movie.details;

        sqlx::query(
            r#"
            INSERT INTO movies (
                movie_id,
                title,
                overview,
                release_date,
                vote_average,
                provider_id,
                poster_path,
                backdrop_path,
                original_language,
                adult,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(movie.id.as_uuid())
        .bind(&movie.title)
        .bind(&d.overview)
        .bind(d.release_date)
        .bind(d.vote_average)
        .bind(d.provider_id)
        .bind(&d.poster_path)
        .bind(&d.backdrop_path)
        .bind(&d.original_language)
        .bind(d.adult)
        .bind(movie.created_at)
        .bind(movie.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(movie)
    }

    async fn update_by_id(&self, id: &MovieId, patch: &MoviePatch) -> MovieResult<Option<Movie>> {
        let patch = patch.clone().effective();
        let d = patch.details;

        let row = sqlx::query_as::<_, MovieRow>(&format!(
            r#"
            UPDATE movies SET
                title = COALESCE($2, title),
                overview = COALESCE($3, overview),
                release_date = COALESCE($4, release_date),
                vote_average = COALESCE($5, vote_average),
                provider_id = COALESCE($6, provider_id),
                poster_path = COALESCE($7, poster_path),
                backdrop_path = COALESCE($8, backdrop_path),
                original_language = COALESCE($9, original_language),
                adult = COALESCE($10, adult),
                updated_at = $11
            WHERE movie_id = $1
            RETURNING {}
            "#,
            MOVIE_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(patch.title)
        .bind(d.overview)
        .bind(d.release_date)
        .bind(d.vote_average)
        .bind(d.provider_id)
        .bind(d.poster_path)
        .bind(d.backdrop_path)
        .bind(d.original_language)
        .bind(d.adult)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MovieRow::into_movie))
    }

    async fn delete_by_id(&self, id: &MovieId) -> MovieResult<bool> {
        let deleted = sqlx::query("DELETE FROM movies WHERE movie_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

/// Append the WHERE clause for `filter`
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &MovieFilter) {
    qb.push(" WHERE TRUE");

    if let Some(title) = &filter.title {
        qb.push(" AND title ILIKE ")
            .push_bind(like_pattern(title))
            .push(r" ESCAPE '\'");
    }
    if let Some(overview) = &filter.overview {
        qb.push(" AND overview ILIKE ")
            .push_bind(like_pattern(overview))
            .push(r" ESCAPE '\'");
    }
    if let Some(min) = filter.release_date.min {
        qb.push(" AND release_date >= ").push_bind(min);
    }
    if let Some(max) = filter.release_date.max {
        qb.push(" AND release_date <= ").push_bind(max);
    }
    if let Some(min) = filter.vote_average.min {
        qb.push(" AND vote_average >= ").push_bind(min);
    }
    if let Some(max) = filter.vote_average.max {
        qb.push(" AND vote_average <= ").push_bind(max);
    }
}

/// `%needle%` with LIKE metacharacters taken literally
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct MovieRow {
    movie_id: Uuid,
    title: String,
    overview: Option<String>,
    release_date: Option<NaiveDate>,
    vote_average: Option<f64>,
    provider_id: Option<i64>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    original_language: Option<String>,
    adult: Option<bool>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MovieRow {
    fn into_movie(self) -> Movie {
        Movie {
            id: MovieId::from_uuid(self.movie_id),
            title: self.title,
            details: MovieDetails {
                overview: self.overview,
                release_date: self.release_date,
                vote_average: self.vote_average,
                provider_id: self.provider_id,
                poster_path: self.poster_path,
                backdrop_path: self.backdrop_path,
                original_language: self.original_language,
                adult: self.adult,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
