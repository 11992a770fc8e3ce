//! Domain Value Objects
//!
//! Listing filters and pagination.

use chrono::NaiveDate;

use crate::domain::entities::Movie;
use crate::error::{MovieError, MovieResult};

/// Default page size when `limit` is not given
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Inclusive range; either end may be open
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T: PartialOrd + Copy> RangeFilter<T> {
    /// Range collapsed to a single value
    pub fn exact(value: T) -> Self {
        Self {
            min: Some(value),
            max: Some(value),
        }
    }

    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether `value` falls inside; a missing value only matches an open range
    pub fn matches(&self, value: Option<T>) -> bool {
        if self.is_open() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Conjunction of optional predicates over movies
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilter {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive substring of the overview
    pub overview: Option<String>,
    pub release_date: RangeFilter<NaiveDate>,
    pub vote_average: RangeFilter<f64>,
}

impl MovieFilter {
    /// Evaluate against one record (store implementations without a query
    /// language use this)
    pub fn matches(&self, movie: &Movie) -> bool {
        contains_ci(Some(&movie.title), self.title.as_deref())
            && contains_ci(movie.details.overview.as_deref(), self.overview.as_deref())
            && self.release_date.matches(movie.details.release_date)
            && self.vote_average.matches(movie.details.vote_average)
    }
}

fn contains_ci(haystack: Option<&str>, needle: Option<&str>) -> bool {
    match (haystack, needle) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some(h), Some(n)) => h.to_lowercase().contains(&n.to_lowercase()),
    }
}

/// Validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// `page` and `limit` must be ≥ 1; `limit` is clamped to `max_page_size`
    pub fn new(page: Option<i64>, limit: Option<i64>, max_page_size: u32) -> MovieResult<Self> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(i64::from(DEFAULT_PAGE_SIZE));

        if page < 1 {
            return Err(MovieError::InvalidInput("page must be at least 1".into()));
        }
        if limit < 1 {
            return Err(MovieError::InvalidInput("limit must be at least 1".into()));
        }

        let page = u32::try_from(page)
            .map_err(|_| MovieError::InvalidInput("page is too large".into()))?;
        let limit = u32::try_from(limit).unwrap_or(u32::MAX).min(max_page_size.max(1));

        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Records skipped before this page
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// Pagination summary returned with every listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u32,
    pub page_size: u32,
}

impl Pagination {
    pub fn new(total_items: u64, request: &PageRequest) -> Self {
        Self {
            total_items,
            total_pages: total_items.div_ceil(u64::from(request.limit())),
            current_page: request.page(),
            page_size: request.limit(),
        }
    }
}
