//! Application Configuration
//!
//! Configuration for the Movies application layer.

/// Movies application configuration
#[derive(Debug, Clone)]
pub struct MoviesConfig {
    /// Upper bound for `limit`; larger requests are clamped
    pub max_page_size: u32,
}

impl Default for MoviesConfig {
    fn default() -> Self {
        Self { max_page_size: 100 }
    }
}

impl MoviesConfig {
    pub fn new(max_page_size: u32) -> Self {
        Self {
            max_page_size: max_page_size.max(1),
        }
    }
}
