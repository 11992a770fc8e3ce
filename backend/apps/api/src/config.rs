//! Process Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).
//! Anything missing or malformed stops the process before it listens.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use auth::AuthConfig;
use movies::MoviesConfig;
use platform::token::TokenError;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const DEFAULT_MAX_PAGE_SIZE: u32 = 100;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173";

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("token signing configuration is invalid: {0}")]
    Token(#[from] TokenError),
}

/// Process configuration
#[derive(Clone)]
pub struct ApiConfig {
    pub database_url: String,
    jwt_secret: String,
    pub port: u16,
    pub database_max_connections: u32,
    pub token_ttl: Duration,
    pub movies_max_page_size: u32,
    pub frontend_origins: Vec<String>,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("port", &self.port)
            .field("database_max_connections", &self.database_max_connections)
            .field("token_ttl", &self.token_ttl)
            .field("movies_max_page_size", &self.movies_max_page_size)
            .field("frontend_origins", &self.frontend_origins)
            .finish()
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            get(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            port: parse_or(&get, "PORT", DEFAULT_PORT)?,
            database_max_connections: parse_or(
                &get,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            token_ttl: Duration::from_secs(parse_or(
                &get,
                "TOKEN_TTL_SECS",
                DEFAULT_TOKEN_TTL_SECS,
            )?),
            movies_max_page_size: parse_or(&get, "MOVIES_MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE)?,
            frontend_origins: get("FRONTEND_ORIGINS")
                .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect(),
        })
    }

    pub fn auth_config(&self) -> Result<AuthConfig, ConfigError> {
        Ok(AuthConfig::new(&self.jwt_secret, self.token_ttl)?)
    }

    pub fn movies_config(&self) -> MoviesConfig {
        MoviesConfig::new(self.movies_max_page_size)
    }
}

fn parse_or<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
