//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::token::{DEFAULT_TTL, TokenError, TokenKeys};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Bearer token signing keys and lifetime
    pub tokens: TokenKeys,
}

impl AuthConfig {
    /// Build from the configured signing secret
    ///
    /// An empty secret is rejected here so the process fails at startup.
    pub fn new(secret: &str, token_ttl: Duration) -> Result<Self, TokenError> {
        Ok(Self {
            tokens: TokenKeys::new(secret, token_ttl)?,
        })
    }

    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            tokens: TokenKeys::random(DEFAULT_TTL),
        }
    }

    pub fn token_ttl(&self) -> Duration {
        self.tokens.ttl()
    }
}
