//! User Name Value Object
//!
//! Display name given at sign-up. Not unique and not used for login;
//! the only rule is that it is non-blank after trimming.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// Maximum user name length (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 100;

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    pub fn new(name: impl AsRef<str>) -> AppResult<Self> {
        let name = name.as_ref().trim();

        if name.is_empty() {
            return Err(AppError::bad_request("User name cannot be empty"));
        }

        if name.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "User name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name.to_owned()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_trimmed() {
        let name = UserName::new("  Ana Lima ").unwrap();
        assert_eq!(name.as_str(), "Ana Lima");
    }

    #[test]
    fn test_user_name_blank_rejected() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
    }

    #[test]
    fn test_user_name_length() {
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_user_name_unicode_allowed() {
        assert_eq!(UserName::new("José Ñúñez").unwrap().to_string(), "José Ñúñez");
    }
}
