//! Email Value Object
//!
//! The login key. Stored trimmed and lower-cased so that lookups by email
//! are case-insensitive.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// RFC 5321 path limit
const EMAIL_MAX_LENGTH: usize = 254;
const LOCAL_PART_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Normalize and validate a user-supplied address
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let email = raw.as_ref().trim().to_lowercase();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }
        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {EMAIL_MAX_LENGTH} characters"
            )));
        }
        if !looks_like_address(&email) {
            return Err(AppError::bad_request("Invalid email format"));
        }

        Ok(Self(email))
    }

    /// Rows were validated on the way in
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything after the `@`
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

/// `local@host.tld`, one `@`, no leading/trailing `.` or `-` in the host
fn looks_like_address(email: &str) -> bool {
    let Some((local, host)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty() && local.len() <= LOCAL_PART_MAX_LENGTH;
    let host_ok = host.contains('.')
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && !host.starts_with(['.', '-'])
        && !host.ends_with(['.', '-']);

    local_ok && host_ok
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_accepts_common_addresses() {
        for raw in [
            "user@example.com",
            "user.name@example.co.jp",
            "user+tag@example.com",
            "x@a-b.io",
        ] {
            assert!(Email::new(raw).is_ok(), "{raw} should be accepted");
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for raw in [
            "",
            "   ",
            "userexample.com",
            "user@",
            "@example.com",
            "user@@example.com",
            "user@example",
            "user@.example.com",
            "user@example.com-",
            "user@exa mple.com",
        ] {
            let err = Email::new(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::BadRequest, "{raw:?}");
        }
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let email = Email::new("  Ana@Movies.TEST ").unwrap();
        assert_eq!(email.as_str(), "ana@movies.test");
        assert_eq!(email, Email::new("ana@movies.test").unwrap());
        assert_eq!(email.domain(), "movies.test");
    }

    #[test]
    fn test_rejects_overlong_address() {
        let raw = format!("{}@example.com", "a".repeat(250));
        assert!(Email::new(raw).is_err());
    }
}
