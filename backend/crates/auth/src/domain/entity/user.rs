//! User Entity
//!
//! Account record: profile data plus the stored password credentials.

use chrono::{DateTime, Utc};
use platform::password::{self, ClearTextPassword, Credentials};

use crate::domain::value_object::{UserId, email::Email, user_name::UserName};

/// User entity
///
/// The clear text password is never held; only the salt and derived hash.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: UserName,
    /// Login key (unique, lower-cased)
    pub email: Email,
    /// Salt + PBKDF2 hash
    pub credentials: Credentials,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user, deriving credentials under a fresh salt
    pub fn new(name: UserName, email: Email, password: &ClearTextPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            credentials: password::set_credentials(password),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check a login attempt against the stored credentials
    pub fn verify_password(&self, password: &ClearTextPassword) -> bool {
        password::verify(password, &self.credentials.salt, &self.credentials.hash)
    }
}
