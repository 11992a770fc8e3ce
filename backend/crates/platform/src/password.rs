//! Password Credentials
//!
//! Salted, iterated password hashing for stored user credentials:
//! - PBKDF2-HMAC-SHA512, 1000 rounds, 64-byte output, hex-encoded
//! - 16 random salt bytes per user, hex-encoded; the hex string itself is
//!   the salt input to the key derivation
//! - Zeroization of clear text passwords on drop
//! - Constant-time comparison on verification
//!
//! ## Examples
//! ```rust
//! use platform::password::{self, ClearTextPassword};
//!
//! let password = ClearTextPassword::new("hunter2".to_string()).unwrap();
//! let credentials = password::set_credentials(&password);
//!
//! assert!(password::verify(&password, &credentials.salt, &credentials.hash));
//! ```

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha512;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, random_bytes, to_hex};

/// Key-stretching rounds
pub const ITERATIONS: u32 = 1000;

/// Derived key length in bytes (hex output is twice as long)
pub const HASH_LEN: usize = 64;

/// Random salt length in bytes (hex output is twice as long)
pub const SALT_LEN: usize = 16;

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password cannot be empty")]
    Empty,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`; `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        Ok(Self(raw))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Stored credentials
// ============================================================================

/// Salt and derived hash, both hex, as persisted on the user record
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub salt: String,
    pub hash: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("salt", &self.salt)
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

/// Derive the hex hash of `password` under `salt`
pub fn derive(password: &ClearTextPassword, salt: &str) -> String {
    derive_with_rounds(password.as_bytes(), salt.as_bytes(), ITERATIONS)
}

/// Fresh salt plus the hash derived under it
pub fn set_credentials(password: &ClearTextPassword) -> Credentials {
    let salt = to_hex(&random_bytes(SALT_LEN));
    let hash = derive(password, &salt);
    Credentials { salt, hash }
}

/// Re-derive under the stored salt and compare against the stored hash
pub fn verify(password: &ClearTextPassword, salt: &str, hash: &str) -> bool {
    let candidate = derive(password, salt);
    constant_time_eq(candidate.as_bytes(), hash.as_bytes())
}

/// Same derivation cost as [`verify`] for a login with no matching account
///
/// Always `false`; keeps unknown-email and wrong-password logins equally slow.
pub fn verify_unknown_user(password: &ClearTextPassword) -> bool {
    let salt = "0".repeat(SALT_LEN * 2);
    std::hint::black_box(derive(password, &salt));
    false
}

type HmacSha512 = Hmac<Sha512>;

/// PBKDF2 (RFC 8018) with HMAC-SHA512 as the PRF
///
/// `HASH_LEN` equals the SHA-512 output size, so only block 1 is computed.
fn derive_with_rounds(password: &[u8], salt: &[u8], rounds: u32) -> String {
    let prf = HmacSha512::new_from_slice(password).expect("HMAC can take key of any size");

    let mut mac = prf.clone();
    mac.update(salt);
    mac.update(&1u32.to_be_bytes());

    let mut u = [0u8; HASH_LEN];
    u.copy_from_slice(&mac.finalize().into_bytes());
    let mut out = u;

    for _ in 1..rounds {
        let mut mac = prf.clone();
        mac.update(&u);
        u.copy_from_slice(&mac.finalize().into_bytes());
        out.iter_mut().zip(u.iter()).for_each(|(o, b)| *o ^= b);
    }

    let encoded = to_hex(&out);
    u.zeroize();
    out.zeroize();
    encoded
}
