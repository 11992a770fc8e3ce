//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, hex, constant-time compare)
//! - Password credentials (salted PBKDF2-HMAC-SHA512)
//! - Signed bearer tokens (HS256 JWT)
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod crypto;
pub mod password;
pub mod token;
