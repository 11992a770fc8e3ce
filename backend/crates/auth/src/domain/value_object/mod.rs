//! Value Object Module

pub mod email;
pub mod user_name;

pub use kernel::id::UserId;
