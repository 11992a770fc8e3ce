//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so that a missing field surfaces as the
//! uniform 400 "Bad Request" instead of a deserializer rejection.

use serde::{Deserialize, Serialize};

/// Request for POST /users
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Request for POST /auth/login
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Response for POST /auth/login (not enveloped)
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
