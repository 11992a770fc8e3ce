//! Response Envelope
//!
//! Every JSON body the API produces (except the login token and the plain
//! greeting) is wrapped as `{ "message": ..., "data": ... }`.

use std::borrow::Cow;

use serde::Serialize;
use uuid::Uuid;

use crate::id::Id;

/// `{ message, data }` wrapper
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub message: Cow<'static, str>,
    pub data: T,
}

/// Serializes as `{}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Empty {}

impl Envelope<Empty> {
    pub fn empty(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            data: Empty {},
        }
    }
}

/// `{ "_id": ... }` payload returned by create/update routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdData {
    #[serde(rename = "_id")]
    pub id: Uuid,
}

impl<T> From<Id<T>> for IdData {
    fn from(id: Id<T>) -> Self {
        Self { id: id.into_uuid() }
    }
}

/// Enveloped body plus the status it is sent with
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    status: u16,
    body: Envelope<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: u16, message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self {
            status,
            body: Envelope {
                message: message.into(),
                data,
            },
        }
    }

    /// 200 OK
    pub fn ok(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self::new(200, message, data)
    }

    /// 201 Created
    pub fn created(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self::new(201, message, data)
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &Envelope<T> {
        &self.body
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.status)
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self.body)).into_response()
    }
}
