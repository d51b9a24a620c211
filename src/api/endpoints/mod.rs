//! API endpoint handlers, one module per screen.

pub mod appointments;
pub mod calendar;
pub mod health;
pub mod patients;
pub mod prescriptions;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use serde::Serialize;

use crate::api::error::ApiError;

/// Body returned by every `DELETE`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
    pub id: i64,
}

impl DeletedResponse {
    pub fn new(id: i64) -> Self {
        Self { message: "Deleted", id }
    }
}

/// Path ids arrive as strings so a malformed id gets a JSON 400 instead
/// of axum's plain-text rejection.
pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid ID format: {raw}")))
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
