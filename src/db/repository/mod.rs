//! Repository layer: entity-scoped database operations.
//!
//! One sub-module per table. Every function takes a borrowed
//! `Connection`; callers own transaction boundaries.

mod appointment;
mod patient;
mod prescription;

pub use appointment::*;
pub use patient::*;
pub use prescription::*;

use super::DatabaseError;

/// Decode a JSON text column, naming the column on failure.
fn from_json_column<T: serde::de::DeserializeOwned>(
    field: &'static str,
    raw: &str,
) -> Result<T, DatabaseError> {
    serde_json::from_str(raw).map_err(|e| DatabaseError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}

fn to_json_column<T: serde::Serialize>(field: &'static str, value: &T) -> Result<String, DatabaseError> {
    serde_json::to_string(value).map_err(|e| DatabaseError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}
