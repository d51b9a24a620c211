use thiserror::Error;

/// Rejected form input. Carries the offending field name for the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field is required: {0}")]
    Required(&'static str),

    #[error("Unknown patient: {0}")]
    UnknownPatient(i64),

    #[error("A prescription needs at least one medication")]
    NoMedications,
}

/// Fails with `Required(field)` when `value` is empty after trimming.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}
