//! Candidate record validation
//!
//! A candidate must carry `name` (string), `age` (finite number) and
//! `country` (string). Checks run in that fixed order and the first failure
//! wins, on create and update alike. Update validates the raw incoming
//! payload, not the merged result, so a partial payload missing `age` is
//! rejected with "Invalid age" even when the stored record has one.
//!
//! No range, length or uniqueness checks. Extra fields pass through
//! untouched.

use serde_json::Value;
use thiserror::Error;

/// A field that failed validation, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Invalid name")]
    Name,
    #[error("Invalid age")]
    Age,
    #[error("Invalid country")]
    Country,
}

/// Validates a candidate record.
///
/// A non-object candidate has no fields at all and fails the first rule.
pub fn validate(candidate: &Value) -> Result<(), FieldError> {
    if !is_text(candidate.get("name")) {
        return Err(FieldError::Name);
    }
    if !is_finite_number(candidate.get("age")) {
        return Err(FieldError::Age);
    }
    if !is_text(candidate.get("country")) {
        return Err(FieldError::Country);
    }
    Ok(())
}

fn is_text(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(_)))
}

fn is_finite_number(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => n.as_f64().is_some_and(f64::is_finite),
        _ => false,
    }
}
