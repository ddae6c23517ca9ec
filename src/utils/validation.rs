//! Validation Helpers
//!
//! Shared checks used by both calculators. Typed inputs go through
//! `ensure_finite` / `ensure_in_range`; untyped JSON inputs are first
//! narrowed with `expect_array` / `expect_number`.

use crate::error::{Result, ScoreError};
use serde_json::Value;
use std::fmt::Display;
use std::ops::RangeInclusive;

/// Reject NaN and infinities as an invalid argument
pub fn ensure_finite(value: f64, label: impl Display) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoreError::invalid(format!("{label} must be a finite number")))
    }
}

/// Reject values outside an inclusive range
pub fn ensure_in_range(value: f64, range: &RangeInclusive<f64>, label: impl Display) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ScoreError::out_of_range(format!(
            "{label} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )))
    }
}

/// Narrow a JSON value to an array
pub fn expect_array<'a>(value: &'a Value, label: impl Display) -> Result<&'a [Value]> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(ScoreError::invalid(format!(
            "{label} must be an array, got {}",
            json_type_name(other)
        ))),
    }
}

/// Narrow a JSON value to a number
///
/// JSON has no NaN or infinity, so any number that converts is finite.
pub fn expect_number(value: &Value, label: impl Display) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        ScoreError::invalid(format!(
            "{label} must be a number, got {}",
            json_type_name(value)
        ))
    })
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite(3.5, "p").unwrap(), 3.5);
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ensure_finite(bad, "p").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_ensure_in_range_is_inclusive() {
        let range = 0.0..=100.0;
        assert!(ensure_in_range(0.0, &range, "score").is_ok());
        assert!(ensure_in_range(100.0, &range, "score").is_ok());

        let err = ensure_in_range(100.5, &range, "score at index 3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert!(err.message().contains("index 3"));
    }

    #[test]
    fn test_json_narrowing() {
        assert_eq!(expect_array(&json!([1, 2]), "values").unwrap().len(), 2);
        assert_eq!(expect_number(&json!(4.25), "p").unwrap(), 4.25);

        let err = expect_array(&json!({}), "values").unwrap_err();
        assert_eq!(err.message(), "values must be an array, got object");

        let err = expect_number(&json!("50"), "p").unwrap_err();
        assert_eq!(err.message(), "p must be a number, got string");
        assert!(expect_number(&Value::Null, "p").is_err());
    }
}
