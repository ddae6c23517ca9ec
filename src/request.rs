//! Score Request Documents
//!
//! A single calculation described as JSON, e.g.
//!
//! ```json
//! { "kind": "weighted_grade", "items": [{ "score": 80, "weight": 0.4 }, { "score": 90, "weight": 0.6 }] }
//! { "kind": "percentile", "p": 50, "values": [10, 20, 30] }
//! ```
//!
//! Payload fields are kept as raw JSON so evaluation goes through the same
//! shape checks as [`calc_weighted_grade_value`] and [`percentile_value`].

use crate::error::Result as ScoreResult;
use crate::metrics::{calc_weighted_grade_value, percentile_value};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One calculation request
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreRequest {
    WeightedGrade {
        #[serde(default)]
        items: Value,
    },
    Percentile {
        #[serde(default)]
        p: Value,
        #[serde(default)]
        values: Value,
    },
}

impl ScoreRequest {
    /// Parse a request from a JSON string
    pub fn from_json_str(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).with_context(|| "Failed to parse score request JSON")
    }

    /// Load a request from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read score request file: {:?}", path))?;

        Self::from_json_str(&contents)
    }

    /// Short name of the calculation, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            ScoreRequest::WeightedGrade { .. } => "weighted_grade",
            ScoreRequest::Percentile { .. } => "percentile",
        }
    }

    /// Run the calculation
    pub fn evaluate(&self) -> ScoreResult<f64> {
        match self {
            ScoreRequest::WeightedGrade { items } => calc_weighted_grade_value(items),
            ScoreRequest::Percentile { p, values } => percentile_value(p, values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_and_evaluate() {
        let request = ScoreRequest::from_json_str(
            r#"{ "kind": "weighted_grade", "items": [{ "score": 80, "weight": 0.4 }, { "score": 90, "weight": 0.6 }] }"#,
        )
        .unwrap();
        assert_eq!(request.kind(), "weighted_grade");
        assert_eq!(request.evaluate().unwrap(), 86.0);

        let request =
            ScoreRequest::from_json_str(r#"{ "kind": "percentile", "p": 50, "values": [4, 3, 2, 1] }"#)
                .unwrap();
        assert_eq!(request.kind(), "percentile");
        assert_eq!(request.evaluate().unwrap(), 2.0);
    }

    #[test]
    fn test_missing_payload_reports_invalid_argument() {
        // Missing fields deserialize to null and fail in the calculator, not the parser
        let request = ScoreRequest::from_json_str(r#"{ "kind": "percentile", "values": [1] }"#).unwrap();
        let err = request.evaluate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().starts_with("p must be a number"));

        let request = ScoreRequest::from_json_str(r#"{ "kind": "weighted_grade" }"#).unwrap();
        assert_eq!(request.evaluate().unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_unknown_kind_fails_to_parse() {
        let err = ScoreRequest::from_json_str(r#"{ "kind": "median", "values": [1] }"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse score request JSON"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ScoreRequest::load(Path::new("/nonexistent/request.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read score request file"));
    }
}
