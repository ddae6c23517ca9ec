//! WEIGHTED GRADE
//!
//! Final grade from (score, weight) components: Σ(score × weight), rounded to
//! two decimals.
//!
//! **Validation order** (first failure wins):
//!   1. items is a non-empty array
//!   2. per index: record shape, numeric `score`/`weight`, then
//!      `score` in [0, 100] and `weight` in [0, 1]
//!   3. weights sum to 1 within ±0.001

use crate::error::{Result, ScoreError};
use crate::utils::{
    ensure_finite, ensure_in_range, expect_array, expect_number, round_to_decimals, DECIMAL_PLACES,
};
use crate::utils::validation::json_type_name;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::RangeInclusive;

/// Valid range for a component score
pub const SCORE_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Valid range for a component weight
pub const WEIGHT_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Allowed absolute deviation of the weight sum from 1
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

// Absorbs representation error so a decimal sum of exactly 1 ± 0.001 passes
const TOLERANCE_SLACK: f64 = 1e-9;

/// One graded component of a final grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeComponent {
    /// Score on a 0-100 scale
    pub score: f64,
    /// Fraction of the final grade (0-1)
    pub weight: f64,
}

impl GradeComponent {
    pub fn new(score: f64, weight: f64) -> Self {
        Self { score, weight }
    }

    /// Check one component: finiteness first, then ranges
    fn validate(&self, index: usize) -> Result<()> {
        ensure_finite(self.score, format_args!("score at index {index}"))?;
        ensure_finite(self.weight, format_args!("weight at index {index}"))?;
        ensure_in_range(self.score, &SCORE_RANGE, format_args!("score at index {index}"))?;
        ensure_in_range(self.weight, &WEIGHT_RANGE, format_args!("weight at index {index}"))?;
        Ok(())
    }

    /// Narrow an untyped JSON element to a component (shape checks only)
    fn from_value(item: &Value, index: usize) -> Result<Self> {
        let Value::Object(fields) = item else {
            return Err(ScoreError::invalid(format!(
                "item at index {index} must be an object, got {}",
                json_type_name(item)
            )));
        };

        let (Some(score), Some(weight)) = (fields.get("score"), fields.get("weight")) else {
            return Err(ScoreError::invalid(format!(
                "item at index {index} must have 'score' and 'weight' fields"
            )));
        };

        Ok(Self {
            score: expect_number(score, format_args!("score at index {index}"))?,
            weight: expect_number(weight, format_args!("weight at index {index}"))?,
        })
    }
}

/// Calculate the weighted grade of typed components
///
/// # Errors
/// - `InvalidArgument` if `items` is empty or a score/weight is not finite
/// - `OutOfRange` if a score/weight is outside its range, or the weights do
///   not sum to 1 within `WEIGHT_SUM_TOLERANCE`
///
/// # Example
/// ```
/// use academic_scores::{calc_weighted_grade, GradeComponent};
///
/// let items = [GradeComponent::new(80.0, 0.4), GradeComponent::new(90.0, 0.6)];
/// assert_eq!(calc_weighted_grade(&items).unwrap(), 86.0);
/// ```
pub fn calc_weighted_grade(items: &[GradeComponent]) -> Result<f64> {
    if items.is_empty() {
        return Err(ScoreError::invalid("items must not be empty"));
    }

    for (index, item) in items.iter().enumerate() {
        item.validate(index)?;
    }

    weighted_sum(items)
}

/// Calculate the weighted grade of an untyped JSON array of `{score, weight}` records
///
/// Same semantics as [`calc_weighted_grade`], plus `InvalidArgument` for a
/// non-array input, a non-object element, a missing field, or a non-numeric field.
pub fn calc_weighted_grade_value(items: &Value) -> Result<f64> {
    let raw_items = expect_array(items, "items")?;
    if raw_items.is_empty() {
        return Err(ScoreError::invalid("items must not be empty"));
    }

    // Shape and range checks per element, in order
    let components = raw_items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let component = GradeComponent::from_value(item, index)?;
            component.validate(index)?;
            Ok(component)
        })
        .collect::<Result<Vec<_>>>()?;

    weighted_sum(&components)
}

/// Weight-sum check followed by the single accumulation pass
fn weighted_sum(items: &[GradeComponent]) -> Result<f64> {
    let weight_sum: f64 = items.iter().map(|c| c.weight).sum();

    if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE + TOLERANCE_SLACK {
        return Err(ScoreError::out_of_range(format!(
            "weights must sum to 1 (±{WEIGHT_SUM_TOLERANCE}), got {weight_sum:.6}"
        )));
    }

    let raw = items.iter().fold(0.0, |acc, c| acc + c.score * c.weight);
    let grade = round_to_decimals(raw, DECIMAL_PLACES);

    tracing::debug!(components = items.len(), weight_sum, grade, "weighted grade computed");

    Ok(grade)
}
