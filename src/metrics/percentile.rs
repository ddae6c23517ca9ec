//! NEAREST-RANK PERCENTILE
//!
//! Selects an existing element of the data set, no interpolation:
//!   rank = ceil(p / 100 × N), result = sorted[rank - 1]
//!
//! p = 0 and p = 100 short-circuit to the minimum and maximum. The caller's
//! slice is never reordered; sorting happens on a private copy.

use crate::error::{Result, ScoreError};
use crate::utils::{
    ensure_finite, ensure_in_range, expect_array, expect_number, round_to_decimals, DECIMAL_PLACES,
};
use serde_json::Value;
use std::ops::RangeInclusive;

/// Valid range for the percentile rank `p`
pub const PERCENTILE_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Nearest-rank percentile of `values`
///
/// # Errors
/// - `InvalidArgument` if `p` or any element of `values` is NaN or infinite
/// - `OutOfRange` if `values` is empty or `p` is outside [0, 100]
///
/// # Example
/// ```
/// use academic_scores::percentile;
///
/// // rank = ceil(0.5 × 5) = 3
/// assert_eq!(percentile(50.0, &[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap(), 30.0);
/// ```
pub fn percentile(p: f64, values: &[f64]) -> Result<f64> {
    ensure_finite(p, "p")?;

    if values.is_empty() {
        return Err(ScoreError::out_of_range("values must not be empty"));
    }

    for (index, &value) in values.iter().enumerate() {
        ensure_finite(value, format_args!("value at index {index}"))?;
    }

    ensure_in_range(p, &PERCENTILE_RANGE, "p")?;

    let result = round_to_decimals(nearest_rank(p, values), DECIMAL_PLACES);
    tracing::debug!(p, n = values.len(), result, "percentile computed");

    Ok(result)
}

/// Nearest-rank percentile of an untyped JSON `p` and array of numbers
///
/// Same semantics as [`percentile`], plus `InvalidArgument` for a non-numeric
/// `p`, a non-array `values`, or a non-numeric element.
pub fn percentile_value(p: &Value, values: &Value) -> Result<f64> {
    let p = expect_number(p, "p")?;
    let raw_values = expect_array(values, "values")?;

    let values = raw_values
        .iter()
        .enumerate()
        .map(|(index, value)| expect_number(value, format_args!("value at index {index}")))
        .collect::<Result<Vec<_>>>()?;

    percentile(p, &values)
}

/// Select the element; inputs are already validated (non-empty, finite, p in range)
fn nearest_rank(p: f64, values: &[f64]) -> f64 {
    if p == 0.0 {
        return values.iter().copied().fold(f64::INFINITY, f64::min);
    }
    if p == 100.0 {
        return values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let rank = (libm::ceil(p / 100.0 * n as f64) as usize).clamp(1, n);
    tracing::trace!(p, n, rank, "nearest rank");

    sorted[rank - 1]
}
