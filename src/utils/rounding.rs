//! Rounding Utilities
//!
//! Results are reported with a fixed number of decimals. Rounding is half away
//! from zero on the binary value, so ties such as 2.005 (stored as
//! 2.00499999...) are decided by their representation.

/// Decimal places kept in every calculator result
pub const DECIMAL_PLACES: u32 = 2;

// 2^52: from here on every f64 is an integer
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Round `value` to `decimals` places, half away from zero
///
/// Magnitudes where the scaled value would carry no fraction (or overflow)
/// are returned unchanged.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }

    let rounded = libm::round(scaled) / factor;
    // Normalize -0.0 so results print as "0.00"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_relative_eq!(round_to_decimals(86.00000000000001, 2), 86.0);
        assert_relative_eq!(round_to_decimals(1.2345, 2), 1.23);
        assert_relative_eq!(round_to_decimals(1.2389, 2), 1.24);
        assert_relative_eq!(round_to_decimals(-10.0, 2), -10.0);
        assert_relative_eq!(round_to_decimals(2_000_000.0, 2), 2_000_000.0);
    }

    #[test]
    fn test_huge_magnitudes_pass_through() {
        for value in [1e307, -5e306, f64::MAX, f64::MIN, 1e20, -4.6e13] {
            assert_eq!(round_to_decimals(value, 2), value);
        }
    }

    #[test]
    fn test_small_values_collapse_to_zero() {
        assert_eq!(round_to_decimals(0.0002, 2), 0.0);
        let negative = round_to_decimals(-0.0004, 2);
        assert_eq!(negative, 0.0);
        assert!(negative.is_sign_positive());
    }
}
