//! Utility modules for score calculations
//!
//! Contains shared functionality used by both calculators:
//! - Rounding: Two-decimal result rounding
//! - Validation: Finite/range checks and JSON shape checks

pub mod rounding;
pub mod validation;

// Re-export commonly used items
pub use rounding::{round_to_decimals, DECIMAL_PLACES};
pub use validation::{ensure_finite, ensure_in_range, expect_array, expect_number};
