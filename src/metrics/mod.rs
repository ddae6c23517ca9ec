//! Calculator modules
//!
//! Each calculator lives in its own module and exposes two entry points:
//! a typed one over slices, and a `*_value` one over untyped JSON that adds
//! the shape checks a typed slice cannot fail.

pub mod percentile;
pub mod weighted_grade;

// Re-export calculator functions
pub use percentile::{percentile, percentile_value, PERCENTILE_RANGE};
pub use weighted_grade::{
    calc_weighted_grade, calc_weighted_grade_value, GradeComponent, SCORE_RANGE, WEIGHT_RANGE,
    WEIGHT_SUM_TOLERANCE,
};
