//! Academic Scores
//!
//! Validated calculators for academic score reporting.
//!
//! - `metrics/`: The two calculators (weighted grade, nearest-rank percentile)
//! - `utils/`: Shared validation and rounding helpers
//! - `request`: JSON request documents evaluated through the dynamic validation path
//!
//! Every calculator validates its input completely before computing and
//! returns the result rounded to two decimal places.

pub mod error;
pub mod metrics;
pub mod request;
pub mod utils;

// Re-export commonly used types
pub use error::{ErrorKind, Result, ScoreError};
pub use metrics::{
    calc_weighted_grade, calc_weighted_grade_value, percentile, percentile_value, GradeComponent,
    PERCENTILE_RANGE, SCORE_RANGE, WEIGHT_RANGE, WEIGHT_SUM_TOLERANCE,
};
pub use request::ScoreRequest;
pub use utils::{round_to_decimals, DECIMAL_PLACES};
