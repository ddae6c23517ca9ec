//! Error types for score calculations

use thiserror::Error;

/// Errors returned by the calculators
///
/// Validation stops at the first failure, so a single error describes the
/// first offending input in validation order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Wrong type or shape of input (not an array, missing field, non-finite number)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A numeric value outside its domain, or an empty value set
    #[error("out of range: {0}")]
    OutOfRange(String),
}

/// Error category, for callers that only care which class of failure occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
}

impl ScoreError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ScoreError::InvalidArgument(msg.into())
    }

    pub(crate) fn out_of_range(msg: impl Into<String>) -> Self {
        ScoreError::OutOfRange(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoreError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ScoreError::OutOfRange(_) => ErrorKind::OutOfRange,
        }
    }

    /// Human-readable message without the category prefix
    pub fn message(&self) -> &str {
        match self {
            ScoreError::InvalidArgument(msg) | ScoreError::OutOfRange(msg) => msg,
        }
    }
}

/// Result type for score calculations
pub type Result<T> = std::result::Result<T, ScoreError>;
