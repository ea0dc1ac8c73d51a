//! Error types for the calculator core
//!
//! Validation is the only way a computation can fail: every formula after
//! the domain checks is total, and all denominators are nonzero by domain
//! construction.

use thiserror::Error;

/// Validation error raised before any derived computation runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("calculator is intended for adults only: age {age_years} is below 18")]
    AdultOnly { age_years: f64 },
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, ValidationError>;

/// Check that a value lies within an inclusive domain
pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> CalcResult<()> {
    // NaN fails both comparisons and is rejected here as well
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
