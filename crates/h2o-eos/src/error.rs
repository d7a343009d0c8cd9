//! Equation-of-state errors.

use thiserror::Error;

/// Result type for equation-of-state operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors raised at the equation-of-state boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    /// Input outside the validity range of a correlation.
    #[error("{what} = {value} outside validity range [{min}, {max}]")]
    Domain {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Non-physical input or result (non-finite, non-positive density, ...).
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },
}

impl EosError {
    /// Check `min <= value <= max`, reporting `what` on failure.
    pub fn check_range(what: &'static str, value: f64, min: f64, max: f64) -> EosResult<f64> {
        if !value.is_finite() {
            return Err(EosError::NonPhysical { what, value });
        }
        if value < min || value > max {
            return Err(EosError::Domain {
                what,
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    /// Reject a non-finite formulation result.
    pub fn finite(what: &'static str, value: f64) -> EosResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EosError::NonPhysical { what, value })
        }
    }
}
