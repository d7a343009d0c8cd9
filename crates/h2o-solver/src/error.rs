//! Error types for density solves.

use h2o_eos::EosError;
use std::fmt;
use thiserror::Error;

/// Why a Newton iteration gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceFailure {
    /// Iteration budget exhausted before the residual met tolerance.
    MaxIterations,
    /// An iterate left the physical domain (non-positive or non-finite density).
    NonPhysicalIterate,
    /// ∂p/∂ρ vanished or was not finite.
    DegenerateDerivative,
    /// ∂p/∂ρ < 0 at an iterate: mechanically unstable, no physical root.
    UnstableBranch,
}

impl fmt::Display for ConvergenceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxIterations => write!(f, "iteration budget exhausted"),
            Self::NonPhysicalIterate => write!(f, "non-physical density iterate"),
            Self::DegenerateDerivative => write!(f, "degenerate pressure derivative"),
            Self::UnstableBranch => write!(f, "negative pressure derivative (unstable branch)"),
        }
    }
}

/// Errors that can occur during a density solve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid input: {what} = {value}")]
    InvalidInput { what: &'static str, value: f64 },

    #[error(
        "Convergence failed: {reason} after {iterations} iterations \
         (density = {density} kg/m³, residual = {residual} Pa)"
    )]
    Convergence {
        reason: ConvergenceFailure,
        iterations: usize,
        density: f64,
        residual: f64,
    },

    #[error("Equation of state error: {0}")]
    Eos(#[from] EosError),
}

impl SolverError {
    /// True for the convergence family of failures.
    pub fn is_convergence(&self) -> bool {
        matches!(self, Self::Convergence { .. })
    }
}

pub type SolverResult<T> = Result<T, SolverError>;
