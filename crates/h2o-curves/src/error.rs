use crate::kind::{CurveKind, DensityStrategy};
use h2o_core::CoreError;
use h2o_eos::{EosError, Phase};
use h2o_solver::SolverError;
use thiserror::Error;

pub type CurveResult<T> = Result<T, CurveError>;

#[derive(Error, Debug)]
pub enum CurveError {
    #[error("Invalid temperature sweep: {0}")]
    InvalidSweep(#[from] CoreError),

    #[error("{kind} pressure failed at sample {index} (T = {temperature} K): {source}")]
    Pressure {
        kind: CurveKind,
        index: usize,
        temperature: f64,
        #[source]
        source: EosError,
    },

    #[error("{kind} curve failed for {phase} at sample {index} (T = {temperature} K): {source}")]
    Sample {
        kind: CurveKind,
        phase: Phase,
        index: usize,
        temperature: f64,
        #[source]
        source: SolverError,
    },

    #[error("Density strategy {strategy:?} cannot be used for {phase} on the {kind} curve")]
    IncompatibleStrategy {
        kind: CurveKind,
        phase: Phase,
        strategy: DensityStrategy,
    },

    #[error("Configuration error: {what}")]
    Config { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Scenario incomplete: {} curve(s) failed", .0.len())]
    Incomplete(Vec<CurveFailure>),
}

impl CurveError {
    /// Temperature of the sample that failed, if the error came from one.
    pub fn temperature(&self) -> Option<f64> {
        match self {
            Self::Pressure { temperature, .. } | Self::Sample { temperature, .. } => {
                Some(*temperature)
            }
            _ => None,
        }
    }
}

/// One curve of a scenario that could not be built.
#[derive(Debug)]
pub struct CurveFailure {
    /// Series label the curve would have produced
    pub label: String,
    pub kind: CurveKind,
    pub error: CurveError,
}

impl std::fmt::Display for CurveFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use h2o_solver::ConvergenceFailure;

    #[test]
    fn sample_error_names_curve_and_temperature() {
        let err = CurveError::Sample {
            kind: CurveKind::Fusion,
            phase: Phase::Liquid,
            index: 7,
            temperature: 260.5,
            source: SolverError::Convergence {
                reason: ConvergenceFailure::MaxIterations,
                iterations: 50,
                density: 900.0,
                residual: 1.0,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("fusion"));
        assert!(msg.contains("liquid"));
        assert!(msg.contains("260.5"));
        assert_eq!(err.temperature(), Some(260.5));
    }

    #[test]
    fn incomplete_counts_failures() {
        let failure = CurveFailure {
            label: "Sublimation".into(),
            kind: CurveKind::Sublimation,
            error: CurveError::Config {
                what: "test".into(),
            },
        };
        let err = CurveError::Incomplete(vec![failure]);
        assert!(err.to_string().contains("1 curve(s) failed"));
        assert_eq!(err.temperature(), None);
    }
}
