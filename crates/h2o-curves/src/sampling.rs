//! Temperature sample sequences.

use crate::error::CurveResult;
use h2o_core::{ensure_strictly_monotonic, linspace};
use h2o_eos::EquationOfState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strictly monotonic, finite, non-empty temperatures [K].
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSweep {
    values: Vec<f64>,
}

impl TemperatureSweep {
    /// Evenly spaced samples over `[start, end]`; the end point is exact.
    pub fn linear(start: f64, end: f64, num_points: usize) -> CurveResult<Self> {
        Self::from_values(linspace(start, end, num_points)?)
    }

    /// Explicitly listed samples.
    pub fn from_values(values: Vec<f64>) -> CurveResult<Self> {
        ensure_strictly_monotonic(&values)?;
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> f64 {
        self.values[0]
    }

    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }
}

/// Named reference temperature, resolved against a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePoint {
    TriplePoint,
    CriticalPoint,
}

/// Sweep end point: a reference point or a temperature in kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemperatureBound {
    Reference(ReferencePoint),
    Kelvin(f64),
}

impl TemperatureBound {
    pub fn resolve<E: EquationOfState + ?Sized>(self, eos: &E) -> f64 {
        match self {
            Self::Reference(ReferencePoint::TriplePoint) => eos.triple_point_temperature(),
            Self::Reference(ReferencePoint::CriticalPoint) => eos.critical_temperature(),
            Self::Kelvin(t) => t,
        }
    }
}

impl fmt::Display for TemperatureBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(ReferencePoint::TriplePoint) => write!(f, "triple point"),
            Self::Reference(ReferencePoint::CriticalPoint) => write!(f, "critical point"),
            Self::Kelvin(t) => write!(f, "{t} K"),
        }
    }
}

/// Linear sweep definition as it appears in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: TemperatureBound,
    pub end: TemperatureBound,
    pub samples: usize,
}

impl SweepRange {
    pub fn new(start: TemperatureBound, end: TemperatureBound, samples: usize) -> Self {
        Self {
            start,
            end,
            samples,
        }
    }

    /// Resolve both bounds and generate the samples.
    pub fn sweep<E: EquationOfState + ?Sized>(&self, eos: &E) -> CurveResult<TemperatureSweep> {
        TemperatureSweep::linear(self.start.resolve(eos), self.end.resolve(eos), self.samples)
    }
}

impl fmt::Display for SweepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} ({} samples)", self.start, self.end, self.samples)
    }
}
