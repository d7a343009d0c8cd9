//! Built curve data, stored column-wise per phase.

use crate::kind::CurveKind;
use h2o_core::{SpecEnthalpy, SpecVolume};
use h2o_eos::Phase;

/// One phase at one temperature sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseState {
    /// Density [kg/m³]
    pub density: f64,
    /// Specific enthalpy [J/kg]
    pub enthalpy: SpecEnthalpy,
    /// Newton updates spent on the density (0 for closed-form correlations)
    pub iterations: usize,
}

impl PhaseState {
    /// Specific volume [m³/kg]
    pub fn specific_volume(&self) -> SpecVolume {
        1.0 / self.density
    }
}

/// States of one phase, aligned with the curve's temperatures.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseBranch {
    pub phase: Phase,
    pub states: Vec<PhaseState>,
}

impl PhaseBranch {
    pub fn densities(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.density).collect()
    }

    pub fn enthalpies(&self) -> Vec<SpecEnthalpy> {
        self.states.iter().map(|s| s.enthalpy).collect()
    }

    pub fn specific_volumes(&self) -> Vec<SpecVolume> {
        self.states.iter().map(PhaseState::specific_volume).collect()
    }

    pub fn total_iterations(&self) -> usize {
        self.states.iter().map(|s| s.iterations).sum()
    }
}

/// A fully built curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub kind: CurveKind,
    /// Sample temperatures [K], identical to the input sweep
    pub temperatures: Vec<f64>,
    /// Pressure at each sample [Pa]
    pub pressures: Vec<f64>,
    /// One branch per participating phase, lower-enthalpy phase first
    pub branches: Vec<PhaseBranch>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    pub fn branch(&self, phase: Phase) -> Option<&PhaseBranch> {
        self.branches.iter().find(|b| b.phase == phase)
    }

    /// Pointwise enthalpy difference, higher-enthalpy phase minus lower
    /// [J/kg]. None for single-phase curves.
    pub fn latent_heat(&self) -> Option<Vec<SpecEnthalpy>> {
        match self.branches.as_slice() {
            [lower, upper] => Some(
                lower
                    .states
                    .iter()
                    .zip(&upper.states)
                    .map(|(lo, hi)| hi.enthalpy - lo.enthalpy)
                    .collect(),
            ),
            _ => None,
        }
    }
}
