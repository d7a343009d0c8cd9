//! Curve kinds and per-phase density strategies.

use h2o_core::{Density, Pressure, Temperature, kg_m3};
use h2o_eos::{EosResult, EquationOfState, Phase};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of curves the builder knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// Liquid-vapor coexistence
    Vaporization,
    /// Ice-vapor coexistence
    Sublimation,
    /// Ice-liquid coexistence
    Fusion,
    /// Liquid at fixed pressure
    LiquidIsobar,
    /// Ice at fixed pressure
    SolidIsobar,
}

impl CurveKind {
    pub const ALL: [CurveKind; 5] = [
        Self::Vaporization,
        Self::Sublimation,
        Self::Fusion,
        Self::LiquidIsobar,
        Self::SolidIsobar,
    ];

    /// Participating phases, lower-enthalpy phase first.
    pub fn phases(self) -> &'static [Phase] {
        match self {
            Self::Vaporization => &[Phase::Liquid, Phase::Vapor],
            Self::Sublimation => &[Phase::Ice, Phase::Vapor],
            Self::Fusion => &[Phase::Ice, Phase::Liquid],
            Self::LiquidIsobar => &[Phase::Liquid],
            Self::SolidIsobar => &[Phase::Ice],
        }
    }

    /// Two-phase coexistence curve (has a latent heat).
    pub fn is_phase_boundary(self) -> bool {
        self.phases().len() == 2
    }

    /// Pressure at temperature `t`: the coexistence pressure for phase
    /// boundaries, `isobar_pressure` for isobars.
    pub fn pressure<E>(
        self,
        eos: &E,
        t: Temperature,
        isobar_pressure: Pressure,
    ) -> EosResult<Pressure>
    where
        E: EquationOfState + ?Sized,
    {
        match self {
            Self::Vaporization => eos.saturation_pressure_at(t),
            Self::Sublimation => eos.sublimation_pressure_at(t),
            Self::Fusion => eos.melting_pressure_at(t),
            Self::LiquidIsobar | Self::SolidIsobar => Ok(isobar_pressure),
        }
    }

    /// Built-in density strategy for `phase` on this curve.
    pub fn default_strategy(self, phase: Phase) -> DensityStrategy {
        match (self, phase) {
            (_, Phase::Ice) => DensityStrategy::Ice,
            (Self::Vaporization, _) => DensityStrategy::Saturation,
            (Self::Sublimation, _) => DensityStrategy::Solve {
                seed: Seed::IdealGas,
            },
            (Self::Fusion, _) => DensityStrategy::Solve {
                seed: Seed::Constant { density: 1000.0 },
            },
            (_, Phase::Vapor) => DensityStrategy::Solve {
                seed: Seed::SaturatedVapor,
            },
            (_, Phase::Liquid) => DensityStrategy::Solve {
                seed: Seed::SaturatedLiquid,
            },
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vaporization => write!(f, "vaporization"),
            Self::Sublimation => write!(f, "sublimation"),
            Self::Fusion => write!(f, "fusion"),
            Self::LiquidIsobar => write!(f, "liquid isobar"),
            Self::SolidIsobar => write!(f, "solid isobar"),
        }
    }
}

/// How a phase's density (and enthalpy) is obtained at each sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DensityStrategy {
    /// Saturated-state correlations, no solve. Fluid phases only; the
    /// sample pressure is not consulted.
    Saturation,
    /// Newton solve against the bulk equation of state from `seed`.
    Solve { seed: Seed },
    /// Ice Gibbs function, no solve. Ice only.
    Ice,
}

impl DensityStrategy {
    pub fn is_valid_for(self, phase: Phase) -> bool {
        match self {
            Self::Ice => phase == Phase::Ice,
            Self::Saturation | Self::Solve { .. } => phase.is_fluid(),
        }
    }
}

/// Initial density estimate handed to the solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Seed {
    SaturatedLiquid,
    SaturatedVapor,
    /// `p / (R T)`
    IdealGas,
    Constant { density: f64 },
}

impl Seed {
    /// Density estimate at temperature `t` and pressure `p`.
    pub fn estimate<E>(self, eos: &E, t: Temperature, p: Pressure) -> EosResult<Density>
    where
        E: EquationOfState + ?Sized,
    {
        match self {
            Self::SaturatedLiquid => eos.saturated_liquid_density_at(t),
            Self::SaturatedVapor => eos.saturated_vapor_density_at(t),
            Self::IdealGas => Ok(eos.ideal_gas_density(t, p)),
            Self::Constant { density } => Ok(kg_m3(density)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use h2o_core::{k, pa};
    use h2o_eos::Water;

    #[test]
    fn boundaries_have_two_phases() {
        for kind in CurveKind::ALL {
            let expected = matches!(
                kind,
                CurveKind::Vaporization | CurveKind::Sublimation | CurveKind::Fusion
            );
            assert_eq!(kind.is_phase_boundary(), expected, "{kind}");
        }
    }

    #[test]
    fn defaults_are_compatible() {
        for kind in CurveKind::ALL {
            for &phase in kind.phases() {
                assert!(kind.default_strategy(phase).is_valid_for(phase));
            }
        }
        assert_eq!(
            CurveKind::Fusion.default_strategy(Phase::Liquid),
            DensityStrategy::Solve {
                seed: Seed::Constant { density: 1000.0 }
            }
        );
    }

    #[test]
    fn isobars_use_fixed_pressure() {
        let water = Water::new();
        let p = CurveKind::LiquidIsobar
            .pressure(&water, k(300.0), pa(2e5))
            .unwrap();
        assert_eq!(p.value, 2e5);
        let p = CurveKind::Vaporization
            .pressure(&water, k(300.0), pa(2e5))
            .unwrap();
        assert!((p.value - 3536.8).abs() < 1.0);
    }

    #[test]
    fn ideal_gas_seed() {
        let water = Water::new();
        let rho = Seed::IdealGas
            .estimate(&water, k(300.0), pa(1000.0))
            .unwrap();
        assert!((rho.value - 1000.0 / (461.51805 * 300.0)).abs() < 1e-12);
        let rho = Seed::Constant { density: 1000.0 }
            .estimate(&water, k(300.0), pa(1000.0))
            .unwrap();
        assert_eq!(rho.value, 1000.0);
    }

    #[test]
    fn strategy_yaml_shape() {
        let yaml = "type: solve\nseed:\n  type: constant\n  density: 990.0\n";
        let strategy: DensityStrategy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            strategy,
            DensityStrategy::Solve {
                seed: Seed::Constant { density: 990.0 }
            }
        );
    }
}
