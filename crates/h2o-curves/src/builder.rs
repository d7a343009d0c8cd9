//! Curve builder: pressure, density and enthalpy per temperature sample.

use crate::curve::{Curve, PhaseBranch, PhaseState};
use crate::error::{CurveError, CurveResult};
use crate::kind::{CurveKind, DensityStrategy};
use crate::sampling::TemperatureSweep;
use h2o_core::constants::ATMOSPHERIC_PRESSURE_PA;
use h2o_core::{k, pa};
use h2o_eos::{EquationOfState, Phase};
use h2o_solver::{DensitySolverConfig, SolverResult, solve_density_at};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Replaces the built-in strategy for one phase of one curve kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyOverride {
    pub kind: CurveKind,
    pub phase: Phase,
    pub strategy: DensityStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveOptions {
    pub solver: DensitySolverConfig,
    /// Pressure of the isobar curves [Pa]
    pub isobar_pressure: f64,
    /// Seed each solve with the previous sample's density.
    pub carry_seed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strategies: Vec<StrategyOverride>,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            solver: DensitySolverConfig::default(),
            isobar_pressure: ATMOSPHERIC_PRESSURE_PA,
            carry_seed: false,
            strategies: Vec::new(),
        }
    }
}

impl CurveOptions {
    /// Effective strategy: the last matching override, else the kind's default.
    pub fn strategy(&self, kind: CurveKind, phase: Phase) -> DensityStrategy {
        self.strategies
            .iter()
            .rev()
            .find(|o| o.kind == kind && o.phase == phase)
            .map(|o| o.strategy)
            .unwrap_or_else(|| kind.default_strategy(phase))
    }

    pub fn validate(&self) -> CurveResult<()> {
        if !self.isobar_pressure.is_finite() || self.isobar_pressure <= 0.0 {
            return Err(CurveError::Config {
                what: format!("isobar pressure must be positive, got {}", self.isobar_pressure),
            });
        }
        if self.solver.max_iterations == 0 {
            return Err(CurveError::Config {
                what: "solver needs at least one iteration".into(),
            });
        }
        for o in &self.strategies {
            if !o.kind.phases().contains(&o.phase) {
                return Err(CurveError::Config {
                    what: format!("{} curve has no {} phase", o.kind, o.phase),
                });
            }
        }
        for kind in CurveKind::ALL {
            for &phase in kind.phases() {
                strategy_for(self, kind, phase)?;
            }
        }
        Ok(())
    }
}

fn strategy_for(
    options: &CurveOptions,
    kind: CurveKind,
    phase: Phase,
) -> CurveResult<DensityStrategy> {
    let strategy = options.strategy(kind, phase);
    if strategy.is_valid_for(phase) {
        Ok(strategy)
    } else {
        Err(CurveError::IncompatibleStrategy {
            kind,
            phase,
            strategy,
        })
    }
}

/// Build `kind` over `temperatures`.
///
/// Any failing sample fails the whole curve. Output temperatures are the
/// input temperatures, unchanged.
pub fn build_curve<E>(
    kind: CurveKind,
    temperatures: &TemperatureSweep,
    eos: &E,
    options: &CurveOptions,
) -> CurveResult<Curve>
where
    E: EquationOfState + ?Sized,
{
    let temps = temperatures.values();
    let phases = kind.phases();
    let strategies = phases
        .iter()
        .map(|&phase| strategy_for(options, kind, phase))
        .collect::<CurveResult<Vec<_>>>()?;

    let mut pressures = Vec::with_capacity(temps.len());
    let mut branches: Vec<PhaseBranch> = phases
        .iter()
        .map(|&phase| PhaseBranch {
            phase,
            states: Vec::with_capacity(temps.len()),
        })
        .collect();

    for (index, &t) in temps.iter().enumerate() {
        let p = kind
            .pressure(eos, k(t), pa(options.isobar_pressure))
            .map_err(|source| CurveError::Pressure {
                kind,
                index,
                temperature: t,
                source,
            })?
            .value;
        pressures.push(p);

        for (branch, &strategy) in branches.iter_mut().zip(&strategies) {
            let carried = match strategy {
                DensityStrategy::Solve { .. } if options.carry_seed => {
                    branch.states.last().map(|s| s.density)
                }
                _ => None,
            };
            let state = evaluate_phase(eos, branch.phase, strategy, t, p, carried, &options.solver)
                .map_err(|source| CurveError::Sample {
                    kind,
                    phase: branch.phase,
                    index,
                    temperature: t,
                    source,
                })?;
            branch.states.push(state);
        }
    }

    debug!(
        kind = %kind,
        samples = temps.len(),
        iterations = branches.iter().map(PhaseBranch::total_iterations).sum::<usize>(),
        "curve built"
    );

    Ok(Curve {
        kind,
        temperatures: temps.to_vec(),
        pressures,
        branches,
    })
}

fn evaluate_phase<E>(
    eos: &E,
    phase: Phase,
    strategy: DensityStrategy,
    t: f64,
    p: f64,
    carried: Option<f64>,
    solver: &DensitySolverConfig,
) -> SolverResult<PhaseState>
where
    E: EquationOfState + ?Sized,
{
    // Ice never goes through the bulk equation of state.
    let state = match (phase, strategy) {
        (Phase::Ice, _) => PhaseState {
            density: eos.ice_density(t, p)?,
            enthalpy: eos.ice_enthalpy(t, p)?,
            iterations: 0,
        },
        (_, DensityStrategy::Solve { seed }) => {
            let estimate = match carried {
                Some(rho) => rho,
                None => seed.estimate(eos, k(t), pa(p))?.value,
            };
            let sol = solve_density_at(eos, t, p, estimate, solver)?;
            PhaseState {
                density: sol.density,
                enthalpy: eos.enthalpy(sol.density, t)?,
                iterations: sol.iterations,
            }
        }
        (Phase::Liquid, _) => PhaseState {
            density: eos.saturated_liquid_density(t)?,
            enthalpy: eos.saturated_liquid_enthalpy(t)?,
            iterations: 0,
        },
        (Phase::Vapor, _) => PhaseState {
            density: eos.saturated_vapor_density(t)?,
            enthalpy: eos.saturated_vapor_enthalpy(t)?,
            iterations: 0,
        },
    };
    Ok(state)
}
