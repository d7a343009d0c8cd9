//! Newton density solver with positivity constraint.

use crate::derivative::central_difference;
use crate::error::{ConvergenceFailure, SolverError, SolverResult};
use crate::isotherm::{Isotherm, PressureFunction};
use h2o_core::Tolerances;
use h2o_eos::EquationOfState;
use tracing::{debug, trace};

/// Newton solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DensitySolverConfig {
    /// Maximum Newton updates
    pub max_iterations: usize,
    /// Pressure residual tolerance: converged when
    /// `|p(rho) - p_target| <= abs + rel * |p_target|`.
    ///
    /// The attainable residual is bounded by f64 roundoff in `p(rho)`, about
    /// 1e-5 Pa for liquid water near 1000 kg/m³. An `abs` bound below that
    /// floor with `rel = 0` cannot be met and ends in `MaxIterations`.
    pub tolerance: Tolerances,
    /// Relative step for the finite difference derivative
    pub derivative_step: f64,
}

impl Default for DensitySolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance: Tolerances::default(),
            derivative_step: 1e-6,
        }
    }
}

/// Converged density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensitySolution {
    /// Density [kg/m³]
    pub density: f64,
    /// Final residual `p(density) - p_target` [Pa]
    pub residual: f64,
    /// Newton updates taken (0 when the seed already satisfied tolerance)
    pub iterations: usize,
}

/// Solve `pressure_fn(rho) = p_target` for `rho` starting from `rho_estimate`.
///
/// Fails with [`SolverError::Convergence`] when the residual does not meet
/// tolerance within `max_iterations` updates, when an iterate is
/// non-positive or non-finite, when the derivative degenerates, or when an
/// iterate lies where ∂p/∂ρ < 0. A root is only accepted with ∂p/∂ρ > 0.
pub fn solve_density<P>(
    pressure_fn: &P,
    p_target: f64,
    rho_estimate: f64,
    config: &DensitySolverConfig,
) -> SolverResult<DensitySolution>
where
    P: PressureFunction + ?Sized,
{
    if !p_target.is_finite() {
        return Err(SolverError::InvalidInput {
            what: "target pressure",
            value: p_target,
        });
    }
    if !rho_estimate.is_finite() || rho_estimate <= 0.0 {
        return Err(SolverError::InvalidInput {
            what: "density estimate",
            value: rho_estimate,
        });
    }

    let bound = config.tolerance.bound(p_target);
    let mut rho = rho_estimate;
    let mut residual = pressure_fn.pressure(rho)? - p_target;

    for iter in 0..=config.max_iterations {
        if !residual.is_finite() {
            return Err(non_physical(iter, rho, residual));
        }

        let slope = match pressure_fn.derivative(rho) {
            Some(d) => d?,
            None => central_difference(|r| pressure_fn.pressure(r), rho, config.derivative_step)?,
        };
        if !slope.is_finite() || slope == 0.0 {
            debug!(iter, rho, slope, "degenerate pressure derivative");
            return Err(failure(ConvergenceFailure::DegenerateDerivative, iter, rho, residual));
        }
        if slope < 0.0 {
            debug!(iter, rho, slope, "iterate on mechanically unstable branch");
            return Err(failure(ConvergenceFailure::UnstableBranch, iter, rho, residual));
        }

        if residual.abs() <= bound {
            trace!(iter, rho, residual, "density solve converged");
            return Ok(DensitySolution {
                density: rho,
                residual,
                iterations: iter,
            });
        }
        if iter == config.max_iterations {
            break;
        }

        let next = rho - residual / slope;
        if !next.is_finite() || next <= 0.0 {
            debug!(iter, rho, next, "density iterate left physical domain");
            return Err(non_physical(iter + 1, next, residual));
        }

        rho = next;
        residual = pressure_fn.pressure(rho)? - p_target;
        trace!(iter, rho, residual, "newton update");
    }

    debug!(
        max_iterations = config.max_iterations,
        rho, residual, "density solve did not converge"
    );
    Err(failure(
        ConvergenceFailure::MaxIterations,
        config.max_iterations,
        rho,
        residual,
    ))
}

/// Solve for density on the isotherm `t` of an equation of state.
pub fn solve_density_at<E>(
    eos: &E,
    t: f64,
    p_target: f64,
    rho_estimate: f64,
    config: &DensitySolverConfig,
) -> SolverResult<DensitySolution>
where
    E: EquationOfState + ?Sized,
{
    solve_density(&Isotherm::new(eos, t), p_target, rho_estimate, config)
}

fn failure(
    reason: ConvergenceFailure,
    iterations: usize,
    density: f64,
    residual: f64,
) -> SolverError {
    SolverError::Convergence {
        reason,
        iterations,
        density,
        residual,
    }
}

fn non_physical(iterations: usize, density: f64, residual: f64) -> SolverError {
    failure(ConvergenceFailure::NonPhysicalIterate, iterations, density, residual)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadratic(rho: f64) -> SolverResult<f64> {
        Ok(rho * rho)
    }

    #[test]
    fn simple_quadratic() {
        // rho^2 = 4, rho > 0
        let config = DensitySolverConfig::default();
        let sol = solve_density(&quadratic, 4.0, 3.0, &config).unwrap();
        assert!((sol.density - 2.0).abs() < 1e-6);
        assert!(sol.residual.abs() <= config.tolerance.bound(4.0));
        assert!(sol.iterations > 0);
    }

    #[test]
    fn exact_seed_takes_no_iterations() {
        let config = DensitySolverConfig::default();
        let sol = solve_density(&quadratic, 4.0, 2.0, &config).unwrap();
        assert_eq!(sol.iterations, 0);
        assert_eq!(sol.density, 2.0);
    }

    #[test]
    fn closed_form_derivative_is_used() {
        struct Linear;
        impl PressureFunction for Linear {
            fn pressure(&self, rho: f64) -> SolverResult<f64> {
                Ok(5.0 * rho)
            }
            fn derivative(&self, _rho: f64) -> Option<SolverResult<f64>> {
                Some(Ok(5.0))
            }
        }
        let sol = solve_density(&Linear, 50.0, 1.0, &DensitySolverConfig::default()).unwrap();
        assert_eq!(sol.iterations, 1);
        assert!((sol.density - 10.0).abs() < 1e-12);
    }

    #[test]
    fn overshoot_to_negative_density_fails() {
        // Saturating pressure curve: Newton from far away overshoots.
        let stiff = |rho: f64| -> SolverResult<f64> { Ok(1e6 * ((rho - 1000.0) / 10.0).atan()) };
        let err = solve_density(&stiff, 0.0, 1.0, &DensitySolverConfig::default()).unwrap_err();
        match err {
            SolverError::Convergence { reason, .. } => {
                assert_eq!(reason, ConvergenceFailure::NonPhysicalIterate)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn iteration_budget_is_enforced() {
        let config = DensitySolverConfig {
            max_iterations: 2,
            ..Default::default()
        };
        // Newton on rho^2 halves the error at best far from the root.
        let err = solve_density(&quadratic, 4.0, 1000.0, &config).unwrap_err();
        assert!(matches!(
            err,
            SolverError::Convergence {
                reason: ConvergenceFailure::MaxIterations,
                iterations: 2,
                ..
            }
        ));
    }

    #[test]
    fn flat_function_is_degenerate() {
        let flat = |_rho: f64| -> SolverResult<f64> { Ok(7.0) };
        let err = solve_density(&flat, 1.0, 10.0, &DensitySolverConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SolverError::Convergence {
                reason: ConvergenceFailure::DegenerateDerivative,
                ..
            }
        ));
    }

    // rho (rho - 3)^2: dp/drho < 0 for 1 < rho < 3
    fn van_der_waals_like(rho: f64) -> SolverResult<f64> {
        Ok(rho * (rho - 3.0) * (rho - 3.0))
    }

    #[test]
    fn root_on_unstable_branch_is_rejected() {
        // rho = 2 solves p = 2 exactly, but with dp/drho = -3.
        let err = solve_density(&van_der_waals_like, 2.0, 2.0, &DensitySolverConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SolverError::Convergence {
                reason: ConvergenceFailure::UnstableBranch,
                iterations: 0,
                ..
            }
        ));
    }

    #[test]
    fn stable_branch_root_is_found() {
        let config = DensitySolverConfig::default();
        let sol = solve_density(&van_der_waals_like, 2.0, 4.0, &config).unwrap();
        assert!((sol.density - (2.0 + 3.0_f64.sqrt())).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_inputs() {
        let config = DensitySolverConfig::default();
        assert!(matches!(
            solve_density(&quadratic, 4.0, 0.0, &config),
            Err(SolverError::InvalidInput { .. })
        ));
        assert!(matches!(
            solve_density(&quadratic, 4.0, -1.0, &config),
            Err(SolverError::InvalidInput { .. })
        ));
        assert!(matches!(
            solve_density(&quadratic, f64::NAN, 1.0, &config),
            Err(SolverError::InvalidInput { .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn residual_within_tolerance_on_success(
            root in 1.0_f64..2000.0,
            seed_factor in 0.5_f64..2.0,
            stiffness in 1e3_f64..1e6,
        ) {
            // Monotonic convex relation p = k (rho^2 - root^2) + 1e5.
            let offset = 1e5;
            let p = move |rho: f64| -> SolverResult<f64> {
                Ok(stiffness * (rho * rho - root * root) + offset)
            };
            let config = DensitySolverConfig::default();
            let sol = solve_density(&p, offset, root * seed_factor, &config).unwrap();
            prop_assert!(sol.density > 0.0);
            prop_assert!(sol.residual.abs() <= config.tolerance.bound(offset));
            prop_assert!((sol.density - root).abs() / root < 1e-3);
        }
    }
}
