//! Density solves against the IAPWS water provider.

use h2o_core::constants::ATMOSPHERIC_PRESSURE_PA;
use h2o_core::{Tolerances, linspace};
use h2o_eos::{EquationOfState, Water};
use h2o_solver::{ConvergenceFailure, DensitySolverConfig, SolverError, solve_density_at};
use proptest::prelude::*;

const TT: f64 = 273.16;
const PT: f64 = 611.657;

#[test]
fn triple_point_liquid_density() {
    let water = Water::new();
    let config = DensitySolverConfig::default();
    let seed = water.saturated_liquid_density(TT).unwrap();

    let sol = solve_density_at(&water, TT, PT, seed, &config).unwrap();

    assert!((sol.density - 999.79).abs() < 0.05, "rho = {}", sol.density);
    let p = water.pressure(sol.density, TT).unwrap();
    assert!((p - PT).abs() <= 1e-6 * PT, "residual = {}", p - PT);
    assert!(sol.iterations <= 5);
}

#[test]
fn poor_seed_fails_to_converge() {
    let water = Water::new();
    let config = DensitySolverConfig::default();

    // True root near 974 kg/m³
    let err = solve_density_at(&water, 350.0, 1e6, 1.0, &config).unwrap_err();
    assert!(err.is_convergence(), "unexpected error: {err}");

    // Fusion curve at its low end, true root near 1091 kg/m³
    let t = 251.165;
    let p = water.melting_pressure(t).unwrap();
    let err = solve_density_at(&water, t, p, 1.0, &config).unwrap_err();
    match err {
        SolverError::Convergence { iterations, .. } => {
            assert!(iterations <= config.max_iterations)
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn vapor_like_seed_at_triple_point_is_rejected() {
    // Newton from 1 kg/m³ settles inside the vapor spinodal, where dp/drho < 0.
    let water = Water::new();
    let config = DensitySolverConfig::default();
    let err = solve_density_at(&water, TT, PT, 1.0, &config).unwrap_err();
    assert!(err.is_convergence(), "unexpected error: {err}");
}

#[test]
fn stable_vapor_root_at_triple_point() {
    let water = Water::new();
    let config = DensitySolverConfig::default();
    let seed = water.saturated_vapor_density(TT).unwrap();
    let sol = solve_density_at(&water, TT, PT, seed, &config).unwrap();
    assert!((sol.density - 0.00485).abs() < 1e-5, "rho = {}", sol.density);
}

#[test]
fn absolute_bound_below_roundoff_exhausts_budget() {
    let water = Water::new();
    let config = DensitySolverConfig {
        tolerance: Tolerances { abs: 1e-6, rel: 0.0 },
        ..Default::default()
    };
    let seed = water.saturated_liquid_density(TT).unwrap();
    let err = solve_density_at(&water, TT, PT, seed, &config).unwrap_err();
    match err {
        SolverError::Convergence {
            reason, density, ..
        } => {
            assert_eq!(reason, ConvergenceFailure::MaxIterations);
            assert!((density - 999.79).abs() < 0.05);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn fusion_seed_of_1000_converges() {
    let water = Water::new();
    let config = DensitySolverConfig::default();
    let t = 251.165;
    let p = water.melting_pressure(t).unwrap();

    let sol = solve_density_at(&water, t, p, 1000.0, &config).unwrap();
    assert!((sol.density - 1091.2).abs() < 0.5, "rho = {}", sol.density);
    assert!(sol.iterations <= 6);
}

#[test]
fn ideal_gas_seed_on_sublimation_curve() {
    let water = Water::new();
    let config = DensitySolverConfig::default();
    for t in [150.0, 200.0, 250.0, TT] {
        let p = water.sublimation_pressure(t).unwrap();
        let seed = p / (water.specific_gas_constant() * t);
        let sol = solve_density_at(&water, t, p, seed, &config).unwrap();
        assert!(sol.iterations <= 2, "T = {t}: {} iterations", sol.iterations);
        assert!((sol.density / seed - 1.0).abs() < 1e-3);
    }
}

#[test]
fn previous_solution_seed_is_no_slower() {
    // Dense liquid samples near the triple point at one atmosphere.
    let water = Water::new();
    let config = DensitySolverConfig::default();
    let temps = linspace(TT, 283.15, 100).unwrap();

    let mut previous: Option<f64> = None;
    for &t in &temps {
        let raw_seed = water.saturated_liquid_density(t).unwrap();
        let from_raw =
            solve_density_at(&water, t, ATMOSPHERIC_PRESSURE_PA, raw_seed, &config).unwrap();

        if let Some(carried) = previous {
            let from_carried =
                solve_density_at(&water, t, ATMOSPHERIC_PRESSURE_PA, carried, &config).unwrap();
            assert!(
                from_carried.iterations <= from_raw.iterations,
                "T = {t}: carried {} > raw {}",
                from_carried.iterations,
                from_raw.iterations
            );
        }
        previous = Some(from_raw.density);
    }
}

proptest! {
    #[test]
    fn liquid_isobar_density_is_positive(t in TT..370.0_f64) {
        let water = Water::new();
        let config = DensitySolverConfig::default();
        let seed = water.saturated_liquid_density(t).unwrap();
        let sol = solve_density_at(&water, t, ATMOSPHERIC_PRESSURE_PA, seed, &config).unwrap();
        prop_assert!(sol.density > 0.0 && sol.density.is_finite());
        let p = water.pressure(sol.density, t).unwrap();
        prop_assert!(config.tolerance.accepts(p - ATMOSPHERIC_PRESSURE_PA, ATMOSPHERIC_PRESSURE_PA));
    }
}
