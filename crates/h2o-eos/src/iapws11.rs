//! IAPWS-11 sublimation and melting pressure equations (ice Ih).

use crate::constants::{PT, TT};

const SUBLIMATION: [(f64, f64); 3] = [
    (-0.212_144_006e2, 0.333_333_333e-2),
    (0.273_203_819e2, 0.120_666_667e1),
    (-0.610_598_130e1, 0.170_333_333e1),
];

const MELTING_IH: [(f64, f64); 3] = [
    (0.119_539_337e7, 0.300_000e1),
    (0.808_183_159e5, 0.257_500e2),
    (0.333_826_860e4, 0.103_750e3),
];

/// Lowest temperature covered by the sublimation equation [K].
pub const SUBLIMATION_T_MIN: f64 = 50.0;

/// Lowest temperature of the ice Ih melting curve [K] (Ih-III-liquid triple point).
pub const MELTING_IH_T_MIN: f64 = 251.165;

/// Sublimation pressure [Pa], valid for 50 K <= T <= Tt.
pub fn sublimation_pressure(t: f64) -> f64 {
    let theta = t / TT;
    let sum: f64 = SUBLIMATION.iter().map(|&(a, b)| a * theta.powf(b)).sum();
    PT * (sum / theta).exp()
}

/// Melting pressure of ice Ih [Pa], valid for 251.165 K <= T <= Tt.
pub fn melting_pressure(t: f64) -> f64 {
    let theta = t / TT;
    let sum: f64 = MELTING_IH
        .iter()
        .map(|&(a, b)| a * (1.0 - theta.powf(b)))
        .sum();
    PT * (1.0 + sum)
}
