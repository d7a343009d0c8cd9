//! IAPWS-92 auxiliary equations for the liquid-vapor saturation curve.
//!
//! Closed-form correlations in `theta = 1 - T/Tc`, consistent with
//! IAPWS-95 to within its uncertainty. Valid for `Tt <= T <= Tc`; callers
//! check the range.

use crate::constants::{PC, RHOC, TC};

const PSAT: [(f64, f64); 6] = [
    (-7.859_517_83, 1.0),
    (1.844_082_59, 1.5),
    (-11.786_649_7, 3.0),
    (22.680_741_1, 3.5),
    (-15.961_871_9, 4.0),
    (1.801_225_02, 7.5),
];

const RHO_LIQUID: [(f64, f64); 6] = [
    (1.992_740_64, 1.0 / 3.0),
    (1.099_653_42, 2.0 / 3.0),
    (-0.510_839_303, 5.0 / 3.0),
    (-1.754_934_79, 16.0 / 3.0),
    (-45.517_035_2, 43.0 / 3.0),
    (-6.746_944_50e5, 110.0 / 3.0),
];

const RHO_VAPOR: [(f64, f64); 6] = [
    (-2.031_502_40, 2.0 / 6.0),
    (-2.683_029_40, 4.0 / 6.0),
    (-5.386_264_92, 8.0 / 6.0),
    (-17.299_160_5, 18.0 / 6.0),
    (-44.758_658_1, 37.0 / 6.0),
    (-63.920_106_3, 71.0 / 6.0),
];

/// Auxiliary quantity α = h - T/ρ dp/dT, in units of 1000 J/kg.
const ALPHA0: f64 = 1000.0;
const D_ALPHA: f64 = -1135.905_627_715;
const ALPHA: [(f64, f64); 5] = [
    (-5.651_349_98e-8, -19.0),
    (2690.666_31, 1.0),
    (127.287_297, 4.5),
    (-135.003_439, 5.0),
    (0.981_825_814, 54.5),
];

fn theta(t: f64) -> f64 {
    1.0 - t / TC
}

fn series(coeffs: &[(f64, f64)], x: f64) -> f64 {
    coeffs.iter().map(|&(a, e)| a * x.powf(e)).sum()
}

/// Saturation pressure [Pa].
pub fn pressure(t: f64) -> f64 {
    PC * (TC / t * series(&PSAT, theta(t))).exp()
}

/// dp_sat/dT [Pa/K].
pub fn pressure_slope(t: f64) -> f64 {
    let th = theta(t);
    let sum = series(&PSAT, th);
    let d_sum_d_t: f64 = PSAT
        .iter()
        .map(|&(a, e)| -a * e * th.powf(e - 1.0) / TC)
        .sum();
    pressure(t) * (-TC / (t * t) * sum + TC / t * d_sum_d_t)
}

/// Saturated liquid density ρ' [kg/m³].
pub fn liquid_density(t: f64) -> f64 {
    RHOC * (1.0 + series(&RHO_LIQUID, theta(t)))
}

/// Saturated vapor density ρ'' [kg/m³].
pub fn vapor_density(t: f64) -> f64 {
    RHOC * series(&RHO_VAPOR, theta(t)).exp()
}

fn alpha(t: f64) -> f64 {
    ALPHA0 * (D_ALPHA + series(&ALPHA, t / TC))
}

/// Saturated liquid enthalpy h' [J/kg].
pub fn liquid_enthalpy(t: f64) -> f64 {
    alpha(t) + t / liquid_density(t) * pressure_slope(t)
}

/// Saturated vapor enthalpy h'' [J/kg].
pub fn vapor_enthalpy(t: f64) -> f64 {
    alpha(t) + t / vapor_density(t) * pressure_slope(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PT, TT};

    #[test]
    fn triple_point_pressure() {
        assert!((pressure(TT) - PT).abs() < 1e-3);
    }

    #[test]
    fn normal_boiling_point() {
        // 373.124 K is the IAPWS-95 normal boiling point.
        let p = pressure(373.124);
        assert!((p - 101_325.0).abs() < 10.0, "psat = {p}");
    }

    #[test]
    fn saturation_densities_at_triple_point() {
        assert!((liquid_density(TT) - 999.79).abs() < 0.01);
        assert!((vapor_density(TT) - 0.004_854).abs() < 1e-5);
    }

    #[test]
    fn critical_point_collapses() {
        assert!((liquid_density(TC) - RHOC).abs() < 1e-9);
        assert!((vapor_density(TC) - RHOC).abs() < 1e-9);
        assert!((liquid_enthalpy(TC) - vapor_enthalpy(TC)).abs() < 1e-6);
    }

    #[test]
    fn latent_heat_at_triple_point() {
        let l = vapor_enthalpy(TT) - liquid_enthalpy(TT);
        assert!((l - 2_500_540.0).abs() < 100.0, "lvap = {l}");
    }
}
