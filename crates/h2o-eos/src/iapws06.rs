//! IAPWS-06 Gibbs energy of ice Ih.
//!
//! `g(T, p)` is evaluated with complex-valued coefficients; density and
//! enthalpy come from its pressure and temperature derivatives:
//! `rho = 1 / g_p`, `h = g - T g_T`.

use crate::constants::{P0, PT, TT};
use num_complex::Complex64;

/// Highest pressure covered by the ice Ih equation [Pa].
pub const P_MAX: f64 = 210e6;

const G0: [f64; 5] = [
    -0.632_020_233_335_886e6,
    0.655_022_213_658_955,
    -0.189_369_929_326_131e-7,
    0.339_746_123_271_053e-14,
    -0.556_464_869_058_991e-21,
];

/// Residual entropy constant, chosen so the liquid reference state matches IAPWS-95.
const S0: f64 = -0.332_733_756_492_168e4;

const T1: Complex64 = Complex64::new(0.368_017_112_855_051e-1, 0.510_878_114_959_572e-1);
const R1: Complex64 = Complex64::new(0.447_050_716_285_388e2, 0.656_876_847_463_481e2);
const T2: Complex64 = Complex64::new(0.337_315_741_065_416, 0.335_449_415_919_309);
const R2: [Complex64; 3] = [
    Complex64::new(-0.725_974_574_329_220e2, -0.781_008_427_112_870e2),
    Complex64::new(-0.557_107_698_030_123e-4, 0.464_578_634_580_806e-4),
    Complex64::new(0.234_801_409_215_913e-10, -0.285_651_142_904_972e-10),
];

/// Gibbs energy and its first derivatives at one (T, p).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IceGibbs {
    /// g [J/kg]
    pub g: f64,
    /// ∂g/∂T [J/(kg·K)]
    pub g_t: f64,
    /// ∂g/∂p [m³/kg]
    pub g_p: f64,
}

fn kernel(tk: Complex64, tau: f64) -> Complex64 {
    (tk - tau) * (tk - tau).ln() + (tk + tau) * (tk + tau).ln()
        - 2.0 * tk * tk.ln()
        - tau * tau / tk
}

fn kernel_tau(tk: Complex64, tau: f64) -> Complex64 {
    -(tk - tau).ln() + (tk + tau).ln() - 2.0 * tau / tk
}

/// Evaluate the Gibbs function at temperature `t` [K] and pressure `p` [Pa].
pub fn gibbs(t: f64, p: f64) -> IceGibbs {
    let tau = t / TT;
    let dp = (p - P0) / PT;

    let mut g0 = 0.0;
    let mut g0_p = 0.0;
    for (k, &c) in G0.iter().enumerate() {
        g0 += c * dp.powi(k as i32);
        if k > 0 {
            g0_p += c * k as f64 / PT * dp.powi(k as i32 - 1);
        }
    }

    let mut r2 = Complex64::new(0.0, 0.0);
    let mut r2_p = Complex64::new(0.0, 0.0);
    for (k, &c) in R2.iter().enumerate() {
        r2 += c * dp.powi(k as i32);
        if k > 0 {
            r2_p += c * (k as f64 / PT * dp.powi(k as i32 - 1));
        }
    }

    let g = g0 - S0 * TT * tau + TT * (R1 * kernel(T1, tau) + r2 * kernel(T2, tau)).re;
    let g_t = -S0 + (R1 * kernel_tau(T1, tau) + r2 * kernel_tau(T2, tau)).re;
    let g_p = g0_p + TT * (r2_p * kernel(T2, tau)).re;

    IceGibbs { g, g_t, g_p }
}

/// Density of ice Ih [kg/m³].
pub fn density(t: f64, p: f64) -> f64 {
    1.0 / gibbs(t, p).g_p
}

/// Specific enthalpy of ice Ih [J/kg].
pub fn enthalpy(t: f64, p: f64) -> f64 {
    let gibbs = gibbs(t, p);
    gibbs.g - t * gibbs.g_t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triple_point_values() {
        let rho = density(TT, PT);
        let h = enthalpy(TT, PT);
        assert!((rho - 916.709).abs() < 1e-2, "rho = {rho}");
        assert!((h + 333_444.25).abs() < 1.0, "h = {h}");
    }

    #[test]
    fn gibbs_matches_liquid_at_triple_point() {
        // Phase equilibrium: g_ice = g_liquid = p/rho' at the triple point.
        let g = gibbs(TT, PT).g;
        assert!((g - 0.611_784).abs() < 1e-4, "g = {g}");
    }

    #[test]
    fn normal_melting_point() {
        let rho = density(273.152_519, P0);
        assert!((rho - 916.721).abs() < 1e-2, "rho = {rho}");
    }

    #[test]
    fn high_pressure_low_temperature() {
        let rho = density(100.0, 1e8);
        assert!((rho - 941.678).abs() < 1e-2, "rho = {rho}");
    }
}
