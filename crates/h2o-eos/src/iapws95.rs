//! IAPWS-95 Helmholtz free energy formulation for ordinary water.
//!
//! Covers what the curve pipelines need: pressure and specific enthalpy as
//! functions of density and temperature. Both come from the first
//! derivatives of the dimensionless Helmholtz energy
//! `phi(delta, tau) = phi0 + phir`, with `delta = rho / rhoc` and
//! `tau = Tc / T`.
//!
//! Inputs are not validated here; see [`crate::Water`].

use crate::constants::{R, RHOC, TC};

/// Ideal-gas coefficients n°1..n°8.
const IDEAL_N: [f64; 8] = [
    -8.320_446_483_749_7,
    6.683_210_527_593_2,
    3.006_32,
    0.012_436,
    0.973_15,
    1.279_50,
    0.969_56,
    0.248_73,
];

/// Ideal-gas exponents γ°4..γ°8.
const IDEAL_GAMMA: [f64; 5] = [
    1.287_289_67,
    3.537_342_22,
    7.740_737_08,
    9.244_377_96,
    27.507_510_5,
];

/// Residual terms 1-7: `n δ^d τ^t`, stored as (d, t, n).
const POLYNOMIAL: [(i32, f64, f64); 7] = [
    (1, -0.5, 0.125_335_479_355_23e-1),
    (1, 0.875, 0.789_576_347_228_28e1),
    (1, 1.0, -0.878_032_033_035_61e1),
    (2, 0.5, 0.318_025_093_454_18),
    (2, 0.75, -0.261_455_338_593_58),
    (3, 0.375, -0.781_997_516_879_81e-2),
    (4, 1.0, 0.880_894_931_021_34e-2),
];

/// Residual terms 8-51: `n δ^d τ^t exp(-δ^c)`, stored as (c, d, t, n).
const EXPONENTIAL: [(i32, i32, i32, f64); 44] = [
    (1, 1, 4, -0.668_565_723_079_65),
    (1, 1, 6, 0.204_338_109_509_65),
    (1, 1, 12, -0.662_126_050_396_87e-4),
    (1, 2, 1, -0.192_327_211_560_02),
    (1, 2, 5, -0.257_090_430_034_38),
    (1, 3, 4, 0.160_748_684_862_51),
    (1, 4, 2, -0.400_928_289_258_07e-1),
    (1, 4, 13, 0.393_434_226_032_54e-6),
    (1, 5, 9, -0.759_413_770_881_44e-5),
    (1, 7, 3, 0.562_509_793_518_88e-3),
    (1, 9, 4, -0.156_086_522_571_35e-4),
    (1, 10, 11, 0.115_379_964_229_51e-8),
    (1, 11, 4, 0.365_821_651_442_04e-6),
    (1, 13, 13, -0.132_511_800_746_68e-11),
    (1, 15, 1, -0.626_395_869_124_54e-9),
    (2, 1, 7, -0.107_936_009_089_32),
    (2, 2, 1, 0.176_114_910_087_52e-1),
    (2, 2, 9, 0.221_322_951_675_46),
    (2, 2, 10, -0.402_476_697_635_28),
    (2, 3, 10, 0.580_833_999_857_59),
    (2, 4, 3, 0.499_691_469_908_06e-2),
    (2, 4, 7, -0.313_587_007_125_49e-1),
    (2, 4, 10, -0.743_159_297_103_41),
    (2, 5, 10, 0.478_073_299_154_80),
    (2, 6, 6, 0.205_279_408_959_48e-1),
    (2, 6, 10, -0.136_364_351_103_43),
    (2, 7, 10, 0.141_806_344_006_17e-1),
    (2, 9, 1, 0.833_265_048_807_13e-2),
    (2, 9, 2, -0.290_523_360_095_85e-1),
    (2, 9, 3, 0.386_150_855_742_06e-1),
    (2, 9, 4, -0.203_934_865_137_04e-1),
    (2, 9, 8, -0.165_540_500_637_34e-2),
    (2, 10, 6, 0.199_555_719_795_41e-2),
    (2, 10, 9, 0.158_703_083_241_57e-3),
    (2, 12, 8, -0.163_885_683_425_30e-4),
    (3, 3, 16, 0.436_136_157_238_11e-1),
    (3, 4, 22, 0.349_940_054_637_65e-1),
    (3, 4, 23, -0.767_881_978_446_21e-1),
    (3, 5, 23, 0.224_462_773_320_06e-1),
    (4, 14, 10, -0.626_897_104_146_85e-4),
    (6, 3, 50, -0.557_111_185_656_45e-9),
    (6, 6, 44, -0.199_057_183_544_08),
    (6, 6, 46, 0.317_774_973_307_38),
    (6, 6, 50, -0.118_411_824_259_81),
];

/// Residual terms 52-54 (Gaussian bell-shaped).
struct Gaussian {
    d: i32,
    t: i32,
    n: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,
    epsilon: f64,
}

const GAUSSIAN: [Gaussian; 3] = [
    Gaussian {
        d: 3,
        t: 0,
        n: -0.313_062_603_234_35e2,
        alpha: 20.0,
        beta: 150.0,
        gamma: 1.21,
        epsilon: 1.0,
    },
    Gaussian {
        d: 3,
        t: 1,
        n: 0.315_461_402_377_81e2,
        alpha: 20.0,
        beta: 150.0,
        gamma: 1.21,
        epsilon: 1.0,
    },
    Gaussian {
        d: 3,
        t: 4,
        n: -0.252_131_543_416_95e4,
        alpha: 20.0,
        beta: 250.0,
        gamma: 1.25,
        epsilon: 1.0,
    },
];

/// Residual terms 55-56 (non-analytic, shape the critical region).
struct NonAnalytic {
    a: f64,
    b: f64,
    big_b: f64,
    n: f64,
    c: f64,
    d: f64,
    big_a: f64,
    beta: f64,
}

const NON_ANALYTIC: [NonAnalytic; 2] = [
    NonAnalytic {
        a: 3.5,
        b: 0.85,
        big_b: 0.2,
        n: -0.148_746_408_567_24,
        c: 28.0,
        d: 700.0,
        big_a: 0.32,
        beta: 0.3,
    },
    NonAnalytic {
        a: 3.5,
        b: 0.95,
        big_b: 0.2,
        n: 0.318_061_108_784_44,
        c: 32.0,
        d: 800.0,
        big_a: 0.32,
        beta: 0.3,
    },
];

/// First derivatives of the residual Helmholtz energy.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Residual {
    /// ∂φr/∂δ
    delta: f64,
    /// ∂φr/∂τ
    tau: f64,
}

fn residual(delta: f64, tau: f64) -> Residual {
    let mut r = Residual::default();

    for &(d, t, n) in &POLYNOMIAL {
        r.delta += n * f64::from(d) * delta.powi(d - 1) * tau.powf(t);
        r.tau += n * t * delta.powi(d) * tau.powf(t - 1.0);
    }

    for &(c, d, t, n) in &EXPONENTIAL {
        let delta_c = delta.powi(c);
        let e = (-delta_c).exp();
        r.delta += n * e * delta.powi(d - 1) * tau.powi(t) * (f64::from(d) - f64::from(c) * delta_c);
        r.tau += n * f64::from(t) * delta.powi(d) * tau.powi(t - 1) * e;
    }

    for g in &GAUSSIAN {
        let dd = delta - g.epsilon;
        let dt = tau - g.gamma;
        let base = g.n
            * delta.powi(g.d)
            * tau.powi(g.t)
            * (-g.alpha * dd * dd - g.beta * dt * dt).exp();
        r.delta += base * (f64::from(g.d) / delta - 2.0 * g.alpha * dd);
        r.tau += base * (f64::from(g.t) / tau - 2.0 * g.beta * dt);
    }

    for na in &NON_ANALYTIC {
        let dm1 = delta - 1.0;
        let sq = dm1 * dm1;
        let theta = (1.0 - tau) + na.big_a * sq.powf(1.0 / (2.0 * na.beta));
        let big_delta = theta * theta + na.big_b * sq.powf(na.a);
        let psi = (-na.c * sq - na.d * (tau - 1.0).powi(2)).exp();

        let d_big_delta_d_delta = dm1
            * (na.big_a * theta * (2.0 / na.beta) * sq.powf(1.0 / (2.0 * na.beta) - 1.0)
                + 2.0 * na.big_b * na.a * sq.powf(na.a - 1.0));
        let delta_b = big_delta.powf(na.b);
        let d_delta_b_d_delta = na.b * big_delta.powf(na.b - 1.0) * d_big_delta_d_delta;
        let d_delta_b_d_tau = -2.0 * theta * na.b * big_delta.powf(na.b - 1.0);
        let psi_delta = -2.0 * na.c * dm1 * psi;
        let psi_tau = -2.0 * na.d * (tau - 1.0) * psi;

        r.delta += na.n * (delta_b * (psi + delta * psi_delta) + d_delta_b_d_delta * delta * psi);
        r.tau += na.n * delta * (d_delta_b_d_tau * psi + delta_b * psi_tau);
    }

    r
}

/// ∂φ°/∂τ of the ideal-gas part.
fn ideal_tau(tau: f64) -> f64 {
    let mut sum = IDEAL_N[1] + IDEAL_N[2] / tau;
    for (n, gamma) in IDEAL_N[3..].iter().zip(IDEAL_GAMMA) {
        sum += n * gamma * (1.0 / (1.0 - (-gamma * tau).exp()) - 1.0);
    }
    sum
}

/// Pressure [Pa] at density `rho` [kg/m³] and temperature `t` [K].
pub fn pressure(rho: f64, t: f64) -> f64 {
    let delta = rho / RHOC;
    let r = residual(delta, TC / t);
    rho * R * t * (1.0 + delta * r.delta)
}

/// Specific enthalpy [J/kg] at density `rho` [kg/m³] and temperature `t` [K].
///
/// Reference state: zero internal energy and entropy of the saturated
/// liquid at the triple point.
pub fn enthalpy(rho: f64, t: f64) -> f64 {
    let delta = rho / RHOC;
    let tau = TC / t;
    let r = residual(delta, tau);
    R * t * (1.0 + tau * (ideal_tau(tau) + r.tau) + delta * r.delta)
}
