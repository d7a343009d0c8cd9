//! Reference constants shared by the IAPWS formulations.

/// Critical temperature [K].
pub const TC: f64 = 647.096;

/// Critical density [kg/m³].
pub const RHOC: f64 = 322.0;

/// Critical pressure [Pa].
pub const PC: f64 = 22.064e6;

/// Triple-point temperature [K].
pub const TT: f64 = 273.16;

/// Triple-point pressure [Pa].
pub const PT: f64 = 611.657;

/// Specific gas constant of water [J/(kg·K)].
pub const R: f64 = 461.518_05;

/// Normal pressure used as the ice reference [Pa].
pub const P0: f64 = 101_325.0;
