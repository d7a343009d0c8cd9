//! Equation-of-state provider trait and validation helpers.

use crate::error::{EosError, EosResult};
use h2o_core::{Density, Pressure, Temperature, kg_m3, pa};

/// Capability set consumed by the density solver and curve builders.
///
/// Implementations must be thread-safe (Send + Sync) and stateless: every
/// method is a pure function of its arguments. All inputs and outputs are SI
/// (kg/m³, K, Pa, J/kg). The `*_at` methods are typed counterparts built on
/// the scalar ones.
pub trait EquationOfState: Send + Sync {
    /// Get the provider name (for debugging/logging).
    fn name(&self) -> &str;

    /// Bulk fluid pressure [Pa] at density and temperature.
    fn pressure(&self, rho: f64, t: f64) -> EosResult<f64>;

    /// Closed-form ∂p/∂ρ at fixed temperature, when the provider has one.
    ///
    /// Default returns None; the solver then differentiates numerically.
    fn pressure_derivative(&self, _rho: f64, _t: f64) -> Option<EosResult<f64>> {
        None
    }

    /// Bulk fluid specific enthalpy [J/kg] at density and temperature.
    fn enthalpy(&self, rho: f64, t: f64) -> EosResult<f64>;

    /// Liquid-vapor saturation pressure [Pa].
    fn saturation_pressure(&self, t: f64) -> EosResult<f64>;

    /// Saturated liquid density [kg/m³] (estimate).
    fn saturated_liquid_density(&self, t: f64) -> EosResult<f64>;

    /// Saturated vapor density [kg/m³] (estimate).
    fn saturated_vapor_density(&self, t: f64) -> EosResult<f64>;

    /// Saturated liquid enthalpy [J/kg].
    fn saturated_liquid_enthalpy(&self, t: f64) -> EosResult<f64>;

    /// Saturated vapor enthalpy [J/kg].
    fn saturated_vapor_enthalpy(&self, t: f64) -> EosResult<f64>;

    /// Ice-vapor coexistence pressure [Pa].
    fn sublimation_pressure(&self, t: f64) -> EosResult<f64>;

    /// Ice-liquid coexistence pressure [Pa].
    fn melting_pressure(&self, t: f64) -> EosResult<f64>;

    /// Ice density [kg/m³].
    fn ice_density(&self, t: f64, p: f64) -> EosResult<f64>;

    /// Ice specific enthalpy [J/kg].
    fn ice_enthalpy(&self, t: f64, p: f64) -> EosResult<f64>;

    /// Triple-point temperature [K].
    fn triple_point_temperature(&self) -> f64;

    /// Critical-point temperature [K].
    fn critical_temperature(&self) -> f64;

    /// Specific gas constant [J/(kg·K)].
    fn specific_gas_constant(&self) -> f64;

    fn pressure_at(&self, rho: Density, t: Temperature) -> EosResult<Pressure> {
        self.pressure(rho.value, t.value).map(pa)
    }

    fn saturation_pressure_at(&self, t: Temperature) -> EosResult<Pressure> {
        self.saturation_pressure(t.value).map(pa)
    }

    fn sublimation_pressure_at(&self, t: Temperature) -> EosResult<Pressure> {
        self.sublimation_pressure(t.value).map(pa)
    }

    fn melting_pressure_at(&self, t: Temperature) -> EosResult<Pressure> {
        self.melting_pressure(t.value).map(pa)
    }

    fn saturated_liquid_density_at(&self, t: Temperature) -> EosResult<Density> {
        self.saturated_liquid_density(t.value).map(kg_m3)
    }

    fn saturated_vapor_density_at(&self, t: Temperature) -> EosResult<Density> {
        self.saturated_vapor_density(t.value).map(kg_m3)
    }

    fn ice_density_at(&self, t: Temperature, p: Pressure) -> EosResult<Density> {
        self.ice_density(t.value, p.value).map(kg_m3)
    }

    /// Ideal-gas density `p / (R T)`.
    fn ideal_gas_density(&self, t: Temperature, p: Pressure) -> Density {
        kg_m3(p.value / (self.specific_gas_constant() * t.value))
    }
}

/// Validation helpers for provider inputs and outputs.
pub(crate) mod validation {
    use super::*;

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: f64) -> EosResult<f64> {
        if !t.is_finite() || t <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "temperature",
                value: t,
            });
        }
        Ok(t)
    }

    /// Ensure density is positive and finite.
    pub fn validate_density(rho: f64) -> EosResult<f64> {
        if !rho.is_finite() || rho <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "density",
                value: rho,
            });
        }
        Ok(rho)
    }

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: f64) -> EosResult<f64> {
        if !p.is_finite() || p <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "pressure",
                value: p,
            });
        }
        Ok(p)
    }
}
