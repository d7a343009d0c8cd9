//! IAPWS reference provider for ordinary water and ice Ih.

use crate::constants::{R, TC, TT};
use crate::error::{EosError, EosResult};
use crate::provider::EquationOfState;
use crate::provider::validation::{validate_density, validate_pressure, validate_temperature};
use crate::{iapws06, iapws11, iapws92, iapws95};

/// Water/ice properties from the IAPWS formulations:
/// IAPWS-95 (bulk fluid), IAPWS-92 (saturation), IAPWS-06 (ice Ih) and
/// IAPWS-11 (sublimation and melting curves).
///
/// Stateless; cheap to construct and share.
#[derive(Debug, Clone, Copy, Default)]
pub struct Water;

impl Water {
    pub fn new() -> Self {
        Self
    }

    fn check_saturation_range(t: f64) -> EosResult<f64> {
        EosError::check_range("saturation temperature", t, TT, TC)
    }
}

impl EquationOfState for Water {
    fn name(&self) -> &str {
        "IAPWS water"
    }

    fn pressure(&self, rho: f64, t: f64) -> EosResult<f64> {
        validate_density(rho)?;
        validate_temperature(t)?;
        EosError::finite("IAPWS-95 pressure", iapws95::pressure(rho, t))
    }

    fn enthalpy(&self, rho: f64, t: f64) -> EosResult<f64> {
        validate_density(rho)?;
        validate_temperature(t)?;
        EosError::finite("IAPWS-95 enthalpy", iapws95::enthalpy(rho, t))
    }

    fn saturation_pressure(&self, t: f64) -> EosResult<f64> {
        Self::check_saturation_range(t)?;
        Ok(iapws92::pressure(t))
    }

    fn saturated_liquid_density(&self, t: f64) -> EosResult<f64> {
        Self::check_saturation_range(t)?;
        Ok(iapws92::liquid_density(t))
    }

    fn saturated_vapor_density(&self, t: f64) -> EosResult<f64> {
        Self::check_saturation_range(t)?;
        Ok(iapws92::vapor_density(t))
    }

    fn saturated_liquid_enthalpy(&self, t: f64) -> EosResult<f64> {
        Self::check_saturation_range(t)?;
        Ok(iapws92::liquid_enthalpy(t))
    }

    fn saturated_vapor_enthalpy(&self, t: f64) -> EosResult<f64> {
        Self::check_saturation_range(t)?;
        Ok(iapws92::vapor_enthalpy(t))
    }

    fn sublimation_pressure(&self, t: f64) -> EosResult<f64> {
        EosError::check_range(
            "sublimation temperature",
            t,
            iapws11::SUBLIMATION_T_MIN,
            TT,
        )?;
        Ok(iapws11::sublimation_pressure(t))
    }

    fn melting_pressure(&self, t: f64) -> EosResult<f64> {
        EosError::check_range("melting temperature", t, iapws11::MELTING_IH_T_MIN, TT)?;
        Ok(iapws11::melting_pressure(t))
    }

    fn ice_density(&self, t: f64, p: f64) -> EosResult<f64> {
        validate_temperature(t)?;
        EosError::check_range("ice temperature", t, 0.0, TT)?;
        validate_pressure(p)?;
        EosError::check_range("ice pressure", p, 0.0, iapws06::P_MAX)?;
        EosError::finite("IAPWS-06 density", iapws06::density(t, p))
    }

    fn ice_enthalpy(&self, t: f64, p: f64) -> EosResult<f64> {
        validate_temperature(t)?;
        EosError::check_range("ice temperature", t, 0.0, TT)?;
        validate_pressure(p)?;
        EosError::check_range("ice pressure", p, 0.0, iapws06::P_MAX)?;
        EosError::finite("IAPWS-06 enthalpy", iapws06::enthalpy(t, p))
    }

    fn triple_point_temperature(&self) -> f64 {
        TT
    }

    fn critical_temperature(&self) -> f64 {
        TC
    }

    fn specific_gas_constant(&self) -> f64 {
        R
    }
}
