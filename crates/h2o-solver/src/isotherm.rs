//! Pressure as a function of density at a fixed temperature.

use crate::error::SolverResult;
use h2o_eos::EquationOfState;

/// Scalar pressure relation `p(rho)` the density solver works on.
pub trait PressureFunction {
    /// Pressure [Pa] at density `rho` [kg/m³].
    fn pressure(&self, rho: f64) -> SolverResult<f64>;

    /// Closed-form ∂p/∂ρ if available. Default returns None.
    fn derivative(&self, _rho: f64) -> Option<SolverResult<f64>> {
        None
    }
}

impl<F> PressureFunction for F
where
    F: Fn(f64) -> SolverResult<f64>,
{
    fn pressure(&self, rho: f64) -> SolverResult<f64> {
        self(rho)
    }
}

/// An equation of state bound to one temperature.
#[derive(Debug, Clone, Copy)]
pub struct Isotherm<'a, E: EquationOfState + ?Sized> {
    eos: &'a E,
    t: f64,
}

impl<'a, E: EquationOfState + ?Sized> Isotherm<'a, E> {
    pub fn new(eos: &'a E, t: f64) -> Self {
        Self { eos, t }
    }

    /// Temperature [K] this isotherm is bound to.
    pub fn temperature(&self) -> f64 {
        self.t
    }
}

impl<E: EquationOfState + ?Sized> PressureFunction for Isotherm<'_, E> {
    fn pressure(&self, rho: f64) -> SolverResult<f64> {
        Ok(self.eos.pressure(rho, self.t)?)
    }

    fn derivative(&self, rho: f64) -> Option<SolverResult<f64>> {
        self.eos
            .pressure_derivative(rho, self.t)
            .map(|res| res.map_err(Into::into))
    }
}
