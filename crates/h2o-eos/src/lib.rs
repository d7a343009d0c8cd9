//! h2o-eos: water and ice equation-of-state provider for h2o-phase.
//!
//! Provides:
//! - `EquationOfState` trait: the capability set the solver and curve
//!   builders consume
//! - `Water`: reference implementation on top of the IAPWS releases
//!   - IAPWS-95 bulk fluid (pressure, enthalpy from density and temperature)
//!   - IAPWS-92 saturation auxiliary equations
//!   - IAPWS-06 ice Ih Gibbs function
//!   - IAPWS-11 sublimation and melting pressures
//!
//! # Example
//!
//! ```
//! use h2o_eos::{EquationOfState, Water};
//!
//! let water = Water::new();
//! let p = water.pressure(996.556, 300.0).unwrap();
//! assert!((p - 99_241.8).abs() < 1.0);
//! ```

pub mod constants;
pub mod error;
pub mod iapws06;
pub mod iapws11;
pub mod iapws92;
pub mod iapws95;
pub mod phase;
pub mod provider;
pub mod water;

// Re-exports for ergonomics
pub use error::{EosError, EosResult};
pub use phase::Phase;
pub use provider::EquationOfState;
pub use water::Water;
