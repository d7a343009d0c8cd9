//! Single-unknown density solver.
//!
//! Given a target pressure and a temperature, finds the density that
//! satisfies the equation of state `p(rho, T) = p_target` by Newton's method
//! seeded with a physically informed estimate (saturation density, ideal
//! gas, ...). One scalar unknown per call; there is no vector solve.

pub mod derivative;
pub mod error;
pub mod isotherm;
pub mod newton;

pub use error::{ConvergenceFailure, SolverError, SolverResult};
pub use isotherm::{Isotherm, PressureFunction};
pub use newton::{DensitySolution, DensitySolverConfig, solve_density, solve_density_at};
