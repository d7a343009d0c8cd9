//! Finite difference derivative of a scalar pressure function.

use crate::error::SolverResult;

/// Central difference `(f(x+dx) - f(x-dx)) / 2dx` with `dx = rel_step * |x|`.
///
/// `x - dx` stays positive for positive `x` and `rel_step < 1`.
pub fn central_difference<F>(f: F, x: f64, rel_step: f64) -> SolverResult<f64>
where
    F: Fn(f64) -> SolverResult<f64>,
{
    let dx = rel_step * x.abs().max(f64::MIN_POSITIVE);
    let f_plus = f(x + dx)?;
    let f_minus = f(x - dx)?;
    Ok((f_plus - f_minus) / (2.0 * dx))
}
