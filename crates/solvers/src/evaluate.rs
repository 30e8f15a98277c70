use rootfind_core::Function;

use crate::Error;

/// Evaluates `f` at `x` and checks that the residual is finite.
///
/// # Errors
///
/// Returns `Error::Function` if the call fails, or
/// `Error::NonFiniteResidual` if it returns NaN or infinity.
pub(crate) fn residual<F: Function>(f: &F, x: f64) -> Result<f64, Error> {
    let residual = f.call(x).map_err(Error::function)?;
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }
    Ok(residual)
}

/// Evaluates a derivative at `x` and checks that it is finite.
///
/// # Errors
///
/// Returns `Error::Derivative` if the call fails, or
/// `Error::NonFiniteDerivative` if it returns NaN or infinity.
pub(crate) fn derivative<D: Function>(g: &D, x: f64) -> Result<f64, Error> {
    let derivative = g.call(x).map_err(Error::derivative)?;
    if !derivative.is_finite() {
        return Err(Error::NonFiniteDerivative { x, derivative });
    }
    Ok(derivative)
}
