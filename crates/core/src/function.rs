use std::convert::Infallible;

/// A scalar function whose roots a solver searches for.
///
/// Functions must be deterministic, always producing the same value for a
/// given `x`. Solvers rely on this to re-evaluate points freely and to make
/// repeated solves reproducible.
///
/// Every `Fn(f64) -> f64` closure is a `Function` that never fails. Types
/// with their own failure modes implement the trait directly, and fallible
/// closures can be wrapped in [`Fallible`].
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Each function defines its own `Error` type to represent domain-specific failures.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapts a closure returning `Result<f64, E>` into a [`Function`].
///
/// ```
/// use rootfind_core::{Fallible, Function};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("negative input")]
/// struct Negative;
///
/// let sqrt = Fallible(|x: f64| if x < 0.0 { Err(Negative) } else { Ok(x.sqrt()) });
/// assert!(sqrt.call(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Function for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}
