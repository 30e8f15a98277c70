use std::error::Error as StdError;

use thiserror::Error;

use crate::{bounds::BoundsError, config::ConfigError};

/// Errors that can occur while searching for a root.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid bounds: {0}")]
    InvalidBounds(#[from] BoundsError),

    #[error("initial guess is not finite: {value}")]
    NonFiniteGuess { value: f64 },

    #[error("initial guesses coincide at {value}")]
    CoincidentGuesses { value: f64 },

    #[error("no root in bracket: f({left})={left_residual}, f({right})={right_residual}")]
    NoBracket {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    #[error("iterate {x} left the range [{left}, {right}]")]
    OutOfRange { x: f64, left: f64, right: f64 },

    #[error("derivative is zero at x = {x}")]
    ZeroDerivative { x: f64 },

    #[error("secant through x = {x0} and x = {x1} is flat")]
    ZeroSecantSlope { x0: f64, x1: f64 },

    #[error("non-finite step from x = {x} to {x_next}")]
    NonFiniteStep { x: f64, x_next: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("non-finite derivative {derivative} at x = {x}")]
    NonFiniteDerivative { x: f64, derivative: f64 },

    #[error("function call failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    #[error("derivative call failed")]
    Derivative(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn function<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Function(Box::new(err))
    }

    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Derivative(Box::new(err))
    }

    /// Returns true if the error comes from a vanishing denominator.
    ///
    /// These are the inputs where a naive update would divide by zero:
    /// a zero derivative (Newton-Raphson) or equal function values at the
    /// two points defining a secant (regula falsi, secant).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::ZeroDerivative { .. } | Self::ZeroSecantSlope { .. }
        )
    }
}
