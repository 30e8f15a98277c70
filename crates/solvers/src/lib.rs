//! Scalar root finding: bisection, regula falsi, Newton-Raphson and secant.
//!
//! Every solver drives a [`Function`] toward zero and returns a [`Solution`]
//! describing how it finished, or an [`Error`] explaining why it could not
//! start or continue.
//!
//! # Solvers
//!
//! - [`bisection`](mod@bisection) — guaranteed convergence on a bracketed interval
//! - [`regula_falsi`](mod@regula_falsi) — bracketed, splits at the secant's zero crossing
//! - [`newton_raphson`](mod@newton_raphson) — tangent steps from one guess, needs `f'`
//! - [`secant`](mod@secant) — derivative-free steps from two guesses
//!
//! Each module exposes `solve`, which accepts an [`Observer`] for monitoring
//! and early stopping, and `solve_unobserved`. The free functions at the crate
//! root run the same solvers with [`Config::default`].
//!
//! # Example
//!
//! ```
//! use rootfind_solvers::{Status, newton_raphson};
//!
//! let solution = newton_raphson(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, -10.0, 10.0, 1.0)?;
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-6);
//! # Ok::<(), rootfind_solvers::Error>(())
//! ```
//!
//! [`Function`]: rootfind_core::Function
//! [`Observer`]: rootfind_core::Observer

mod action;
mod bounds;
mod config;
mod error;
mod evaluate;
mod event;
mod solution;

pub mod bisection;
pub mod newton_raphson;
pub mod regula_falsi;
pub mod secant;

pub use action::Action;
pub use bounds::BoundsError;
pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS, DEFAULT_TOLERANCE};
pub use error::Error;
pub use event::{BracketEvent, StepEvent};
pub use solution::{Solution, Status};

use rootfind_core::Function;

/// Runs [`bisection::solve`] on `[a, b]` with the default config.
///
/// # Errors
///
/// See [`bisection::solve`].
pub fn bisection<F: Function>(f: F, a: f64, b: f64) -> Result<Solution, Error> {
    bisection::solve_unobserved(&f, [a, b], &Config::default())
}

/// Runs [`regula_falsi::solve`] on `[a, b]` with the default config.
///
/// # Errors
///
/// See [`regula_falsi::solve`].
pub fn regula_falsi<F: Function>(f: F, a: f64, b: f64) -> Result<Solution, Error> {
    regula_falsi::solve_unobserved(&f, [a, b], &Config::default())
}

/// Runs [`newton_raphson::solve`] from `initial_guess`, trusting `[a, b]`,
/// with the default config.
///
/// # Errors
///
/// See [`newton_raphson::solve`].
pub fn newton_raphson<F: Function, D: Function>(
    f: F,
    derivative: D,
    a: f64,
    b: f64,
    initial_guess: f64,
) -> Result<Solution, Error> {
    newton_raphson::solve_unobserved(&f, &derivative, [a, b], initial_guess, &Config::default())
}

/// Runs [`secant::solve`] from `guess1` and `guess2`, trusting `[a, b]`,
/// with the default config.
///
/// # Errors
///
/// See [`secant::solve`].
pub fn secant<F: Function>(
    f: F,
    a: f64,
    b: f64,
    guess1: f64,
    guess2: f64,
) -> Result<Solution, Error> {
    secant::solve_unobserved(&f, [a, b], [guess1, guess2], &Config::default())
}
