//! Bisection for scalar functions.
//!
//! # Algorithm
//!
//! Bisection starts from an interval whose endpoint residuals have opposite
//! signs, evaluates the midpoint, and keeps the half that still contains a
//! sign change. The bracket halves every iteration, so convergence is
//! guaranteed for continuous functions.
//!
//! # Convergence
//!
//! The solver stops when either `|f(mid)| < residual_tol` or the bracket
//! half-width is below `x_tol`. An endpoint whose residual is already below
//! `residual_tol` is returned without iterating.
//!
//! # Observer Events
//!
//! One [`BracketEvent`] per iteration, carrying the bracket the midpoint was
//! taken from. Returning [`Action::StopEarly`] ends the solve at that
//! midpoint.

use rootfind_core::{Function, Observer};

use crate::{
    Action, BracketEvent, Config, Error, Solution, Status,
    bounds::{Bounds, Bracket},
    evaluate,
};

/// Finds a root of `f` in `interval` using bisection.
///
/// # Errors
///
/// Returns an error if the config or interval is invalid, if the endpoint
/// residuals share a sign, or if `f` fails or returns a non-finite value.
pub fn solve<F, Obs>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<BracketEvent, Action>,
{
    run(f, interval, config, observer).inspect(Solution::log_outcome)
}

fn run<F, Obs>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<BracketEvent, Action>,
{
    config.validate()?;
    let mut bracket = match init(f, interval, config)? {
        Init::Bracket(bracket) => bracket,
        Init::Root(solution) => return Ok(solution),
    };

    for iter in 1..=config.max_iters {
        let mid = bracket.midpoint();
        let residual = evaluate::residual(f, mid)?;

        let event = BracketEvent {
            iter,
            bracket: bracket.as_array(),
            x: mid,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Status::StoppedByObserver,
                mid,
                residual,
                iter,
            ));
        }

        if config.is_residual_converged(residual) || bracket.half_width() < config.x_tol {
            return Ok(Solution::new(Status::Converged, mid, residual, iter));
        }

        bracket.shrink(mid, residual);
    }

    let x = bracket.midpoint();
    let residual = evaluate::residual(f, x)?;
    Ok(Solution::new(Status::MaxIters, x, residual, config.max_iters))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, interval, config, ())
}

/// Outcome of evaluating both endpoints of a bracketing search.
pub(crate) enum Init {
    /// An endpoint already satisfies the residual tolerance.
    Root(Solution),
    /// The endpoints bracket a sign change.
    Bracket(Bracket),
}

/// Validates the interval and evaluates both endpoints.
///
/// Shared by the bracketing solvers.
pub(crate) fn init<F: Function>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
) -> Result<Init, Error> {
    let bounds = Bounds::new(interval)?;

    let left = bounds.left();
    let left_residual = evaluate::residual(f, left)?;
    if config.is_residual_converged(left_residual) {
        return Ok(Init::Root(Solution::new(
            Status::Converged,
            left,
            left_residual,
            0,
        )));
    }

    let right = bounds.right();
    let right_residual = evaluate::residual(f, right)?;
    if config.is_residual_converged(right_residual) {
        return Ok(Init::Root(Solution::new(
            Status::Converged,
            right,
            right_residual,
            0,
        )));
    }

    Bracket::new(bounds, left_residual, right_residual)
        .map(Init::Bracket)
        .ok_or(Error::NoBracket {
            left,
            right,
            left_residual,
            right_residual,
        })
}
