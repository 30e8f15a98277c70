//! Regula falsi (false position) for scalar functions.
//!
//! Like bisection, regula falsi keeps a bracket with a sign change, but it
//! splits the bracket where the secant line through both endpoints crosses
//! zero instead of at the midpoint:
//!
//! ```text
//! c = (a·f(b) − b·f(a)) / (f(b) − f(a))
//! ```
//!
//! evaluated as `a − f(a)·((b − a) / (f(b) − f(a)))` so wide brackets do not
//! overflow.
//!
//! The bracket width is not guaranteed to shrink toward zero (one endpoint
//! can stay fixed), so convergence is judged on the residual alone:
//! `|f(c)| < residual_tol`.
//!
//! The solver emits one [`BracketEvent`] per iteration.

use rootfind_core::{Function, Observer};

use crate::{
    Action, BracketEvent, Config, Error, Solution, Status,
    bisection::{Init, init},
    evaluate,
};

/// Finds a root of `f` in `interval` using regula falsi.
///
/// # Errors
///
/// Returns an error if the config or interval is invalid, if the endpoint
/// residuals share a sign, if the secant through the bracket is flat or
/// yields a non-finite point, or if `f` fails or returns a non-finite value.
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

    let (mut x, mut residual) = bracket.best_endpoint();

    for iter in 1..=config.max_iters {
        let [left, right] = bracket.as_array();
        let c = bracket.false_position().ok_or(Error::ZeroSecantSlope {
            x0: left,
            x1: right,
        })?;
        if !c.is_finite() {
            return Err(Error::NonFiniteStep { x, x_next: c });
        }
        x = c;
        residual = evaluate::residual(f, x)?;

        let event = BracketEvent {
            iter,
            bracket: [left, right],
            x,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Status::StoppedByObserver,
                x,
                residual,
                iter,
            ));
        }

        if config.is_residual_converged(residual) {
            return Ok(Solution::new(Status::Converged, x, residual, iter));
        }

        bracket.shrink(x, residual);
    }

    Ok(Solution::new(Status::MaxIters, x, residual, config.max_iters))
}

/// Runs regula falsi without observation.
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
