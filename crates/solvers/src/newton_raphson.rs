//! Newton-Raphson for scalar functions with a known derivative.
//!
//! # Algorithm
//!
//! Starting from an initial guess, each iteration follows the tangent line
//! to its zero:
//!
//! ```text
//! x_next = x − f(x) / f'(x)
//! ```
//!
//! No bracket is required, but the caller supplies a trusted range. An
//! iterate that leaves the range ends the solve with [`Error::OutOfRange`],
//! which guards against divergence.
//!
//! # Convergence
//!
//! Converged when the step `|x_next − x|` is below `x_tol`; the solution
//! reports `x_next`. An iterate with an exact zero residual is returned as is,
//! before the derivative is consulted. Otherwise a vanishing derivative is
//! reported as [`Error::ZeroDerivative`].
//!
//! # Observer Events
//!
//! One [`StepEvent`] per iteration, emitted after the step is computed and
//! before the range check.

use rootfind_core::{Function, Observer};

use crate::{Action, Config, Error, Solution, Status, StepEvent, bounds::Bounds, evaluate};

/// Finds a root of `f` using Newton-Raphson iteration from `guess`.
///
/// `derivative` must evaluate `f'(x)`. Every iterate must stay inside
/// `range`.
///
/// # Errors
///
/// Returns an error if the config, range or guess is invalid, if an iterate
/// leaves `range`, if the derivative vanishes, or if either function fails
/// or returns a non-finite value.
pub fn solve<F, D, Obs>(
    f: &F,
    derivative: &D,
    range: [f64; 2],
    guess: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
    Obs: Observer<StepEvent, Action>,
{
    run(f, derivative, range, guess, config, observer).inspect(Solution::log_outcome)
}

fn run<F, D, Obs>(
    f: &F,
    derivative: &D,
    range: [f64; 2],
    guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
    Obs: Observer<StepEvent, Action>,
{
    config.validate()?;
    let bounds = Bounds::new(range)?;
    if !guess.is_finite() {
        return Err(Error::NonFiniteGuess { value: guess });
    }

    let mut x = guess;
    for iter in 1..=config.max_iters {
        let residual = evaluate::residual(f, x)?;
        #[allow(clippy::float_cmp)]
        if residual == 0.0 {
            return Ok(Solution::new(Status::Converged, x, residual, iter - 1));
        }

        let slope = evaluate::derivative(derivative, x)?;

        #[allow(clippy::float_cmp)]
        if slope == 0.0 {
            return Err(Error::ZeroDerivative { x });
        }

        let x_next = x - residual / slope;
        if !x_next.is_finite() {
            return Err(Error::NonFiniteStep { x, x_next });
        }

        let event = StepEvent {
            iter,
            x,
            residual,
            x_next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Status::StoppedByObserver,
                x,
                residual,
                iter,
            ));
        }

        if !bounds.contains(x_next) {
            return Err(Error::OutOfRange {
                x: x_next,
                left: bounds.left(),
                right: bounds.right(),
            });
        }

        if config.is_step_converged(x, x_next) {
            let residual = evaluate::residual(f, x_next)?;
            return Ok(Solution::new(Status::Converged, x_next, residual, iter));
        }

        x = x_next;
    }

    let residual = evaluate::residual(f, x)?;
    Ok(Solution::new(Status::MaxIters, x, residual, config.max_iters))
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function, D: Function>(
    f: &F,
    derivative: &D,
    range: [f64; 2],
    guess: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, derivative, range, guess, config, ())
}
