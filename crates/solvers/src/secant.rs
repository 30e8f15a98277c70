//! Secant method for scalar functions.
//!
//! Newton-Raphson with the derivative replaced by the slope of the line
//! through the two most recent iterates:
//!
//! ```text
//! x2 = x1 − f(x1)·(x1 − x0) / (f(x1) − f(x0))
//! ```
//!
//! The method needs two distinct starting points and a trusted range. Like
//! Newton-Raphson it stops with [`Error::OutOfRange`] when an iterate leaves
//! the range, converges when `|x2 − x1| < x_tol`, and reports equal function
//! values at the two points as [`Error::ZeroSecantSlope`] unless the newest
//! point is already an exact root.
//!
//! The solver emits one [`StepEvent`] per iteration, where `x` is the newest
//! iterate and `x_next` the proposed one.

use rootfind_core::{Function, Observer};

use crate::{Action, Config, Error, Solution, Status, StepEvent, bounds::Bounds, evaluate};

/// Finds a root of `f` using the secant method from two initial guesses.
///
/// # Errors
///
/// Returns an error if the config or range is invalid, if the guesses are
/// non-finite or equal, if an iterate leaves `range`, if two consecutive
/// iterates have equal residuals, or if `f` fails or returns a non-finite
/// value.
pub fn solve<F, Obs>(
    f: &F,
    range: [f64; 2],
    guesses: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<StepEvent, Action>,
{
    run(f, range, guesses, config, observer).inspect(Solution::log_outcome)
}

fn run<F, Obs>(
    f: &F,
    range: [f64; 2],
    guesses: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<StepEvent, Action>,
{
    config.validate()?;
    let bounds = Bounds::new(range)?;

    let [mut x0, mut x1] = guesses;
    if let Some(value) = guesses.into_iter().find(|x| !x.is_finite()) {
        return Err(Error::NonFiniteGuess { value });
    }
    #[allow(clippy::float_cmp)]
    if x0 == x1 {
        return Err(Error::CoincidentGuesses { value: x0 });
    }

    let mut f0 = evaluate::residual(f, x0)?;
    let mut f1 = evaluate::residual(f, x1)?;

    for iter in 1..=config.max_iters {
        #[allow(clippy::float_cmp)]
        if f1 == 0.0 {
            return Ok(Solution::new(Status::Converged, x1, f1, iter - 1));
        }

        let slope = f1 - f0;

        #[allow(clippy::float_cmp)]
        if slope == 0.0 {
            return Err(Error::ZeroSecantSlope { x0, x1 });
        }

        let x2 = x1 - f1 * (x1 - x0) / slope;
        if !x2.is_finite() {
            return Err(Error::NonFiniteStep { x: x1, x_next: x2 });
        }

        let event = StepEvent {
            iter,
            x: x1,
            residual: f1,
            x_next: x2,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, x1, f1, iter));
        }

        if !bounds.contains(x2) {
            return Err(Error::OutOfRange {
                x: x2,
                left: bounds.left(),
                right: bounds.right(),
            });
        }

        let f2 = evaluate::residual(f, x2)?;
        if config.is_step_converged(x1, x2) {
            return Ok(Solution::new(Status::Converged, x2, f2, iter));
        }

        (x0, f0) = (x1, f1);
        (x1, f1) = (x2, f2);
    }

    Ok(Solution::new(Status::MaxIters, x1, f1, config.max_iters))
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(
    f: &F,
    range: [f64; 2],
    guesses: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, range, guesses, config, ())
}
