/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    ///
    /// The solution still carries the last estimate; whether it is good
    /// enough is left to the caller.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root-finding solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub x: f64,

    /// Residual `f(x)` at the reported estimate.
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(crate) const fn new(status: Status, x: f64, residual: f64, iters: usize) -> Self {
        Self {
            status,
            x,
            residual,
            iters,
        }
    }

    /// Logs how the solve ended.
    ///
    /// Called once per `solve`, on the returned solution.
    pub(crate) fn log_outcome(&self) {
        let Self {
            status,
            x,
            residual,
            iters,
        } = *self;
        log::debug!(
            "solver finished: {status:?} at x = {x} (f(x) = {residual}) after {iters} iterations"
        );
        if status == Status::MaxIters {
            log::warn!("iteration limit of {iters} reached; returning last estimate x = {x}");
        }
    }

    /// Returns true if the solver met its tolerances.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
