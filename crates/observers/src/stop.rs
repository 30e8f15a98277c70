use rootfind_core::Observer;

use crate::traits::{CanStopEarly, HasIterate, HasResidual};

/// Stops a solver once `|f(x)|` falls below a threshold.
///
/// The check only applies from iteration `min_iters` onward, which lets a
/// solver take a few steps before an early small residual ends the search.
/// Useful for open methods, whose own test looks only at step size.
#[derive(Debug, Clone, Copy)]
pub struct ResidualBelow {
    pub tolerance: f64,
    pub min_iters: usize,
}

impl ResidualBelow {
    /// Stops as soon as the residual is below `tolerance`.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            min_iters: 1,
        }
    }
}

impl<E, A> Observer<E, A> for ResidualBelow
where
    E: HasIterate + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.iter() >= self.min_iters && event.residual().abs() < self.tolerance {
            return Some(A::stop_early());
        }
        None
    }
}
