//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIterate`] — events that carry an iteration counter and a point
//! - [`HasResidual`] — events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootfind_core::Observer;
//! use rootfind_observers::traits::{CanStopEarly, HasIterate};
//!
//! struct Budget {
//!     max_iter: usize,
//! }
//!
//! impl<E: HasIterate, A: CanStopEarly> Observer<E, A> for Budget {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.iter() >= self.max_iter).then(A::stop_early)
//!     }
//! }
//! ```

use rootfind_solvers::{Action, BracketEvent, StepEvent};

/// An event that carries an iteration counter and the evaluated point.
pub trait HasIterate {
    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;

    /// Returns the point evaluated in this iteration.
    fn x(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual `f(x)` for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- BracketEvent ---

impl HasIterate for BracketEvent {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasResidual for BracketEvent {
    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- StepEvent ---

impl HasIterate for StepEvent {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasResidual for StepEvent {
    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- CanStopEarly ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
