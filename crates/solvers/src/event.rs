/// Iteration event emitted by the bracketing solvers.
///
/// Emitted once per iteration after the new point has been evaluated and
/// before the bracket is narrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketEvent {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Bracket the point was chosen from.
    pub bracket: [f64; 2],
    /// The evaluated point (midpoint or false position).
    pub x: f64,
    /// Residual at `x`.
    pub residual: f64,
}

/// Iteration event emitted by the open solvers.
///
/// Emitted once per iteration after the next iterate has been computed and
/// before it is checked against the trusted range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepEvent {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Current iterate.
    pub x: f64,
    /// Residual at `x`.
    pub residual: f64,
    /// Proposed next iterate.
    pub x_next: f64,
}

impl StepEvent {
    /// Returns the size of the proposed step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.x_next - self.x
    }
}
