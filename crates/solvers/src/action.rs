/// Control actions an observer can return to a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the point just evaluated.
    StopEarly,
}
