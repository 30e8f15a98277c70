/// A hook called by a root finder once per iteration.
///
/// `E` is the event the solver reports (its bracket, iterate and residual)
/// and `A` is the set of requests the solver understands. Returning `None`
/// leaves the iteration alone; returning `Some` asks the solver to act on
/// it, for example to stop with the current estimate.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never intervenes.
pub trait Observer<E, A> {
    /// Inspects one iteration and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
