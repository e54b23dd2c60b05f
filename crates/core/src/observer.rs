/// Watches an optimiser run and may steer it.
///
/// An optimiser calls [`Observer::observe`] from the thread doing the
/// search, after it has released the target lock. The event borrows values
/// owned by the search (the accepted parameter, the current residual), so an
/// observer copies what it wants to keep. Blocking inside `observe` pauses
/// the search but never blocks readers of the optimiser's state.
///
/// Returning `Some(action)` asks for an optimiser-specific action such as an
/// early stop; `None` lets the search carry on.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Handles one event, optionally returning an action for the optimiser.
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
