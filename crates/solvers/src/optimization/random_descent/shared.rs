use std::sync::{Mutex, MutexGuard, PoisonError};

use meander_core::Target;

use super::State;

/// Everything guarded by the target lock.
///
/// The lifecycle state and the current residual live next to the target so
/// that inspecting them takes the same lock the search holds while it
/// evaluates candidates.
pub(super) struct Shared<T: Target> {
    pub(super) target: T,
    pub(super) state: State,
    pub(super) residual: Option<T::Element>,
}

impl<T: Target> Shared<T> {
    pub(super) fn new(target: T) -> Self {
        Self {
            target,
            state: State::Uninitialised,
            residual: None,
        }
    }
}

/// Locks the shared target.
///
/// A panic inside the target poisons the lock. The run that panicked records
/// [`State::Error`], so the data stays meaningful and the poison is ignored.
pub(super) fn lock<T: Target>(shared: &Mutex<Shared<T>>) -> MutexGuard<'_, Shared<T>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}
