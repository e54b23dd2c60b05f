//! Capability traits for cross-optimiser observers.
//!
//! These traits abstract over optimiser-specific event and action types,
//! enabling observers to work generically across different optimisers.
//!
//! # Example
//!
//! ```rust
//! use meander_core::Observer;
//! use meander_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct AfterEvents {
//!     limit: usize,
//!     seen: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for AfterEvents {
//!     fn observe(&mut self, _event: &E) -> Option<A> {
//!         self.seen += 1;
//!         (self.seen >= self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use meander_solvers::optimization::random_descent;

/// An event that carries a residual value.
pub trait HasResidual {
    /// The residual's element type.
    type Residual;

    /// Returns the residual for this event.
    fn residual(&self) -> &Self::Residual;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the optimiser early.
    fn stop_early() -> Self;
}

impl<E> HasResidual for random_descent::Event<'_, E> {
    type Residual = E;

    fn residual(&self) -> &E {
        random_descent::Event::residual(self)
    }
}

impl CanStopEarly for random_descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
