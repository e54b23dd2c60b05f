use meander_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// Stops a run as soon as an event reports a residual below a threshold.
///
/// Only residual comparisons are used, so any residual type with a partial
/// order works. Incomparable residuals never trigger a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopBelow<R> {
    threshold: R,
}

impl<R> StopBelow<R> {
    /// Creates an observer that stops once the residual is below `threshold`.
    pub fn new(threshold: R) -> Self {
        Self { threshold }
    }

    /// Returns the threshold.
    #[must_use]
    pub fn threshold(&self) -> &R {
        &self.threshold
    }
}

impl<R, E, A> Observer<E, A> for StopBelow<R>
where
    R: PartialOrd,
    E: HasResidual<Residual = R>,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*event.residual() < self.threshold).then(A::stop_early)
    }
}
