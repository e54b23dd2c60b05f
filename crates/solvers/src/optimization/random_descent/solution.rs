use meander_core::Target;

use super::State;

/// The result of a blocking random descent run.
#[derive(Debug)]
pub struct Solution<T: Target> {
    /// Terminal state of the run.
    pub state: State,

    /// Best residual reached.
    pub residual: Option<T::Element>,

    /// Number of sweeps started.
    pub sweeps: usize,

    /// The target, holding the best parameters found.
    pub target: T,
}
