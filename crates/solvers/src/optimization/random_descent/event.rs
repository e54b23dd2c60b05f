/// Direction of a candidate move along one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The candidate is `value + step`, checked against the upper bound.
    Increase,

    /// The candidate is `value - step`, checked against the lower bound.
    Decrease,
}

/// Events emitted by a random descent run.
///
/// Events are emitted from the background thread, after the target lock has
/// been released.
#[derive(Debug)]
pub enum Event<'a, E> {
    /// A candidate improved the residual and was kept.
    Accepted {
        /// The parameter index that moved.
        index: usize,

        /// Which way the parameter moved.
        direction: Direction,

        /// The new parameter value.
        value: &'a E,

        /// The residual at the new parameter value.
        residual: &'a E,
    },

    /// Every parameter was searched once.
    SweepCompleted {
        /// One-based sweep number.
        sweep: usize,

        /// The residual after the sweep.
        residual: &'a E,
    },
}

impl<'a, E> Event<'a, E> {
    /// Returns the current residual.
    #[must_use]
    pub fn residual(&self) -> &'a E {
        match self {
            Self::Accepted { residual, .. } | Self::SweepCompleted { residual, .. } => *residual,
        }
    }
}
