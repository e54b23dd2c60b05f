/// Lifecycle of an optimiser.
///
/// An optimiser starts out [`State::Uninitialised`], becomes
/// [`State::Running`] when a run starts, and ends the run in one of the
/// three terminal states. [`State::Error`] is sticky: only binding a new
/// target leaves it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum State {
    /// No run has been started for the bound target.
    #[default]
    Uninitialised,

    /// A background run is searching.
    Running,

    /// The run ended with a residual strictly below the starting residual.
    FinishedSuccessful,

    /// The run ended without improving on the starting residual.
    FinishedUnsuccessful,

    /// The run failed; the failure was logged and the run abandoned.
    Error,
}

impl State {
    /// Returns true if no further transition happens without a new run.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::FinishedSuccessful | Self::FinishedUnsuccessful | Self::Error
        )
    }

    /// Classifies a completed run by comparing its final residual to the
    /// residual recorded before the first sweep.
    pub(super) fn classify<E: PartialOrd>(starting: &E, last: &E) -> Self {
        if last < starting {
            Self::FinishedSuccessful
        } else {
            Self::FinishedUnsuccessful
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_uninitialised() {
        assert_eq!(State::default(), State::Uninitialised);
        assert!(!State::Uninitialised.is_terminal());
        assert!(!State::Running.is_terminal());
    }

    #[test]
    fn terminal_states() {
        assert!(State::FinishedSuccessful.is_terminal());
        assert!(State::FinishedUnsuccessful.is_terminal());
        assert!(State::Error.is_terminal());
    }

    #[test]
    fn classification_requires_strict_improvement() {
        assert_eq!(State::classify(&25.0, &0.5), State::FinishedSuccessful);
        assert_eq!(State::classify(&25.0, &25.0), State::FinishedUnsuccessful);
        assert_eq!(State::classify(&25.0, &30.0), State::FinishedUnsuccessful);
    }
}
