use std::{any::Any, error::Error as StdError, io};

use meander_core::InvalidFormat;
use thiserror::Error;

use super::{bounds::Side, config::ConfigError};

/// Errors reported synchronously by the random descent optimiser.
///
/// Failures inside a background run never surface here; they move the run
/// to [`State::Error`](super::State::Error) and are logged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("an optimisation run is already in progress")]
    RunInProgress,

    #[error("the last run failed; bind a new target before starting again")]
    Faulted,

    #[error("target has no parameters")]
    EmptyTarget,

    #[error("{side} bounds have {found} entries, expected {expected}")]
    BoundsLength {
        side: Side,
        expected: usize,
        found: usize,
    },

    #[error("bounds of parameter {index} are inverted")]
    InvertedBounds { index: usize },

    #[error("parameter {index} starts outside its bounds")]
    OutOfBounds { index: usize },

    #[error("target has no residual at the starting parameters")]
    UndefinedStartingResidual,

    #[error("target error")]
    Target(#[source] Box<dyn StdError + Send + Sync>),

    #[error("invalid constant: {0}")]
    InvalidFormat(#[from] InvalidFormat),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("failed to spawn the search thread")]
    Spawn(#[source] io::Error),
}

impl Error {
    pub(super) fn target<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Target(Box::new(err))
    }
}

/// A failure inside a background run.
#[derive(Debug, Error)]
pub(super) enum Failure {
    #[error("target error: {0}")]
    Target(#[source] Box<dyn StdError + Send + Sync>),

    #[error("search panicked: {0}")]
    Panicked(String),
}

impl Failure {
    pub(super) fn target<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Target(Box::new(err))
    }

    pub(super) fn panicked(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "unknown panic payload".to_string()
        };
        Self::Panicked(message)
    }
}

#[cfg(test)]
mod tests {
    use std::panic;

    use super::*;

    #[test]
    fn panic_payloads_become_messages() {
        let payload = panic::catch_unwind(|| panic!("boom")).unwrap_err();
        let failure = Failure::panicked(payload.as_ref());
        assert_eq!(failure.to_string(), "search panicked: boom");

        let payload = panic::catch_unwind(|| panic!("code {}", 7)).unwrap_err();
        let failure = Failure::panicked(payload.as_ref());
        assert_eq!(failure.to_string(), "search panicked: code 7");
    }

    #[test]
    fn bounds_length_message() {
        let err = Error::BoundsLength {
            side: Side::Upper,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "upper bounds have 2 entries, expected 3");
    }
}
