//! Random-order coordinate descent with adaptive steps.
//!
//! # Algorithm
//!
//! Each run repeats sweeps. A sweep visits every parameter exactly once, in
//! an order shuffled afresh for every sweep, and line-searches it:
//!
//! 1. Try `value + step`, within the upper bound. Keep it if the residual
//!    drops, grow the step by half (never past the coordinate's maximum) and
//!    start the next pass.
//! 2. Otherwise try `value - step`, within the lower bound, with the same
//!    rule.
//! 3. If neither direction helped, halve the step.
//!
//! A coordinate is done once its step falls to `1e-20` of its maximum. The
//! maximum is a tenth of the parameter's range when both bounds exist and one
//! otherwise. The run ends after `max_steps` sweeps, or earlier once a sweep
//! leaves the residual unchanged.
//!
//! Only residual comparisons are used: no gradients, and no arithmetic on
//! residuals. Candidates with an undefined residual are rejected.
//!
//! # When to Use
//!
//! Random descent is appropriate when:
//! - Derivatives are unavailable and the residual may be noisy or
//!   discontinuous
//! - Parameters have simple box bounds, or none
//! - Parameters use an exact or unusual numeric type, since the search only
//!   needs [`Element`] arithmetic
//!
//! # Limitations
//!
//! - **Local**: converges to a point no single-coordinate move can improve
//! - **Coordinate-aligned**: slow on narrow valleys not aligned with an axis
//! - **One run at a time**: an [`Optimiser`] rejects a second concurrent run
//!
//! # Lifecycle
//!
//! [`Optimiser::start_run`] moves the optimiser to [`State::Running`] and
//! returns at once. The run ends in [`State::FinishedSuccessful`] if its
//! final residual is strictly below the starting residual,
//! [`State::FinishedUnsuccessful`] otherwise, or [`State::Error`] if the
//! target failed or panicked. Cancelled runs are classified the same way as
//! completed ones.
//!
//! # Observer Events
//!
//! - [`Event::Accepted`] — a candidate improved the residual
//! - [`Event::SweepCompleted`] — every parameter was searched once
//!
//! Observers can return [`Action::StopEarly`] to end the run.
//!
//! [`Element`]: meander_core::Element

mod action;
mod bounds;
mod config;
mod error;
mod event;
mod optimiser;
mod run;
mod search;
mod shared;
mod solution;
mod state;
mod step;
mod sweep;


pub use action::Action;
pub use bounds::Side;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Direction, Event};
pub use optimiser::Optimiser;
pub use run::RunHandle;
pub use solution::Solution;
pub use state::State;

use meander_core::{Observer, Target};

/// Minimizes the residual of `target`, blocking until the run ends.
///
/// The observer receives an [`Event`] for each accepted candidate and each
/// completed sweep. See the [module docs](self) for the algorithm.
///
/// # Errors
///
/// Returns an error if the run cannot be started. Failures during the run
/// are reported as [`State::Error`] in the solution.
pub fn minimize<T, Obs>(target: T, config: &Config, observer: Obs) -> Result<Solution<T>, Error>
where
    T: Target + Send + 'static,
    Obs: for<'a> Observer<Event<'a, T::Element>, Action> + Send + 'static,
{
    let mut optimiser = Optimiser::new(target, *config);
    let state = optimiser.start_run_observed(observer)?.join();

    let residual = optimiser.current_residual();
    let sweeps = optimiser.steps_taken().unwrap_or_default();
    let target = optimiser
        .into_target()
        .map_err(|_| Error::RunInProgress)?;

    Ok(Solution {
        state,
        residual,
        sweeps,
        target,
    })
}

/// Minimizes the residual of `target` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the run cannot be started.
pub fn minimize_unobserved<T>(target: T, config: &Config) -> Result<Solution<T>, Error>
where
    T: Target + Send + 'static,
{
    minimize(target, config, ())
}
