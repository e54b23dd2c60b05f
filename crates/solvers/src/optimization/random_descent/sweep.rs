use std::{
    ops::ControlFlow,
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Mutex},
};

use meander_core::{Observer, Target};
use rand::{rngs::StdRng, seq::SliceRandom};
use tracing::{debug, error, info};

use super::{
    Action, Event, State,
    bounds::Bounds,
    error::Failure,
    run::RunFlags,
    shared::{Shared, lock},
    step::StepTable,
};

/// The background half of a run.
///
/// Owns everything the search needs for one run. It is dropped when the
/// run ends, whatever the outcome, releasing the bounds snapshot and step
/// table.
pub(super) struct Worker<T: Target, Obs> {
    pub(super) shared: Arc<Mutex<Shared<T>>>,
    pub(super) bounds: Bounds<T::Element>,
    pub(super) steps: StepTable<T::Element>,
    pub(super) starting_residual: T::Element,
    pub(super) residual: T::Element,
    pub(super) max_sweeps: usize,
    pub(super) rng: StdRng,
    pub(super) flags: RunFlags,
    pub(super) observer: Obs,
}

impl<T, Obs> Worker<T, Obs>
where
    T: Target,
    Obs: for<'a> Observer<Event<'a, T::Element>, Action>,
{
    /// Runs the search to completion and records the terminal state.
    pub(super) fn run(mut self) -> State {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.sweep()));

        let state = match outcome {
            Ok(Ok(())) => State::classify(&self.starting_residual, &self.residual),
            Ok(Err(failure)) => {
                error!(%failure, "random descent run failed");
                State::Error
            }
            Err(payload) => {
                let failure = Failure::panicked(payload.as_ref());
                error!(%failure, "random descent run failed");
                State::Error
            }
        };

        lock(&self.shared).state = state;
        info!(
            ?state,
            sweeps = self.flags.sweeps(),
            residual = ?self.residual,
            "random descent run finished"
        );
        state
    }

    /// Repeats shuffled sweeps until the budget is spent, a sweep leaves the
    /// residual unchanged, the observer stops the run, or it is cancelled.
    fn sweep(&mut self) -> Result<(), Failure> {
        let mut order: Vec<usize> = (0..self.bounds.len()).collect();

        for sweep in 1..=self.max_sweeps {
            if self.flags.is_cancelled() {
                debug!(sweep, "random descent run cancelled");
                return Ok(());
            }
            self.flags.record_sweep(sweep);

            let before = self.residual.clone();
            order.shuffle(&mut self.rng);
            for &index in &order {
                if self.search_coordinate(index)?.is_break() {
                    debug!(sweep, index, "random descent run stopped by observer");
                    return Ok(());
                }
            }

            if self.flags.is_cancelled() {
                debug!(sweep, "random descent run cancelled");
                return Ok(());
            }

            let event = Event::SweepCompleted {
                sweep,
                residual: &self.residual,
            };
            if let Some(Action::StopEarly) = self.observer.observe(&event) {
                debug!(sweep, "random descent run stopped by observer");
                return Ok(());
            }

            if self.residual == before {
                debug!(sweep, residual = ?self.residual, "sweep made no progress");
                return Ok(());
            }
            debug!(sweep, residual = ?self.residual, "sweep completed");
        }

        Ok(())
    }

    pub(super) fn is_cancelled(&self) -> bool {
        self.flags.is_cancelled()
    }
}

/// Outcome of searching one coordinate.
pub(super) type Flow = ControlFlow<()>;
