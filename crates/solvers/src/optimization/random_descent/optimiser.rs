use std::{
    fmt, mem,
    sync::{Arc, Mutex, PoisonError},
    thread,
};

use meander_core::{Observer, Target};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

use super::{
    Action, Config, Error, Event, RunHandle, State,
    bounds::Bounds,
    run::RunFlags,
    shared::{Shared, lock},
    step::StepTable,
    sweep::Worker,
};

/// Random descent optimiser bound to one target.
///
/// The optimiser owns the target behind a lock. Runs are launched in the
/// background with [`Optimiser::start_run`]; the calling thread returns
/// immediately and can poll [`Optimiser::current_state`] and
/// [`Optimiser::current_residual`] while the run mutates the target.
/// At most one run is active at a time.
pub struct Optimiser<T: Target> {
    shared: Arc<Mutex<Shared<T>>>,
    config: Config,
    run: Option<RunFlags>,
}

impl<T> Optimiser<T>
where
    T: Target + Send + 'static,
{
    /// Creates an optimiser for `target`.
    pub fn new(target: T, config: Config) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::new(target))),
            config,
            run: None,
        }
    }

    /// Replaces the target and resets the lifecycle to
    /// [`State::Uninitialised`], returning the previous target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RunInProgress`] while a run is active.
    pub fn bind_target(&mut self, target: T) -> Result<T, Error> {
        let mut shared = lock(&self.shared);
        if shared.state == State::Running {
            return Err(Error::RunInProgress);
        }

        let previous = mem::replace(&mut shared.target, target);
        shared.state = State::Uninitialised;
        shared.residual = None;
        drop(shared);

        self.run = None;
        Ok(previous)
    }

    /// Returns the config used by the next run.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the config used by the next run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RunInProgress`] while a run is active.
    pub fn set_config(&mut self, config: Config) -> Result<(), Error> {
        if self.is_running() {
            return Err(Error::RunInProgress);
        }
        self.config = config;
        Ok(())
    }

    /// Starts a background run without an observer.
    ///
    /// # Errors
    ///
    /// See [`Optimiser::start_run_observed`].
    pub fn start_run(&mut self) -> Result<RunHandle, Error> {
        self.start_run_observed(())
    }

    /// Starts a background run that reports to `observer`.
    ///
    /// Bounds, starting parameters and the starting residual are captured
    /// before this returns, so contract violations surface here. Failures
    /// after the run has started move it to [`State::Error`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a run is already active ([`Error::RunInProgress`]),
    /// - the last run failed ([`Error::Faulted`]),
    /// - the target has no parameters, its bounds are malformed, or a
    ///   starting parameter lies outside its bounds,
    /// - the starting residual is undefined or cannot be computed,
    /// - the element type cannot represent a search constant,
    /// - the search thread cannot be spawned.
    pub fn start_run_observed<Obs>(&mut self, observer: Obs) -> Result<RunHandle, Error>
    where
        Obs: for<'a> Observer<Event<'a, T::Element>, Action> + Send + 'static,
    {
        let mut shared = lock(&self.shared);
        match shared.state {
            State::Running => return Err(Error::RunInProgress),
            State::Error => return Err(Error::Faulted),
            State::Uninitialised | State::FinishedSuccessful | State::FinishedUnsuccessful => {}
        }

        let start = shared.target.parameters();
        if start.is_empty() {
            return Err(Error::EmptyTarget);
        }
        let bounds = Bounds::new(
            shared.target.min_bounds(),
            shared.target.max_bounds(),
            &start,
        )?;
        let steps = StepTable::new(&bounds)?;
        let starting_residual = shared
            .target
            .residual()
            .map_err(Error::target)?
            .ok_or(Error::UndefinedStartingResidual)?;

        info!(
            parameters = start.len(),
            max_steps = self.config.max_steps(),
            residual = ?starting_residual,
            "starting random descent run"
        );

        let flags = RunFlags::default();
        let worker = Worker {
            shared: Arc::clone(&self.shared),
            bounds,
            steps,
            starting_residual: starting_residual.clone(),
            residual: starting_residual.clone(),
            max_sweeps: self.config.max_steps(),
            rng: self
                .config
                .seed()
                .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
            flags: flags.clone(),
            observer,
        };

        // The worker cannot touch the target before this guard is released,
        // so `Running` is always recorded before the terminal state.
        let thread = thread::Builder::new()
            .name("random-descent".to_string())
            .spawn(move || worker.run())
            .map_err(Error::Spawn)?;

        shared.state = State::Running;
        shared.residual = Some(starting_residual);
        drop(shared);

        self.run = Some(flags.clone());
        Ok(RunHandle::new(flags, thread))
    }

    /// Asks the active run, if any, to stop at its next cancellation check.
    pub fn cancel(&self) {
        if let Some(flags) = &self.run {
            flags.cancel();
        }
    }

    /// Returns the lifecycle state, read under the target lock.
    #[must_use]
    pub fn current_state(&self) -> State {
        lock(&self.shared).state
    }

    /// Returns true while a run is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.current_state() == State::Running
    }

    /// Returns the best residual of the current or last run, read under the
    /// target lock.
    ///
    /// Returns `None` before the first run on the bound target.
    #[must_use]
    pub fn current_residual(&self) -> Option<T::Element> {
        lock(&self.shared).residual.clone()
    }

    /// Returns the number of sweeps started by the current or last run.
    ///
    /// Returns `None` before the first run on the bound target.
    #[must_use]
    pub fn steps_taken(&self) -> Option<usize> {
        self.run.as_ref().map(RunFlags::sweeps)
    }

    /// Returns a snapshot of the target's parameters, read under the lock.
    #[must_use]
    pub fn parameters(&self) -> Vec<T::Element> {
        lock(&self.shared).target.parameters()
    }

    /// Calls `f` with the target while holding the lock.
    pub fn with_target<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&lock(&self.shared).target)
    }

    /// Recovers the target.
    ///
    /// # Errors
    ///
    /// Returns the optimiser unchanged if a run still holds the target.
    /// Join the [`RunHandle`] first to make sure the run has let go.
    pub fn into_target(self) -> Result<T, Self> {
        let Self {
            shared,
            config,
            run,
        } = self;

        match Arc::try_unwrap(shared) {
            Ok(mutex) => {
                let shared = mutex.into_inner().unwrap_or_else(PoisonError::into_inner);
                Ok(shared.target)
            }
            Err(shared) => Err(Self {
                shared,
                config,
                run,
            }),
        }
    }
}

impl<T: Target> fmt::Debug for Optimiser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = lock(&self.shared);
        f.debug_struct("Optimiser")
            .field("state", &shared.state)
            .field("residual", &shared.residual)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
