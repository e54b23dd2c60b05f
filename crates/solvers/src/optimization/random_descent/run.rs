use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    thread::JoinHandle,
};

use super::State;

/// Flags shared between an optimiser and the run it launched.
#[derive(Debug, Clone, Default)]
pub(super) struct RunFlags {
    cancel: Arc<AtomicBool>,
    sweeps: Arc<AtomicUsize>,
}

impl RunFlags {
    pub(super) fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub(super) fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    pub(super) fn record_sweep(&self, sweep: usize) {
        self.sweeps.store(sweep, Ordering::Relaxed);
    }

    pub(super) fn sweeps(&self) -> usize {
        self.sweeps.load(Ordering::Relaxed)
    }
}

/// Handle to a background random descent run.
///
/// Dropping the handle detaches the run; it keeps searching until it
/// finishes or the optimiser cancels it.
#[derive(Debug)]
pub struct RunHandle {
    flags: RunFlags,
    thread: JoinHandle<State>,
}

impl RunHandle {
    pub(super) fn new(flags: RunFlags, thread: JoinHandle<State>) -> Self {
        Self { flags, thread }
    }

    /// Asks the run to stop at its next cancellation check.
    ///
    /// The run still ends in a terminal state, classified by the residual it
    /// reached.
    pub fn cancel(&self) {
        self.flags.cancel();
    }

    /// Returns true once the background thread has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Returns the number of sweeps started so far.
    #[must_use]
    pub fn sweeps(&self) -> usize {
        self.flags.sweeps()
    }

    /// Waits for the run to end and returns its final state.
    pub fn join(self) -> State {
        self.thread.join().unwrap_or(State::Error)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn flags_are_shared_between_clones() {
        let flags = RunFlags::default();
        let seen = flags.clone();

        flags.record_sweep(3);
        flags.cancel();

        assert!(seen.is_cancelled());
        assert_eq!(seen.sweeps(), 3);
    }

    #[test]
    fn join_returns_thread_state() {
        let handle = RunHandle::new(
            RunFlags::default(),
            thread::spawn(|| State::FinishedSuccessful),
        );
        assert_eq!(handle.join(), State::FinishedSuccessful);
    }

    #[test]
    fn panicked_thread_joins_as_error() {
        let handle = RunHandle::new(
            RunFlags::default(),
            thread::spawn(|| -> State { panic!("lost") }),
        );
        assert_eq!(handle.join(), State::Error);
    }
}
