/// Actions an observer can take during a random descent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run after the current event.
    ///
    /// The run is classified as usual, comparing the residual reached so far
    /// with the starting residual.
    StopEarly,
}
