use std::panic::{self, AssertUnwindSafe};

use meander_core::{Observer, Target};
use tracing::trace;

use super::{
    Action, Direction, Event,
    error::Failure,
    shared::lock,
    sweep::{Flow, Worker},
};

/// Result of trying one candidate.
enum Move<E> {
    /// The candidate improved the residual; the parameter now holds it.
    Accepted(E),

    /// The candidate was accepted and the observer asked to stop.
    Halted,

    /// The candidate was out of bounds, infeasible, or no better.
    Rejected,
}

impl<T, Obs> Worker<T, Obs>
where
    T: Target,
    Obs: for<'a> Observer<Event<'a, T::Element>, Action>,
{
    /// Line-searches parameter `index` with an adaptive step.
    ///
    /// Each pass tries `value + step`, then `value - step`. The first
    /// improvement is kept and grows the step, skipping the rest of the pass.
    /// A pass with no improvement halves the step. The search ends when the
    /// step falls to the coordinate's stop threshold.
    pub(super) fn search_coordinate(&mut self, index: usize) -> Result<Flow, Failure> {
        let mut value = lock(&self.shared).target.parameter(index);
        let mut step = self.steps.initial(index);
        let stop = self.steps.stop(index);

        while step > stop && !self.is_cancelled() {
            let mut accepted = false;

            for direction in [Direction::Increase, Direction::Decrease] {
                match self.try_move(index, &value, &step, direction)? {
                    Move::Accepted(candidate) => {
                        value = candidate;
                        accepted = true;
                        break;
                    }
                    Move::Halted => return Ok(Flow::Break(())),
                    Move::Rejected => {}
                }
            }

            step = if accepted {
                self.steps.grow(index, step)
            } else {
                self.steps.shrink(step)
            };
        }

        Ok(Flow::Continue(()))
    }

    /// Evaluates one candidate under the target lock.
    ///
    /// The parameter is restored to `value` unless the candidate is strictly
    /// better than the current residual, including when the target fails or
    /// panics.
    fn try_move(
        &mut self,
        index: usize,
        value: &T::Element,
        step: &T::Element,
        direction: Direction,
    ) -> Result<Move<T::Element>, Failure> {
        let candidate = match direction {
            Direction::Increase => value.clone() + step.clone(),
            Direction::Decrease => value.clone() - step.clone(),
        };
        if !self.bounds.admits(index, &candidate, direction) {
            return Ok(Move::Rejected);
        }

        {
            let mut shared = lock(&self.shared);
            shared.target.set_parameter(index, candidate.clone());

            // A panicking target must not keep the rejected candidate.
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| shared.target.residual()));
            let evaluated = match outcome {
                Ok(Ok(evaluated)) => evaluated,
                Ok(Err(err)) => {
                    shared.target.set_parameter(index, value.clone());
                    return Err(Failure::target(err));
                }
                Err(payload) => {
                    shared.target.set_parameter(index, value.clone());
                    return Err(Failure::panicked(payload.as_ref()));
                }
            };

            match evaluated {
                Some(evaluated) if evaluated < self.residual => {
                    shared.residual = Some(evaluated.clone());
                    self.residual = evaluated;
                }
                _ => {
                    shared.target.set_parameter(index, value.clone());
                    return Ok(Move::Rejected);
                }
            }
        }

        trace!(
            index,
            ?direction,
            value = ?candidate,
            residual = ?self.residual,
            "candidate accepted"
        );

        let event = Event::Accepted {
            index,
            direction,
            value: &candidate,
            residual: &self.residual,
        };
        match self.observer.observe(&event) {
            Some(Action::StopEarly) => Ok(Move::Halted),
            None => Ok(Move::Accepted(candidate)),
        }
    }
}
