use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use meander_core::Observer;

use crate::traits::HasResidual;

/// Records the residual carried by every event.
///
/// Observers are moved into the run, so the record lives behind a shared
/// handle: keep a clone of the `History` and read it while the run is active
/// or after it ends.
#[derive(Debug)]
pub struct History<R> {
    residuals: Arc<Mutex<Vec<R>>>,
}

impl<R: Clone> History<R> {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            residuals: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a copy of the residuals recorded so far, oldest first.
    #[must_use]
    pub fn residuals(&self) -> Vec<R> {
        self.record().clone()
    }

    /// Returns the most recent residual, if any event has been seen.
    #[must_use]
    pub fn last(&self) -> Option<R> {
        self.record().last().cloned()
    }

    /// Returns the number of events recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.record().len()
    }

    /// Returns true if no event has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record().is_empty()
    }

    fn record(&self) -> MutexGuard<'_, Vec<R>> {
        self.residuals.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Clone> Default for History<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for History<R> {
    fn clone(&self) -> Self {
        Self {
            residuals: Arc::clone(&self.residuals),
        }
    }
}

impl<R, E, A> Observer<E, A> for History<R>
where
    R: Clone,
    E: HasResidual<Residual = R>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record().push(event.residual().clone());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use meander_core::Target;
    use meander_solvers::optimization::random_descent::{self, Config, State};

    /// `(a - 1)² + (b + 2)²`.
    struct Offset([f64; 2]);

    impl Target for Offset {
        type Element = f64;
        type Error = Infallible;

        fn parameter_count(&self) -> usize {
            2
        }

        fn parameter(&self, index: usize) -> f64 {
            self.0[index]
        }

        fn set_parameter(&mut self, index: usize, value: f64) {
            self.0[index] = value;
        }

        fn residual(&mut self) -> Result<Option<f64>, Infallible> {
            let [a, b] = self.0;
            Ok(Some((a - 1.0).powi(2) + (b + 2.0).powi(2)))
        }
    }

    struct Value(u8);

    impl HasResidual for Value {
        type Residual = u8;

        fn residual(&self) -> &u8 {
            &self.0
        }
    }

    #[test]
    fn clones_share_one_record() {
        let history = History::<u8>::new();
        let mut recorder = history.clone();

        let action: Option<()> = recorder.observe(&Value(4));
        assert_eq!(action, None);
        assert_eq!(history.residuals(), vec![4]);
        assert_eq!(history.last(), Some(4));
    }

    #[test]
    fn records_a_random_descent_run() {
        let history = History::<f64>::new();
        let config = Config::new(100).unwrap().with_seed(3);

        let solution = random_descent::minimize(Offset([0.0, 0.0]), &config, history.clone())
            .expect("run should start");

        assert_eq!(solution.state, State::FinishedSuccessful);
        let residuals = history.residuals();
        assert!(!history.is_empty());
        assert!(residuals.windows(2).all(|pair| pair[1] <= pair[0]));
        assert_eq!(history.last(), solution.residual);
    }
}
