use crate::Element;

/// Defines an object whose parameters an optimiser adjusts.
///
/// A target exposes a fixed-length parameter vector (indexed `0..N`), optional
/// per-parameter bounds, and a residual that is recomputed from the current
/// parameter state. Optimisers search for the parameters that minimize the
/// residual.
///
/// Targets do not need to be internally synchronized. Optimisers that run in
/// the background hold an exclusive lock around the target for every access.
pub trait Target {
    type Element: Element;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the number of parameters.
    fn parameter_count(&self) -> usize;

    /// Returns the current value of parameter `index`.
    fn parameter(&self, index: usize) -> Self::Element;

    /// Sets parameter `index`.
    ///
    /// The new value must be visible to the next call to [`Target::residual`].
    fn set_parameter(&mut self, index: usize, value: Self::Element);

    /// Recomputes the residual from the current parameters.
    ///
    /// Returns `Ok(None)` when the current parameters are infeasible. An
    /// infeasible configuration is treated as worse than any other.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residual cannot be computed at all.
    fn residual(&mut self) -> Result<Option<Self::Element>, Self::Error>;

    /// Returns a copy of the full parameter vector.
    fn parameters(&self) -> Vec<Self::Element> {
        (0..self.parameter_count())
            .map(|index| self.parameter(index))
            .collect()
    }

    /// Returns the lower bound of each parameter, `None` where unbounded.
    fn min_bounds(&self) -> Vec<Option<Self::Element>> {
        vec![None; self.parameter_count()]
    }

    /// Returns the upper bound of each parameter, `None` where unbounded.
    fn max_bounds(&self) -> Vec<Option<Self::Element>> {
        vec![None; self.parameter_count()]
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    struct Plane {
        x: [f64; 3],
    }

    impl Target for Plane {
        type Element = f64;
        type Error = Infallible;

        fn parameter_count(&self) -> usize {
            self.x.len()
        }

        fn parameter(&self, index: usize) -> f64 {
            self.x[index]
        }

        fn set_parameter(&mut self, index: usize, value: f64) {
            self.x[index] = value;
        }

        fn residual(&mut self) -> Result<Option<f64>, Infallible> {
            Ok(Some(self.x.iter().sum()))
        }
    }

    #[test]
    fn default_bounds_are_unbounded() {
        let plane = Plane { x: [1.0, 2.0, 3.0] };

        assert_eq!(plane.min_bounds(), vec![None; 3]);
        assert_eq!(plane.max_bounds(), vec![None; 3]);
    }

    #[test]
    fn parameters_reflect_updates() {
        let mut plane = Plane { x: [1.0, 2.0, 3.0] };
        plane.set_parameter(1, -4.0);

        assert_eq!(plane.parameters(), vec![1.0, -4.0, 3.0]);
        assert_eq!(plane.residual().unwrap(), Some(0.0));
    }
}
