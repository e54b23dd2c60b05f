use meander_core::{Element, InvalidFormat};

use super::bounds::Bounds;

/// Per-coordinate step sizes for one run.
///
/// Each coordinate's search starts at its maximum step, which is a tenth of
/// the parameter's range when both bounds exist and one otherwise. Steps
/// grow by half on success, clamped to the maximum, and halve on failure.
/// A coordinate's search ends once its step falls to `1e-20` of the maximum.
pub(super) struct StepTable<E> {
    max: Vec<E>,
    grow: E,
    shrink: E,
    stop_ratio: E,
}

impl<E: Element> StepTable<E> {
    /// Derives the maximum step of each parameter from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFormat`] if the element type cannot represent one of
    /// the search constants.
    pub(super) fn new(bounds: &Bounds<E>) -> Result<Self, InvalidFormat> {
        let divisor = E::constant(10)?;
        let unit = E::constant(1)?;

        let max = (0..bounds.len())
            .map(|index| match bounds.range(index) {
                Some((min, max)) => (max.clone() - min.clone()) / divisor.clone(),
                None => unit.clone(),
            })
            .collect();

        Ok(Self {
            max,
            grow: E::constant(1.5)?,
            shrink: E::constant(0.5)?,
            stop_ratio: E::constant("1e20")?,
        })
    }

    /// Returns the initial (and largest) step for parameter `index`.
    pub(super) fn initial(&self, index: usize) -> E {
        self.max[index].clone()
    }

    /// Returns the step below which the search of `index` stops.
    pub(super) fn stop(&self, index: usize) -> E {
        self.max[index].clone() / self.stop_ratio.clone()
    }

    /// Grows a step after a successful move.
    pub(super) fn grow(&self, index: usize, step: E) -> E {
        let grown = step * self.grow.clone();
        if grown > self.max[index] {
            self.max[index].clone()
        } else {
            grown
        }
    }

    /// Shrinks a step after both directions failed.
    pub(super) fn shrink(&self, step: E) -> E {
        step * self.shrink.clone()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn table() -> StepTable<f64> {
        let bounds = Bounds::new(
            vec![Some(-5.0), None, Some(0.0)],
            vec![Some(15.0), Some(3.0), None],
            &[0.0, 0.0, 0.0],
        )
        .unwrap();
        StepTable::new(&bounds).unwrap()
    }

    #[test]
    fn initial_steps_follow_bounds() {
        let steps = table();

        assert_relative_eq!(steps.initial(0), 2.0);
        assert_relative_eq!(steps.initial(1), 1.0);
        assert_relative_eq!(steps.initial(2), 1.0);
    }

    #[test]
    fn stop_is_tiny_fraction_of_max() {
        let steps = table();
        assert_relative_eq!(steps.stop(0), 2e-20);
    }

    #[test]
    fn growth_is_clamped_to_max() {
        let steps = table();

        assert_relative_eq!(steps.grow(0, 1.0), 1.5);
        assert_relative_eq!(steps.grow(0, 1.5), 2.0);
        assert_relative_eq!(steps.grow(1, 1.0), 1.0);
    }

    #[test]
    fn shrink_halves() {
        let steps = table();
        assert_relative_eq!(steps.shrink(0.5), 0.25);
    }

    #[test]
    fn fixed_parameter_has_zero_step() {
        let bounds = Bounds::new(vec![Some(2.0)], vec![Some(2.0)], &[2.0]).unwrap();
        let steps = StepTable::new(&bounds).unwrap();

        assert_relative_eq!(steps.initial(0), 0.0);
        assert!(steps.initial(0) <= steps.stop(0));
    }
}
