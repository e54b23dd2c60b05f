use std::fmt;

use meander_core::Element;

use super::{Direction, Error};

/// Which side of a parameter's range a bound limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Lower,
    Upper,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => f.write_str("lower"),
            Self::Upper => f.write_str("upper"),
        }
    }
}

/// Immutable snapshot of the target's bounds, taken when a run starts.
#[derive(Debug, Clone)]
pub(super) struct Bounds<E> {
    min: Vec<Option<E>>,
    max: Vec<Option<E>>,
}

impl<E: Element> Bounds<E> {
    /// Validates the bounds against the starting parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if either bounds array has the wrong length, a lower
    /// bound exceeds its upper bound, or a starting parameter lies outside
    /// its bounds.
    pub(super) fn new(
        min: Vec<Option<E>>,
        max: Vec<Option<E>>,
        start: &[E],
    ) -> Result<Self, Error> {
        let expected = start.len();
        for (side, found) in [(Side::Lower, min.len()), (Side::Upper, max.len())] {
            if found != expected {
                return Err(Error::BoundsLength {
                    side,
                    expected,
                    found,
                });
            }
        }

        for (index, value) in start.iter().enumerate() {
            let (lower, upper) = (min[index].as_ref(), max[index].as_ref());
            if let (Some(lower), Some(upper)) = (lower, upper) {
                if lower > upper {
                    return Err(Error::InvertedBounds { index });
                }
            }
            let above = lower.is_none_or(|lower| value >= lower);
            let below = upper.is_none_or(|upper| value <= upper);
            if !(above && below) {
                return Err(Error::OutOfBounds { index });
            }
        }

        Ok(Self { min, max })
    }

    /// Returns the number of parameters covered.
    pub(super) fn len(&self) -> usize {
        self.min.len()
    }

    /// Returns `(min, max)` if parameter `index` is bounded on both sides.
    pub(super) fn range(&self, index: usize) -> Option<(&E, &E)> {
        self.min[index].as_ref().zip(self.max[index].as_ref())
    }

    /// Returns true if a move in `direction` may land on `candidate`.
    ///
    /// Increases are checked against the upper bound only, decreases against
    /// the lower bound only.
    pub(super) fn admits(&self, index: usize, candidate: &E, direction: Direction) -> bool {
        match direction {
            Direction::Increase => self.max[index]
                .as_ref()
                .is_none_or(|upper| candidate <= upper),
            Direction::Decrease => self.min[index]
                .as_ref()
                .is_none_or(|lower| candidate >= lower),
        }
    }
}
