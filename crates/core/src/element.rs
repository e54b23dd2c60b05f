use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
    str::FromStr,
};

use thiserror::Error;

/// A numeric value the optimisers can compute with.
///
/// Optimisers never look inside an element. Every step size, threshold and
/// comparison is expressed through the arithmetic operators, the ordering from
/// [`PartialOrd`], and constants obtained from [`Element::constant`]. Any
/// representation (floating point, rationals, fixed point) can therefore be
/// optimised as long as its ordering agrees with its equality.
///
/// Arithmetic consumes its operands and returns a new value; callers clone
/// when they need to keep an operand.
pub trait Element:
    Clone
    + fmt::Debug
    + PartialEq
    + PartialOrd
    + Send
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Manufactures a constant from an integer, float, or numeric string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFormat`] if the literal cannot be represented by this
    /// element type.
    fn constant<'a>(literal: impl Into<Literal<'a>>) -> Result<Self, InvalidFormat>;
}

/// A numeric literal accepted by [`Element::constant`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

impl From<i32> for Literal<'_> {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Literal<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Literal<'_> {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f32> for Literal<'_> {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for Literal<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<'a> From<&'a str> for Literal<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A literal could not be converted into an element.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid numeric literal: {literal:?}")]
pub struct InvalidFormat {
    literal: String,
}

impl InvalidFormat {
    /// Creates an error for the rejected literal text.
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    /// Returns the literal that was rejected.
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl From<Literal<'_>> for InvalidFormat {
    fn from(literal: Literal<'_>) -> Self {
        Self::new(literal.to_string())
    }
}

/// Floating-point elements.
///
/// Strings may be decimal (`"0.5"`), scientific (`"1e20"`) or a fraction of
/// two such numbers (`"-3/8"`). Literals that would produce a non-finite
/// value are rejected so the ordering stays total.
macro_rules! float_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            fn constant<'a>(literal: impl Into<Literal<'a>>) -> Result<Self, InvalidFormat> {
                let literal = literal.into();
                let value = match literal {
                    Literal::Int(value) => value as $t,
                    Literal::Float(value) => value as $t,
                    Literal::Text(text) => {
                        parse_fraction::<$t>(text).ok_or_else(|| InvalidFormat::new(text))?
                    }
                };

                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(literal.into())
                }
            }
        }
    )*};
}

float_element!(f32, f64);

/// Parses `"a"` or `"a/b"`, rejecting a zero denominator.
fn parse_fraction<F>(text: &str) -> Option<F>
where
    F: FromStr + Div<Output = F> + PartialEq + Default,
{
    match text.split_once('/') {
        Some((numerator, denominator)) => {
            let denominator: F = parse_decimal(denominator)?;
            if denominator == F::default() {
                return None;
            }
            Some(parse_decimal::<F>(numerator)? / denominator)
        }
        None => parse_decimal(text),
    }
}

/// Parses a plain decimal or scientific number.
///
/// `str::parse` also accepts words like `inf` and `NaN`, which are not
/// numeric literals here.
fn parse_decimal<F: FromStr>(text: &str) -> Option<F> {
    let text = text.trim();
    let numeric = !text.is_empty()
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));

    if numeric { text.parse().ok() } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn constants_from_numbers() {
        assert_relative_eq!(f64::constant(10).unwrap(), 10.0);
        assert_relative_eq!(f64::constant(1.5).unwrap(), 1.5);
        assert_relative_eq!(f32::constant(0.5_f32).unwrap(), 0.5);
    }

    #[test]
    fn constants_from_strings() {
        assert_relative_eq!(f64::constant("1.234").unwrap(), 1.234);
        assert_relative_eq!(f64::constant("1e20").unwrap(), 1e20);
        assert_relative_eq!(f64::constant(" -2.5E-3 ").unwrap(), -2.5e-3);
    }

    #[test]
    fn constants_from_fractions() {
        assert_relative_eq!(f64::constant("-3/8").unwrap(), -0.375);
        assert_relative_eq!(f32::constant("1/4").unwrap(), 0.25);
    }

    #[test]
    fn rejects_unparsable_text() {
        for text in ["a", "1/2b", "", "1/0", "inf", "NaN", "3/"] {
            let err = f64::constant(text).unwrap_err();
            assert_eq!(err.literal(), text, "literal {text:?}");
        }
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(f64::constant(f64::NAN).is_err());
        assert!(f64::constant("1e400").is_err());
        assert!(f32::constant(1e300).is_err());
    }

    #[test]
    fn error_message_names_the_literal() {
        let err = f64::constant("1/2b").unwrap_err();
        assert_eq!(err.to_string(), "invalid numeric literal: \"1/2b\"");
    }
}
