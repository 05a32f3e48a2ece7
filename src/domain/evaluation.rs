//! Binary arithmetic and display formatting.
//!
//! The calculator keeps its operands as display strings. This module is the
//! boundary where those strings become numbers ([`parse_operand`]) and where an
//! arithmetic outcome becomes a display string again ([`Evaluation`]'s
//! `Display` impl).

use super::token::Operator;
use std::fmt;

/// Display value shown when a result is undefined.
pub const ERROR_MARKER: &str = "Error";

/// Outcome of applying a pending operator to its two operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// A finite numeric result.
    Number(f64),
    /// The divisor was zero.
    DivisionByZero,
    /// The result overflowed to a non-finite value.
    Overflow,
}

impl Evaluation {
    /// Applies `op` to `lhs` and `rhs`, left to right.
    ///
    /// ```
    /// use zcalc::domain::{Evaluation, Operator};
    ///
    /// assert_eq!(Evaluation::compute(7.0, Operator::Add, 3.0), Evaluation::Number(10.0));
    /// assert_eq!(Evaluation::compute(8.0, Operator::Divide, 0.0), Evaluation::DivisionByZero);
    /// ```
    #[must_use]
    pub fn compute(lhs: f64, op: Operator, rhs: f64) -> Self {
        let value = match op {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Self::DivisionByZero;
                }
                lhs / rhs
            }
        };

        if value.is_finite() {
            Self::Number(value)
        } else {
            Self::Overflow
        }
    }

    /// Whether the outcome renders as the error marker.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::Number(_))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // -0.0 would otherwise print as "-0"
            Self::Number(n) if *n == 0.0 => f.write_str("0"),
            Self::Number(n) => write!(f, "{n}"),
            Self::DivisionByZero | Self::Overflow => f.write_str(ERROR_MARKER),
        }
    }
}

/// Parses a display string as an operand.
///
/// Returns `None` for the error marker and for anything that is not a decimal
/// number. Digit strings too long for `f64` parse to infinity and surface as
/// [`Evaluation::Overflow`] once computed.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E' | '+'))
    {
        return None;
    }
    text.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_results_have_no_fraction() {
        assert_eq!(Evaluation::Number(10.0).to_string(), "10");
        assert_eq!(Evaluation::Number(-5.0).to_string(), "-5");
        assert_eq!(Evaluation::Number(42.0).to_string(), "42");
    }

    #[test]
    fn fractional_results_keep_digits() {
        assert_eq!(Evaluation::compute(5.0, Operator::Divide, 2.0).to_string(), "2.5");
        assert_eq!(
            Evaluation::compute(1.0, Operator::Divide, 3.0).to_string(),
            "0.3333333333333333"
        );
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(Evaluation::compute(0.0, Operator::Multiply, -1.0).to_string(), "0");
    }

    #[test]
    fn division_by_zero_is_error_marker() {
        let outcome = Evaluation::compute(8.0, Operator::Divide, 0.0);
        assert!(outcome.is_error());
        assert_eq!(outcome.to_string(), ERROR_MARKER);
    }

    #[test]
    fn overflow_is_error_marker() {
        let outcome = Evaluation::compute(f64::MAX, Operator::Multiply, 10.0);
        assert_eq!(outcome, Evaluation::Overflow);
        assert_eq!(outcome.to_string(), ERROR_MARKER);
    }

    #[test]
    fn parse_operand_rejects_non_numbers() {
        assert_eq!(parse_operand("42"), Some(42.0));
        assert_eq!(parse_operand("-2.5"), Some(-2.5));
        assert_eq!(parse_operand(ERROR_MARKER), None);
        assert_eq!(parse_operand("Error5"), None);
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("inf"), None);
        assert_eq!(parse_operand("NaN"), None);
    }

    #[test]
    fn huge_digit_strings_overflow_instead_of_vanishing() {
        let huge = parse_operand(&"9".repeat(400)).unwrap();
        assert!(huge.is_infinite());
        assert_eq!(Evaluation::compute(huge, Operator::Add, 1.0), Evaluation::Overflow);
    }
}
