//! Keypad tokens.
//!
//! A [`Token`] is one logical button press: a digit, one of the four binary
//! operators, equals, or clear. The keypad emits exactly sixteen labels and
//! [`Token::from_str`] accepts exactly those.

use super::error::{CalculatorError, Result};
use std::fmt;
use std::str::FromStr;

/// Binary operator awaiting its right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Keypad label of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Maps a keypad symbol to an operator.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single logical button press consumed by the calculator engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A decimal digit. Build it with [`Token::digit`]; the engine ignores
    /// payloads above 9.
    Digit(u8),
    Operator(Operator),
    Equals,
    Clear,
}

impl Token {
    /// Builds a digit token, rejecting values above 9.
    #[must_use]
    pub const fn digit(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self::Digit(value))
        } else {
            None
        }
    }

    /// Maps a single keypad character to a token.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(Self::digit),
            '=' => Some(Self::Equals),
            'C' => Some(Self::Clear),
            _ => Operator::from_symbol(c).map(Self::Operator),
        }
    }

    /// The label printed on the key that emits this token.
    #[must_use]
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
        }
    }
}

impl FromStr for Token {
    type Err = CalculatorError;

    /// Parses a raw keypad label.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::UnknownToken`] for anything other than one of
    /// the sixteen keypad labels.
    ///
    /// ```
    /// use zcalc::domain::{Operator, Token};
    ///
    /// assert_eq!("7".parse::<Token>().unwrap(), Token::Digit(7));
    /// assert_eq!("/".parse::<Token>().unwrap(), Token::Operator(Operator::Divide));
    /// assert!("42".parse::<Token>().is_err());
    /// ```
    fn from_str(label: &str) -> Result<Self> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| CalculatorError::UnknownToken(label.to_string()))
            }
            _ => Err(CalculatorError::UnknownToken(label.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYPAD: [&str; 16] = [
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "C", "=", "+", "-", "*", "/",
    ];

    #[test]
    fn every_keypad_label_parses_and_round_trips() {
        for label in KEYPAD {
            let token: Token = label.parse().unwrap();
            assert_eq!(token.label(), label);
        }
    }

    #[test]
    fn rejects_labels_outside_keypad() {
        for label in ["", "c", "10", "x", "%", " ", "=="] {
            assert!(matches!(
                label.parse::<Token>(),
                Err(CalculatorError::UnknownToken(ref l)) if l == label
            ));
        }
    }

    #[test]
    fn digit_constructor_bounds() {
        assert_eq!(Token::digit(9), Some(Token::Digit(9)));
        assert_eq!(Token::digit(10), None);
    }

    #[test]
    fn operator_symbols() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }
}
