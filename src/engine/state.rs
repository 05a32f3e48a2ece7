//! Calculator display state.
//!
//! [`CalculatorState`] is an immutable value. Every button press produces a new
//! one through [`crate::engine::apply`]; nothing mutates a state in place.

use crate::domain::{Operator, ERROR_MARKER};

/// Display value of a freshly started or cleared calculator.
pub const INITIAL_DISPLAY: &str = "0";

/// An operator captured together with its left operand.
///
/// Keeping both in one struct means a pending operator can never exist
/// without a previous value, or the other way round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingOperation {
    pub(crate) operator: Operator,
    pub(crate) previous_value: String,
}

/// Full state of one calculator session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    pub(crate) display_value: String,
    pub(crate) expression: String,
    pub(crate) pending: Option<PendingOperation>,
}

impl CalculatorState {
    /// The initial state: display `"0"`, empty expression, nothing pending.
    ///
    /// ```
    /// use zcalc::engine::CalculatorState;
    ///
    /// let state = CalculatorState::new();
    /// assert_eq!(state.display_value(), "0");
    /// assert_eq!(state.expression(), "");
    /// assert!(state.operator().is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            display_value: INITIAL_DISPLAY.to_string(),
            expression: String::new(),
            pending: None,
        }
    }

    /// Buffer being typed, or the last computed result.
    #[must_use]
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    /// Human-readable trail of the computation so far.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Operator awaiting its right operand.
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// Left operand captured when the pending operator was pressed.
    #[must_use]
    pub fn previous_value(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.previous_value.as_str())
    }

    /// Whether the display currently shows the error marker (possibly with
    /// digits typed after it).
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display_value.starts_with(ERROR_MARKER)
    }

    /// Whether this is the initial state.
    #[cfg(test)]
    pub(crate) fn is_initial(&self) -> bool {
        *self == Self::new()
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
