//! The calculator transition function.
//!
//! Evaluation is strictly left to right with a single pending operator. Rules
//! by token kind:
//!
//! - `C` resets to the initial state.
//! - `=` applies the pending operator when both operands parse, appends
//!   `" <right> = <result>"` to the expression, and always drops the pending
//!   operator.
//! - An operator is captured only when none is pending; otherwise it is ignored.
//! - A digit replaces a lone `"0"` or is appended to the display. Digit
//!   payloads above 9 are ignored.

use super::state::{CalculatorState, PendingOperation, INITIAL_DISPLAY};
use crate::domain::{parse_operand, Evaluation, Operator, Result, Token};

/// Produces the state that follows `state` when `token` is pressed.
///
/// Total over every state and token; never panics.
///
/// ```
/// use zcalc::domain::Token;
/// use zcalc::engine::{apply, CalculatorState};
///
/// let state = "7+3="
///     .chars()
///     .filter_map(Token::from_char)
///     .fold(CalculatorState::new(), |s, t| apply(&s, t));
///
/// assert_eq!(state.display_value(), "10");
/// assert_eq!(state.expression(), " 7 + 3 = 10");
/// ```
#[must_use]
pub fn apply(state: &CalculatorState, token: Token) -> CalculatorState {
    let next = match token {
        Token::Clear => CalculatorState::new(),
        Token::Equals => equals(state),
        Token::Operator(op) => operator(state, op),
        Token::Digit(d) => digit(state, d),
    };

    tracing::trace!(
        token = %token,
        display = %next.display_value,
        expression = %next.expression,
        pending = ?next.operator(),
        "calculator transition"
    );

    next
}

/// Parses `label` and applies it.
///
/// # Errors
///
/// Returns [`crate::domain::CalculatorError::UnknownToken`] if `label` is not
/// one of the sixteen keypad labels. `state` is untouched in that case.
pub fn apply_label(state: &CalculatorState, label: &str) -> Result<CalculatorState> {
    let token: Token = label.parse()?;
    Ok(apply(state, token))
}

fn equals(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    let Some(pending) = next.pending.take() else {
        return next;
    };

    let (Some(lhs), Some(rhs)) = (
        parse_operand(&pending.previous_value),
        parse_operand(&state.display_value),
    ) else {
        tracing::debug!(
            previous = %pending.previous_value,
            current = %state.display_value,
            "operand unavailable, dropping pending operator"
        );
        return next;
    };

    let outcome = Evaluation::compute(lhs, pending.operator, rhs);
    if outcome.is_error() {
        tracing::debug!(?outcome, lhs, rhs, "calculation produced error marker");
    }

    let rendered = outcome.to_string();
    next.expression.push(' ');
    next.expression.push_str(&state.display_value);
    next.expression.push_str(" = ");
    next.expression.push_str(&rendered);
    next.display_value = rendered;
    next
}

fn operator(state: &CalculatorState, op: Operator) -> CalculatorState {
    if state.pending.is_some() {
        return state.clone();
    }

    let mut next = state.clone();
    next.expression.push(' ');
    next.expression.push_str(&state.display_value);
    next.expression.push(' ');
    next.expression.push(op.symbol());
    next.pending = Some(PendingOperation {
        operator: op,
        previous_value: std::mem::replace(&mut next.display_value, INITIAL_DISPLAY.to_string()),
    });
    next
}

fn digit(state: &CalculatorState, d: u8) -> CalculatorState {
    let Some(c) = char::from_digit(u32::from(d), 10) else {
        tracing::warn!(digit = d, "digit out of range, ignoring");
        return state.clone();
    };

    let mut next = state.clone();
    if next.display_value == INITIAL_DISPLAY {
        next.display_value.clear();
    }
    next.display_value.push(c);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalculatorError, ERROR_MARKER};

    fn run(labels: &[&str]) -> CalculatorState {
        labels.iter().fold(CalculatorState::new(), |s, l| {
            apply_label(&s, l).unwrap()
        })
    }

    #[test]
    fn digits_concatenate_with_leading_zero_suppressed() {
        assert_eq!(run(&["5", "0"]).display_value(), "50");
        assert_eq!(run(&["0", "0", "7"]).display_value(), "7");
        assert_eq!(run(&["1", "2", "3"]).display_value(), "123");
    }

    #[test]
    fn addition_builds_expression_trail() {
        let state = run(&["7", "+", "3", "="]);
        assert_eq!(state.display_value(), "10");
        assert_eq!(state.expression(), " 7 + 3 = 10");
        assert!(state.operator().is_none());
    }

    #[test]
    fn subtraction_and_multiplication() {
        assert_eq!(run(&["9", "-", "4", "="]).display_value(), "5");
        assert_eq!(run(&["6", "*", "7", "="]).display_value(), "42");
        assert_eq!(run(&["4", "-", "9", "="]).display_value(), "-5");
    }

    #[test]
    fn division_by_zero_shows_marker_until_clear() {
        let state = run(&["8", "/", "0", "="]);
        assert_eq!(state.display_value(), ERROR_MARKER);
        assert_eq!(state.expression(), " 8 / 0 = Error");
        assert!(state.is_error());

        let cleared = apply(&state, Token::Clear);
        assert_eq!(cleared.display_value(), "0");
        assert!(cleared.is_initial());
    }

    #[test]
    fn operator_press_captures_left_operand() {
        let state = run(&["1", "2", "+"]);
        assert_eq!(state.display_value(), "0");
        assert_eq!(state.expression(), " 12 +");
        assert_eq!(state.operator(), Some(Operator::Add));
        assert_eq!(state.previous_value(), Some("12"));
    }

    #[test]
    fn second_operator_is_ignored() {
        let once = run(&["5", "+"]);
        let twice = apply_label(&once, "*").unwrap();
        assert_eq!(once, twice);

        let state = run(&["5", "+", "+", "3", "="]);
        assert_eq!(state.display_value(), "8");
        assert_eq!(state.expression(), " 5 + 3 = 8");
    }

    #[test]
    fn equals_without_operator_is_noop() {
        let state = run(&["4", "2"]);
        let after = apply(&state, Token::Equals);
        assert_eq!(after, state);
    }

    #[test]
    fn repeated_equals_does_not_recompute() {
        let state = run(&["6", "*", "7", "="]);
        let again = apply(&state, Token::Equals);
        assert_eq!(again.display_value(), "42");
        assert_eq!(again.expression(), state.expression());
    }

    #[test]
    fn digits_after_result_extend_it() {
        let state = run(&["7", "+", "3", "=", "5"]);
        assert_eq!(state.display_value(), "105");
        assert_eq!(state.expression(), " 7 + 3 = 10");
    }

    #[test]
    fn chaining_after_result_starts_from_result() {
        let state = run(&["7", "+", "3", "=", "*", "2", "="]);
        assert_eq!(state.display_value(), "20");
        assert_eq!(state.expression(), " 7 + 3 = 10 10 * 2 = 20");
    }

    #[test]
    fn error_marker_is_opaque_text() {
        let state = run(&["8", "/", "0", "=", "5"]);
        assert_eq!(state.display_value(), "Error5");

        let state = apply_label(&state, "+").unwrap();
        assert_eq!(state.previous_value(), Some("Error5"));
        assert_eq!(state.display_value(), "0");

        let state = run_from(state, &["3", "="]);
        assert_eq!(state.display_value(), "3");
        assert!(state.operator().is_none());
        assert!(!state.expression().ends_with("= 3"));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let state = run(&["4"]);
        let err = apply_label(&state, "%").unwrap_err();
        assert!(matches!(err, CalculatorError::UnknownToken(_)));
    }

    #[test]
    fn huge_operands_overflow_to_error_marker() {
        let mut state = CalculatorState::new();
        for _ in 0..310 {
            state = apply(&state, Token::Digit(9));
        }
        let state = run_from(state, &["+", "1", "="]);
        assert!(state.operator().is_none());
        assert_eq!(state.display_value(), ERROR_MARKER);
        assert!(state.expression().ends_with(" + 1 = Error"));
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let state = run(&["4"]);
        assert_eq!(apply(&state, Token::Digit(42)), state);
        assert_eq!(apply(&CalculatorState::new(), Token::Digit(10)), CalculatorState::new());
    }

    fn run_from(state: CalculatorState, labels: &[&str]) -> CalculatorState {
        labels.iter().fold(state, |s, l| apply_label(&s, l).unwrap())
    }
}
