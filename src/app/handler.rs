//! Event handling and state transition logic.
//!
//! The handler sits between the plugin runtime and the calculator engine:
//!
//! 1. Events arrive from the plugin runtime (`main.rs`)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Button presses are fed through [`crate::engine::apply`]
//! 4. Actions are collected and returned for execution
//!
//! Events are handled one at a time on the plugin thread; each call completes
//! before the next event is accepted.
//!
//! # Example
//!
//! ```rust
//! use zcalc::app::{handle_event, AppState, Event};
//! use zcalc::domain::Token;
//! use zcalc::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! for c in "6*7=".chars() {
//!     let token = Token::from_char(c).unwrap();
//!     handle_event(&mut state, &Event::Press(token))?;
//! }
//! assert_eq!(state.display_value(), "42");
//! # Ok::<(), zcalc::CalculatorError>(())
//! ```

use crate::app::keypad::KeypadLayout;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Token;
use crate::engine;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Events triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A logical keypad button press.
    Press(Token),

    /// A left mouse click inside the plugin pane.
    ///
    /// Coordinates are 0-indexed pane coordinates as reported by Zellij. The
    /// pane size is the one the keypad was last rendered at, so the click is
    /// resolved against the geometry the user actually saw.
    Click {
        line: usize,
        column: usize,
        rows: usize,
        cols: usize,
    },

    /// Hides the plugin pane.
    CloseFocus,
}

impl Event {
    /// Maps a Zellij key press to an event.
    ///
    /// Only unmodified keys count; Shift is allowed because `+` and `*` need it
    /// on most layouts. Enter is equals, Esc and Delete clear, and characters go
    /// through [`Event::from_char`].
    #[must_use]
    pub fn from_key(key: &KeyWithModifier) -> Option<Self> {
        if key.key_modifiers.iter().any(|m| *m != KeyModifier::Shift) {
            return None;
        }

        match key.bare_key {
            BareKey::Enter => Some(Self::Press(Token::Equals)),
            BareKey::Esc | BareKey::Delete => Some(Self::Press(Token::Clear)),
            BareKey::Char(c) => Self::from_char(c),
            _ => None,
        }
    }

    /// Maps a typed character to an event.
    ///
    /// Keypad labels map to themselves; `x` is an alias for `*`, `c` for `C`,
    /// and `q` closes the pane.
    ///
    /// ```rust
    /// use zcalc::app::Event;
    /// use zcalc::domain::{Operator, Token};
    ///
    /// assert_eq!(Event::from_char('x'), Some(Event::Press(Token::Operator(Operator::Multiply))));
    /// assert_eq!(Event::from_char('q'), Some(Event::CloseFocus));
    /// assert_eq!(Event::from_char('z'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'q' => Some(Self::CloseFocus),
            'x' | 'X' => Some(Self::Press(Token::Operator(crate::domain::Operator::Multiply))),
            'c' => Some(Self::Press(Token::Clear)),
            _ => Token::from_char(c).map(Self::Press),
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI changed and the side effects the
/// plugin runtime has to perform, in order.
///
/// # Errors
///
/// The current event set cannot fail; the `Result` keeps the contract shared
/// with the plugin shim, which logs and drops any error.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Press(token) => {
            press(state, *token);
            Ok((true, vec![]))
        }
        Event::Click {
            line,
            column,
            rows,
            cols,
        } => {
            let layout = KeypadLayout::new(*rows, *cols);
            match layout.hit_test(line + 1, column + 1) {
                Some(token) => {
                    tracing::debug!(line, column, token = %token, "click resolved to key");
                    press(state, token);
                    Ok((true, vec![]))
                }
                None => {
                    tracing::trace!(line, column, "click outside keypad");
                    Ok((false, vec![]))
                }
            }
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn press(state: &mut AppState, token: Token) {
    state.calculator = engine::apply(&state.calculator, token);
    state.last_pressed = Some(token);

    if state.calculator.is_error() {
        tracing::debug!(display = %state.calculator.display_value(), "calculator showing error marker");
    }
}
