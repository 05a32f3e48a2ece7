//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

use crate::app::keypad::KeypadLayout;
use crate::domain::Token;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title).
    pub header: HeaderInfo,

    /// Expression and value lines.
    pub display: DisplayInfo,

    /// Keypad grid, absent when the pane is too small to draw it.
    pub keypad: Option<KeypadView>,

    /// Footer information (keybindings).
    pub footer: FooterInfo,

    /// Message shown in place of the keypad when it does not fit.
    pub empty_state: Option<EmptyState>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// The two calculator lines, already truncated to the pane width.
#[derive(Debug, Clone)]
pub struct DisplayInfo {
    /// Secondary line: the running expression.
    pub expression: String,
    /// Primary line: the value being typed or the last result.
    pub value: String,
    /// Whether `value` shows the error marker.
    pub is_error: bool,
}

/// Keypad grid with its screen geometry.
#[derive(Debug, Clone)]
pub struct KeypadView {
    pub layout: KeypadLayout,
    /// Keys row by row, in [`crate::app::KEYPAD_ROWS`] order.
    pub keys: Vec<Vec<KeyView>>,
}

/// A single key on the keypad.
#[derive(Debug, Clone)]
pub struct KeyView {
    pub label: String,
    pub kind: KeyKind,
    /// Whether this key was the last one pressed.
    pub is_pressed: bool,
}

/// Key category, used to pick key colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Digit,
    Operator,
    Clear,
    Equals,
}

impl KeyKind {
    #[must_use]
    pub const fn of(token: Token) -> Self {
        match token {
            Token::Digit(_) => Self::Digit,
            Token::Operator(_) => Self::Operator,
            Token::Clear => Self::Clear,
            Token::Equals => Self::Equals,
        }
    }
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "Pane too small").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
