//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler only ever touches [`crate::app::AppState`]. Anything that
//! has to reach Zellij itself is returned as an [`Action`] and executed by the
//! plugin shim in `main.rs`.
//!
//! # Example
//!
//! ```rust
//! use zcalc::app::{handle_event, Action, AppState, Event};
//! use zcalc::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::CloseFocus)?;
//! assert_eq!(actions, vec![Action::CloseFocus]);
//! # Ok::<(), zcalc::CalculatorError>(())
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly asks to leave the calculator (pressing 'q').
    CloseFocus,
}
