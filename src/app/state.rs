//! Application state and view model computation.
//!
//! [`AppState`] is the single mutable slot the plugin owns. It holds the latest
//! immutable [`CalculatorState`] (replaced wholesale on every press), the theme,
//! and the last pressed key for highlighting.
//!
//! # Example
//!
//! ```rust
//! use zcalc::app::AppState;
//! use zcalc::ui::Theme;
//!
//! let state = AppState::new(Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.display.value, "0");
//! ```

use super::keypad::{KeypadLayout, KEYPAD_ROWS};
use crate::domain::Token;
use crate::engine::CalculatorState;
use crate::ui::helpers::truncate_left;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayInfo, EmptyState, FooterInfo, HeaderInfo, KeyKind, KeyView, KeypadView, UIViewModel,
};

/// Title shown in the header bar.
const TITLE: &str = "zcalc";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Latest calculator state.
    pub calculator: CalculatorState,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Most recently pressed key, highlighted on the keypad.
    pub last_pressed: Option<Token>,
}

impl AppState {
    /// Creates a session in the initial calculator state.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            calculator: CalculatorState::new(),
            theme,
            last_pressed: None,
        }
    }

    /// Primary display line.
    #[must_use]
    pub fn display_value(&self) -> &str {
        self.calculator.display_value()
    }

    /// Secondary expression line.
    #[must_use]
    pub fn expression(&self) -> &str {
        self.calculator.expression()
    }

    /// Computes the renderable view model for a pane of `rows` x `cols`.
    ///
    /// When the pane is too small for the keypad, the view model carries an
    /// empty state message instead and the keypad is omitted.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let layout = KeypadLayout::new(rows, cols);

        let (keypad, empty_state) = if layout.is_visible() {
            (Some(self.compute_keypad(layout)), None)
        } else {
            (
                None,
                Some(EmptyState {
                    message: "Pane too small".to_string(),
                    subtitle: "Enlarge the pane to show the keypad".to_string(),
                }),
            )
        };

        UIViewModel {
            header: HeaderInfo {
                title: TITLE.to_string(),
            },
            display: self.compute_display(cols),
            keypad,
            footer: Self::compute_footer(),
            empty_state,
        }
    }

    fn compute_display(&self, cols: usize) -> DisplayInfo {
        let width = cols.saturating_sub(2);
        DisplayInfo {
            expression: truncate_left(self.calculator.expression().trim_start(), width),
            value: truncate_left(self.calculator.display_value(), width),
            is_error: self.calculator.is_error(),
        }
    }

    fn compute_keypad(&self, layout: KeypadLayout) -> KeypadView {
        let keys = KEYPAD_ROWS
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&token| KeyView {
                        label: token.label(),
                        kind: KeyKind::of(token),
                        is_pressed: self.last_pressed == Some(token),
                    })
                    .collect()
            })
            .collect();

        KeypadView { layout, keys }
    }

    fn compute_footer() -> FooterInfo {
        FooterInfo {
            keybindings: "0-9 + - * /: input | Enter/=: equals | c/Esc: clear | q: quit"
                .to_string(),
        }
    }
}
