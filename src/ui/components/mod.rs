//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`display`]: Expression and value lines
//! - [`keypad`]: The 4x4 key grid
//! - [`empty`]: Message shown when the keypad does not fit
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Expression]
//! [Value]
//! [Border]
//! [Keypad or empty state]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod display;
mod empty;
mod footer;
mod header;
mod keypad;

use crate::app::keypad::KEYPAD_TOP;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use display::render_display;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use keypad::render_keypad;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full calculator screen.
pub fn render_calculator(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_display(current_row, &vm.display, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    debug_assert_eq!(current_row, KEYPAD_TOP);

    if let Some(keypad) = &vm.keypad {
        render_keypad(keypad, theme);
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    if border_row >= current_row + 2 {
        render_border(border_row, &theme.colors.border, cols);
        render_footer(footer_start, &vm.footer, theme, cols);
    }
}
