//! Calculator display renderer: expression line above the value line.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayInfo;

/// Renders the expression and value lines right-aligned, one column in from
/// the pane edge.
///
/// Returns the next available row.
pub fn render_display(row: usize, display: &DisplayInfo, theme: &Theme, cols: usize) -> usize {
    render_right_aligned(row, &display.expression, &Theme::fg(&theme.colors.expression_fg), cols);

    let value_color = if display.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.display_fg
    };
    let style = format!("{}{}", Theme::bold(), Theme::fg(value_color));
    render_right_aligned(row + 1, &display.value, &style, cols);

    row + 2
}

fn render_right_aligned(row: usize, text: &str, style: &str, cols: usize) {
    let width = cols.saturating_sub(1);
    let padding = width.saturating_sub(text.chars().count());

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!(" ");
    print!("{}", Theme::reset());
}
