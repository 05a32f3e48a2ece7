//! Shared rendering utilities.
//!
//! Low-level helpers used across UI components: cursor positioning and
//! width-aware text fitting. Widths are counted in characters, not bytes, so the
//! `…` ellipsis counts as one column.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Keeps the rightmost part of `text` that fits in `width` columns.
///
/// When `text` is too wide, the kept part is prefixed with `…` so the reader
/// knows the start was cut. The most recent input is always at the end of the
/// calculator lines, which is why truncation happens on the left.
///
/// ```rust
/// use zcalc::ui::helpers::truncate_left;
///
/// assert_eq!(truncate_left("12345", 10), "12345");
/// assert_eq!(truncate_left("1234567890", 5), "…7890");
/// ```
#[must_use]
pub fn truncate_left(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let keep = width - 1;
    let tail: String = text.chars().skip(len - keep).collect();
    format!("…{tail}")
}

/// Left padding that centers `text_len` columns inside `width` columns.
#[must_use]
pub const fn center_padding(width: usize, text_len: usize) -> usize {
    width.saturating_sub(text_len) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_left_edge_widths() {
        assert_eq!(truncate_left("abc", 0), "");
        assert_eq!(truncate_left("abc", 1), "…");
        assert_eq!(truncate_left("abc", 3), "abc");
        assert_eq!(truncate_left(" 7 + 3 = 10", 6), "… = 10");
    }

    #[test]
    fn center_padding_prefers_left() {
        assert_eq!(center_padding(10, 3), 3);
        assert_eq!(center_padding(2, 5), 0);
    }
}
