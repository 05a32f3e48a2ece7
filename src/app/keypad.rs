//! Keypad layout and hit-testing.
//!
//! The keypad is a fixed 4x4 grid:
//!
//! ```text
//! 7 8 9 /
//! 4 5 6 *
//! 1 2 3 -
//! 0 C = +
//! ```
//!
//! [`KeypadLayout`] turns a pane size into screen geometry. The renderer draws
//! keys at [`KeypadLayout::key_origin`] and mouse clicks are resolved with
//! [`KeypadLayout::hit_test`], so both always agree on where a key is.
//!
//! Screen coordinates in this module are 1-indexed, matching the ANSI cursor
//! positioning used by the UI layer.

use crate::domain::{Operator, Token};

/// Keypad labels, row by row.
pub const KEYPAD_ROWS: [[Token; 4]; 4] = [
    [Token::Digit(7), Token::Digit(8), Token::Digit(9), Token::Operator(Operator::Divide)],
    [Token::Digit(4), Token::Digit(5), Token::Digit(6), Token::Operator(Operator::Multiply)],
    [Token::Digit(1), Token::Digit(2), Token::Digit(3), Token::Operator(Operator::Subtract)],
    [Token::Digit(0), Token::Clear, Token::Equals, Token::Operator(Operator::Add)],
];

/// First screen row of the keypad.
///
/// Rows above it hold: blank, header, border, expression, display, border.
pub const KEYPAD_TOP: usize = 7;

/// Rows below the keypad reserved for the footer border and footer.
const FOOTER_CHROME: usize = 3;

const MAX_KEY_HEIGHT: usize = 3;
const MIN_KEY_WIDTH: usize = 2;

/// Screen geometry of the keypad for a given pane size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadLayout {
    /// Columns per key cell, including the one-column gutter.
    pub key_width: usize,
    /// Rows per key.
    pub key_height: usize,
}

impl KeypadLayout {
    /// Computes the layout for a pane of `rows` x `cols`.
    ///
    /// ```
    /// use zcalc::app::keypad::KeypadLayout;
    ///
    /// let layout = KeypadLayout::new(24, 40);
    /// assert_eq!(layout.key_width, 10);
    /// assert_eq!(layout.key_height, 3);
    /// ```
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let available_rows = rows.saturating_sub(KEYPAD_TOP + FOOTER_CHROME - 1);
        Self {
            key_width: cols / 4,
            key_height: (available_rows / 4).min(MAX_KEY_HEIGHT),
        }
    }

    /// Whether the pane is large enough to draw the keypad at all.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.key_height > 0 && self.key_width >= MIN_KEY_WIDTH
    }

    /// Width of the clickable face of a key (cell minus gutter).
    #[must_use]
    pub const fn face_width(&self) -> usize {
        self.key_width.saturating_sub(1)
    }

    /// Top-left screen position `(row, col)` of the key at grid `(r, c)`.
    #[must_use]
    pub const fn key_origin(&self, r: usize, c: usize) -> (usize, usize) {
        (KEYPAD_TOP + r * self.key_height, 1 + c * self.key_width)
    }

    /// Screen row just below the last keypad row.
    #[must_use]
    pub const fn bottom(&self) -> usize {
        KEYPAD_TOP + 4 * self.key_height
    }

    /// Returns the token of the key covering screen position `(row, col)`.
    ///
    /// ```
    /// use zcalc::app::keypad::KeypadLayout;
    /// use zcalc::domain::Token;
    ///
    /// let layout = KeypadLayout::new(24, 40);
    /// assert_eq!(layout.hit_test(8, 5), Some(Token::Digit(7)));
    /// assert_eq!(layout.hit_test(1, 1), None);
    /// ```
    #[must_use]
    pub fn hit_test(&self, row: usize, col: usize) -> Option<Token> {
        if !self.is_visible() || row < KEYPAD_TOP || col == 0 {
            return None;
        }

        let r = (row - KEYPAD_TOP) / self.key_height;
        let c = (col - 1) / self.key_width;
        let offset = (col - 1) % self.key_width;

        if r >= 4 || c >= 4 || offset >= self.face_width() {
            return None;
        }

        Some(KEYPAD_ROWS[r][c])
    }

    /// Grid position `(r, c)` of `token` on the keypad.
    #[must_use]
    pub fn position_of(token: Token) -> Option<(usize, usize)> {
        KEYPAD_ROWS.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|t| *t == token).map(|c| (r, c))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_holds_sixteen_distinct_tokens() {
        let mut labels: Vec<String> = KEYPAD_ROWS.iter().flatten().map(|t| t.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 16);
    }

    #[test]
    fn center_of_every_key_hits_that_key() {
        let layout = KeypadLayout::new(30, 48);
        for (r, row) in KEYPAD_ROWS.iter().enumerate() {
            for (c, token) in row.iter().enumerate() {
                let (top, left) = layout.key_origin(r, c);
                let hit = layout.hit_test(top + layout.key_height / 2, left + layout.face_width() / 2);
                assert_eq!(hit, Some(*token));
            }
        }
    }

    #[test]
    fn gutter_and_outside_miss() {
        let layout = KeypadLayout::new(24, 40);
        assert_eq!(layout.hit_test(KEYPAD_TOP, 10), None);
        assert_eq!(layout.hit_test(KEYPAD_TOP - 1, 2), None);
        assert_eq!(layout.hit_test(layout.bottom(), 2), None);
        assert_eq!(layout.hit_test(KEYPAD_TOP, 41), None);
    }

    #[test]
    fn key_height_shrinks_on_short_panes() {
        assert_eq!(KeypadLayout::new(24, 40).key_height, 3);
        assert_eq!(KeypadLayout::new(15, 40).key_height, 1);
        assert!(!KeypadLayout::new(10, 40).is_visible());
        assert!(!KeypadLayout::new(24, 7).is_visible());
    }

    #[test]
    fn keypad_ends_above_footer() {
        for rows in 12..60 {
            let layout = KeypadLayout::new(rows, 40);
            if layout.is_visible() {
                assert!(layout.bottom() <= rows.saturating_sub(2));
            }
        }
    }

    #[test]
    fn position_of_finds_grid_cell() {
        assert_eq!(KeypadLayout::position_of(Token::Clear), Some((3, 1)));
        assert_eq!(KeypadLayout::position_of(Token::Digit(9)), Some((0, 2)));
    }
}
