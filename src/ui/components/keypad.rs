//! Keypad component renderer.
//!
//! Each key is a solid block of `face_width` x `key_height` cells with its label
//! centered on the middle row. Geometry comes from
//! [`KeypadLayout`](crate::app::keypad::KeypadLayout), the same value mouse
//! clicks are hit-tested against.

use crate::ui::helpers::{center_padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{KeyKind, KeyView, KeypadView};

/// Renders all sixteen keys and returns the row below the keypad.
pub fn render_keypad(keypad: &KeypadView, theme: &Theme) -> usize {
    let layout = keypad.layout;

    for (r, row) in keypad.keys.iter().enumerate() {
        for (c, key) in row.iter().enumerate() {
            let (top, left) = layout.key_origin(r, c);
            render_key(key, theme, top, left, layout.face_width(), layout.key_height);
        }
    }

    layout.bottom()
}

fn render_key(key: &KeyView, theme: &Theme, top: usize, left: usize, width: usize, height: usize) {
    let colors = &theme.colors;
    let (fg, bg) = match key.kind {
        KeyKind::Digit => (&colors.key_fg, &colors.key_bg),
        KeyKind::Operator | KeyKind::Clear | KeyKind::Equals => {
            (&colors.operator_key_fg, &colors.operator_key_bg)
        }
    };
    let bg = if key.is_pressed { &colors.pressed_key_bg } else { bg };

    let label_len = key.label.chars().count();
    let padding = center_padding(width, label_len);
    let label_row = height / 2;

    for offset in 0..height {
        position_cursor(top + offset, left);
        print!("{}{}", Theme::fg(fg), Theme::bg(bg));
        if offset == label_row {
            print!("{}", Theme::bold());
            print!("{}", " ".repeat(padding));
            print!("{}", key.label);
            print!("{}", " ".repeat(width.saturating_sub(padding + label_len)));
        } else {
            print!("{}", " ".repeat(width));
        }
        print!("{}", Theme::reset());
    }
}
