//! End-to-end scenarios driving the application layer the way the plugin does.

use zcalc::app::keypad::{KeypadLayout, KEYPAD_ROWS};
use zcalc::{handle_event, initialize, Action, AppState, Config, Event, Token};

const ROWS: usize = 24;
const COLS: usize = 40;

fn session() -> AppState {
    initialize(&Config::default())
}

fn type_keys(state: &mut AppState, keys: &str) {
    for c in keys.chars() {
        let event = Event::from_char(c).unwrap_or_else(|| panic!("no event for {c:?}"));
        handle_event(state, &event).unwrap();
    }
}

/// Clicks the middle of the key showing `token`, in 0-indexed pane coordinates.
fn click(state: &mut AppState, token: Token) -> bool {
    let layout = KeypadLayout::new(ROWS, COLS);
    let (r, c) = KeypadLayout::position_of(token).unwrap();
    let (top, left) = layout.key_origin(r, c);
    let event = Event::Click {
        line: top + layout.key_height / 2 - 1,
        column: left + layout.face_width() / 2 - 1,
        rows: ROWS,
        cols: COLS,
    };
    handle_event(state, &event).unwrap().0
}

#[test]
fn addition_by_keyboard() {
    let mut state = session();
    type_keys(&mut state, "7+3=");
    assert_eq!(state.display_value(), "10");
    assert_eq!(state.expression(), " 7 + 3 = 10");
}

#[test]
fn subtraction_and_multiplication_by_keyboard() {
    let mut state = session();
    type_keys(&mut state, "9-4=");
    assert_eq!(state.display_value(), "5");

    type_keys(&mut state, "c6x7=");
    assert_eq!(state.display_value(), "42");
    assert_eq!(state.expression(), " 6 * 7 = 42");
}

#[test]
fn division_by_zero_then_clear() {
    let mut state = session();
    type_keys(&mut state, "8/0=");
    assert_eq!(state.display_value(), "Error");

    let vm = state.compute_viewmodel(ROWS, COLS);
    assert!(vm.display.is_error);

    type_keys(&mut state, "C");
    assert_eq!(state.display_value(), "0");
    assert_eq!(state.expression(), "");
}

#[test]
fn every_key_can_be_clicked() {
    for token in KEYPAD_ROWS.iter().flatten().copied() {
        let mut state = session();
        type_keys(&mut state, "12");
        assert!(click(&mut state, token), "click on {token} did not register");
        assert_eq!(state.last_pressed, Some(token));
    }
}

#[test]
fn clicked_calculation_matches_typed() {
    let mut clicked = session();
    for c in "12*3=".chars() {
        click(&mut clicked, Token::from_char(c).unwrap());
    }

    let mut typed = session();
    type_keys(&mut typed, "12*3=");

    assert_eq!(clicked.calculator, typed.calculator);
    assert_eq!(clicked.display_value(), "36");
}

#[test]
fn quitting_hides_pane_without_touching_state() {
    let mut state = session();
    type_keys(&mut state, "5+");
    let before = state.calculator.clone();

    let (render, actions) = handle_event(&mut state, &Event::from_char('q').unwrap()).unwrap();
    assert!(!render);
    assert_eq!(actions, vec![Action::CloseFocus]);
    assert_eq!(state.calculator, before);
}

#[test]
fn long_expression_is_truncated_in_view() {
    let mut state = session();
    for _ in 0..10 {
        type_keys(&mut state, "123+456=");
    }

    let vm = state.compute_viewmodel(ROWS, COLS);
    assert!(vm.display.expression.chars().count() <= COLS - 2);
    assert!(vm.display.expression.starts_with('…'));
    assert!(vm.display.expression.ends_with(state.display_value()));
}
