//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI output
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and prints ANSI-styled
/// output. Does not clear the screen; Zellij hands the plugin a fresh frame on
/// every render call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    tracing::trace!(rows, cols, keypad = viewmodel.keypad.is_some(), "rendering");

    components::render_calculator(&viewmodel, &state.theme, cols, rows);
}
