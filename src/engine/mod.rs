//! Calculator engine: an immutable state and a pure transition function.
//!
//! ```text
//! (CalculatorState, Token) ── apply ──▶ CalculatorState
//! ```
//!
//! # Modules
//!
//! - [`state`]: [`CalculatorState`] and its pending-operator pair
//! - [`transition`]: [`apply`] and the label-parsing [`apply_label`]

pub mod state;
pub mod transition;

pub use state::{CalculatorState, INITIAL_DISPLAY};
pub use transition::{apply, apply_label};
