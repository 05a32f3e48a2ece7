//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the calculator engine.
//!
//! ```text
//! Key / Mouse → Event → handle_event → engine::apply → AppState → render
//!                                    ↘ Actions → Zellij
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing
//! - [`keypad`]: Keypad grid, screen geometry, and click hit-testing
//! - [`state`]: Session state container and view model computation

pub mod actions;
pub mod handler;
pub mod keypad;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keypad::{KeypadLayout, KEYPAD_ROWS};
pub use state::AppState;
