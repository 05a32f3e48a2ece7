//! User interface rendering layer.
//!
//! Transforms view models into ANSI-styled output through small component
//! renderers.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers (header, display, keypad, footer)
//! - [`helpers`]: Cursor positioning and text fitting
//! - [`theme`]: Color schemes and ANSI escape sequence generation
//!
//! # Example
//!
//! ```rust
//! use zcalc::app::AppState;
//! use zcalc::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default());
//! render(&state, 24, 80); // Renders to stdout
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DisplayInfo, EmptyState, FooterInfo, HeaderInfo, KeyKind, KeyView, KeypadView, UIViewModel,
};
