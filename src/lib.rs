//! zcalc: a keypad calculator plugin for Zellij.
//!
//! zcalc renders a 4x4 keypad and a two-line display (running expression and
//! current value) inside a Zellij pane. Keys can be pressed from the keyboard
//! or clicked with the mouse.
//!
//! Evaluation is strictly left to right with a single pending operator: no
//! precedence, no parentheses. Dividing by zero shows `Error` until `C` is
//! pressed.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - Key / mouse mapping, action execution            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Session state
//! │  - Event handling, keypad hit-testing               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────────┐   ┌───────────────────────────┐
//! │ Engine (engine/)          │   │ UI Layer (ui/)            │
//! │ - CalculatorState         │   │ - Rendering               │
//! │ - apply(state, token)     │   │ - Theming                 │
//! └───────────────────────────┘   └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                   │
//! │  - Tokens, operators, evaluation, errors            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zcalc.wasm" {
//!         theme "catppuccin-latte"
//!         theme_file "~/.config/zcalc/theme.toml"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Basic Usage (Library)
//!
//! ```rust
//! use zcalc::{handle_event, initialize, Config, Event, Token};
//!
//! let mut state = initialize(&Config::default());
//! for label in ["8", "/", "0", "="] {
//!     let token: Token = label.parse()?;
//!     handle_event(&mut state, &Event::Press(token))?;
//! }
//! assert_eq!(state.display_value(), "Error");
//! # Ok::<(), zcalc::CalculatorError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator with 24-bit color

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{CalculatorError, Operator, Result, Token};
pub use engine::{apply, apply_label, CalculatorState};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha` (default), `catppuccin-latte`,
    /// `catppuccin-frappe`, `catppuccin-macchiato`. Ignored if `theme_file`
    /// is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` expands to the sandbox home.
    pub theme_file: Option<String>,

    /// `tracing` filter directive. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values are treated as unset; unknown keys are ignored.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zcalc::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("trace_level".to_string(), " ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Resolves the configured theme: file first, then built-in name.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Io`] when the theme file cannot be read,
    /// [`CalculatorError::Theme`] when it does not parse, and
    /// [`CalculatorError::Config`] for an unknown built-in name. Neither
    /// option set resolves to the default theme.
    pub fn resolve_theme(&self) -> Result<Theme> {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file));
        }

        match &self.theme_name {
            Some(name) => Theme::from_name(name).ok_or_else(|| {
                CalculatorError::Config(format!(
                    "unknown theme {name:?}, expected one of {:?}",
                    Theme::BUILT_IN
                ))
            }),
            None => Ok(Theme::default()),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Theme resolution failures are logged and fall back to the default theme;
/// the calculator always starts.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zcalc plugin");

    let theme = config.resolve_theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        Theme::default()
    });

    tracing::debug!(theme = %theme.name, "theme resolved");
    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.resolve_theme().unwrap().name, "catppuccin-mocha");
    }

    #[test]
    fn unknown_theme_name_is_config_error() {
        let config = Config::from_zellij(&map(&[("theme", "solarized")]));
        assert!(matches!(config.resolve_theme(), Err(CalculatorError::Config(_))));
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn theme_file_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        let latte = toml::to_string(&Theme::from_name("catppuccin-latte").unwrap()).unwrap();
        std::fs::write(&path, latte.replace("catppuccin-latte", "mine")).unwrap();

        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-frappe"),
            ("theme_file", path.to_str().unwrap()),
        ]));
        assert_eq!(initialize(&config).theme.name, "mine");
    }

    #[test]
    fn missing_theme_file_falls_back() {
        let config = Config::from_zellij(&map(&[("theme_file", "/nowhere/theme.toml")]));
        assert!(matches!(config.resolve_theme(), Err(CalculatorError::Io(_))));
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn initialized_state_is_blank_calculator() {
        let state = initialize(&Config::default());
        assert_eq!(state.display_value(), "0");
        assert_eq!(state.expression(), "");
        assert!(state.last_pressed.is_none());
    }
}
