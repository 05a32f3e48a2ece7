//! Structured logging to a rotating file.
//!
//! Zellij plugins have no terminal of their own to log to, so events and spans
//! emitted with the `tracing` macros are written as JSON lines to
//! `~/.local/share/zellij/zcalc/zcalc.log`.
//!
//! ```text
//! tracing macros → EnvFilter → fmt::layer().json() → FileWriter → zcalc.log
//! ```
//!
//! # Configuration
//!
//! The filter comes from the `trace_level` plugin option (any `EnvFilter`
//! directive, e.g. `debug` or `zcalc::engine=trace`), defaulting to `info`.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `file_writer`: size-rotating file sink

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
