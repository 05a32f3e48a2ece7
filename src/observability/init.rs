//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
const LOG_FILE_NAME: &str = "zcalc.log";

/// Default filter directive when `trace_level` is not configured.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// Installs a registry with an [`EnvFilter`] built from `config.trace_level`
/// (default `"info"`) and a JSON `fmt` layer writing to a rotating
/// `zcalc.log` in [`get_data_dir`](crate::infrastructure::get_data_dir).
///
/// Logging is optional: if the data directory cannot be created, or the filter
/// directive does not parse, the plugin runs without a subscriber. Only the
/// first successful call installs anything.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let Ok(filter) = EnvFilter::try_new(level) else {
        return;
    };

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(data_dir.join(LOG_FILE_NAME));
    let log_path = writer.path().to_path_buf();
    let fmt_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_current_span(true)
        .with_writer(writer);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!(path = %log_path.display(), filter = level, "tracing initialized");
    }
}
