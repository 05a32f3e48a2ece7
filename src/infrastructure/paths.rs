//! Path manipulation utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// Returns the data directory for zcalc log files.
///
/// Located at `/host/.local/share/zellij/zcalc`. In Zellij's plugin
/// environment `/host` points to the cwd of the last focused terminal, which is
/// usually the user's home directory, making the host path
/// `~/.local/share/zellij/zcalc`.
///
/// ```
/// use zcalc::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zcalc"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zcalc")
}

/// Expands tilde paths to use the `/host` prefix.
///
/// Used for the `theme_file` option, which users write relative to their home
/// directory.
///
/// ```
/// use zcalc::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
