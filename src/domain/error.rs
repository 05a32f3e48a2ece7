//! Error types for the zcalc plugin.
//!
//! This module defines the centralized error type [`CalculatorError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate.
//!
//! Arithmetic failures are deliberately absent here: division by zero is a
//! display state of the calculator (see [`crate::domain::Evaluation`]), not an
//! error the caller has to handle.

use thiserror::Error;

/// The main error type for zcalc plugin operations.
///
/// # Examples
///
/// ```
/// use zcalc::domain::CalculatorError;
///
/// fn reject(label: &str) -> Result<(), CalculatorError> {
///     Err(CalculatorError::UnknownToken(label.to_string()))
/// }
///
/// assert!(reject("%").is_err());
/// ```
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// A button label outside the sixteen keypad labels was received.
    #[error("Unknown keypad token: {0:?}")]
    UnknownToken(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for zcalc operations.
pub type Result<T> = std::result::Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_token_message_quotes_label() {
        let err = CalculatorError::UnknownToken("%".to_string());
        assert_eq!(err.to_string(), "Unknown keypad token: \"%\"");
    }

    #[test]
    fn io_errors_convert() {
        fn open() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(CalculatorError::Io(_))));
    }
}
