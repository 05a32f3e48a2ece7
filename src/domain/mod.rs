//! Domain layer for the zcalc plugin.
//!
//! Core calculator vocabulary, independent of Zellij APIs and rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`token`]: Keypad tokens and binary operators
//! - [`evaluation`]: Arithmetic outcomes and operand parsing
//!
//! # Examples
//!
//! ```
//! use zcalc::domain::{Result, Token};
//!
//! fn press(label: &str) -> Result<Token> {
//!     label.parse()
//! }
//!
//! assert_eq!(press("=").unwrap(), Token::Equals);
//! ```

pub mod error;
pub mod evaluation;
pub mod token;

pub use error::{CalculatorError, Result};
pub use evaluation::{parse_operand, Evaluation, ERROR_MARKER};
pub use token::{Operator, Token};
