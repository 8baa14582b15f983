//! CLI formatting core: the error raised when formatted CLI output cannot be
//! produced, and the contract every such error type honors.
//!
//! This crate has no internal dependencies (dependency level 0). It contains
//! no formatting logic of its own; formatting libraries depend on it to signal
//! failure, and their callers depend on it to recognise that failure.
//!
//! # Modules
//!
//! - [`contract`]: The [`CliFormattingError`] trait and the [`raise`] helper
//! - [`error`]: The concrete [`FormattingError`] and the `Result` alias
//!
//! # Example
//!
//! ```
//! use cli_formatting_core::{raise, FormattingError, Result};
//!
//! fn pad(text: &str, width: usize) -> Result<String> {
//!     if text.chars().count() > width {
//!         return raise(FormattingError::new(format!(
//!             "cannot pad {text:?} to {width} columns"
//!         )));
//!     }
//!     Ok(format!("{text:<width$}"))
//! }
//!
//! let err = pad("overflowing", 4).unwrap_err();
//! assert_eq!(err.message(), "cannot pad \"overflowing\" to 4 columns");
//! ```

pub mod contract;
pub mod error;

// Re-export key types at crate root for convenience
pub use contract::{CliFormattingError, raise};
pub use error::{FormattingError, Result};
