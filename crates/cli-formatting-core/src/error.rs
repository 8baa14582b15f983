//! The concrete CLI formatting error.
//!
//! Uses `thiserror` for the `Error` and `Display` impls. There is exactly one
//! kind of failure here; the only payload is the human-readable message.

use thiserror::Error;

use crate::contract::CliFormattingError;

/// A CLI formatting operation could not produce valid output.
///
/// The message is stored exactly as given and displayed without a prefix.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{message}")]
pub struct FormattingError {
    message: String,
}

impl FormattingError {
    /// Create a formatting error carrying `message`.
    ///
    /// # Example
    ///
    /// ```
    /// use cli_formatting_core::FormattingError;
    ///
    /// let err = FormattingError::new("column width exceeds terminal width");
    /// assert_eq!(err.message(), "column width exceeds terminal width");
    /// assert_eq!(err.to_string(), "column width exceeds terminal width");
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message supplied at construction.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl CliFormattingError for FormattingError {
    fn with_message(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for FormattingError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for FormattingError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Result type alias using the CLI formatting error.
pub type Result<T> = std::result::Result<T, FormattingError>;
