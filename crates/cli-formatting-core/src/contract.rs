//! The contract shared by every CLI formatting error type.
//!
//! [`CliFormattingError`] is the extension point: a formatting library may use
//! [`FormattingError`](crate::FormattingError) directly or supply its own type,
//! as long as that type implements this trait. The
//! `cli-formatting-conformance` crate checks implementations against it.

use std::error::Error as StdError;

/// Capabilities required of a value that signals a CLI formatting failure.
///
/// # Bounds
///
/// - `std::error::Error + Send + Sync + 'static`: The value travels through
///   `Result` and `?`, including into type-erased holders such as
///   `Box<dyn Error + Send + Sync>` or `anyhow::Error`, and can be recovered
///   from them by downcasting
/// - `Default`: Constructing without a message yields an empty message
///
/// # Example
///
/// ```
/// use cli_formatting_core::CliFormattingError;
///
/// #[derive(Debug, Default)]
/// struct WrapError(String);
///
/// impl std::fmt::Display for WrapError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str(&self.0)
///     }
/// }
///
/// impl std::error::Error for WrapError {}
///
/// impl CliFormattingError for WrapError {
///     fn with_message(message: impl Into<String>) -> Self {
///         Self(message.into())
///     }
///
///     fn message(&self) -> &str {
///         &self.0
///     }
/// }
///
/// assert_eq!(WrapError::with_message("line too long").message(), "line too long");
/// assert_eq!(WrapError::default().message(), "");
/// ```
pub trait CliFormattingError: StdError + Default + Send + Sync + 'static {
    /// Construct a value carrying `message` verbatim.
    fn with_message(message: impl Into<String>) -> Self;

    /// The message supplied at construction, or `""` if there was none.
    ///
    /// Must return the same text on every call.
    fn message(&self) -> &str;
}

/// Raise `error` through the standard `Result` channel.
///
/// Always returns `Err(error)`; the caller propagates it with `?`. The message
/// is logged at debug level under the `cli_formatting::raise` target.
///
/// # Example
///
/// ```
/// use cli_formatting_core::{raise, FormattingError};
///
/// fn align(columns: usize) -> Result<String, FormattingError> {
///     if columns == 0 {
///         return raise(FormattingError::new("no columns to align"));
///     }
///     Ok(" ".repeat(columns))
/// }
///
/// assert_eq!(align(0).unwrap_err().message(), "no columns to align");
/// assert_eq!(align(2).unwrap(), "  ");
/// ```
pub fn raise<T, E: CliFormattingError>(error: E) -> Result<T, E> {
    log::debug!(
        target: "cli_formatting::raise",
        "raising {}: {:?}",
        std::any::type_name::<E>(),
        error.message()
    );
    Err(error)
}
