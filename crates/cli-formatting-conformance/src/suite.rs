//! The conformance suite for [`CliFormattingError`] implementations.
//!
//! Every check raises a value of the type under test, propagates it with `?`
//! into a type-erased [`anyhow::Error`], and intercepts it again by
//! downcasting. A check passes only if the value comes back as the same type
//! with its message untouched.

use std::any::type_name;

use cli_formatting_core::{CliFormattingError, raise};

use crate::failure::ConformanceFailure;

/// Message used by [`ConformanceSuite::can_be_raised`].
pub const RAISE_MESSAGE: &str = "A formatting error occurred.";

/// Message used by [`ConformanceSuite::can_be_raised_with_specified_message`].
pub const SPECIFIED_MESSAGE: &str =
    "A formatting error occurred. Triggered by: can_be_raised_with_specified_message";

/// A message with an embedded newline and multi-byte text.
pub const MULTILINE_UNICODE_MESSAGE: &str =
    "column 3 overflows\nспалах → 溢出 ✗ \u{1F4A5} e\u{301}";

/// A message made mostly of control characters.
pub const CONTROL_CHARACTER_MESSAGE: &str = "\t\u{7}\0\u{1b}[31mred\u{1b}[0m\r\n";

const TARGET: &str = "cli_formatting::conformance";

type Factory<T> = Box<dyn Fn(&str) -> T>;

/// Run `operation` in a generic error frame and intercept a `T` from it.
///
/// Returns the intercepted value, [`ConformanceFailure::NotRaised`] if the
/// operation succeeded, or [`ConformanceFailure::WrongKind`] if it failed
/// with some other error type.
///
/// # Example
///
/// ```
/// use cli_formatting_conformance::{intercept, ConformanceFailure};
/// use cli_formatting_core::FormattingError;
///
/// let caught = intercept::<FormattingError, _, ()>(|| {
///     Err(FormattingError::new("ragged table").into())
/// })
/// .unwrap();
/// assert_eq!(caught.message(), "ragged table");
///
/// let missed = intercept::<FormattingError, _, _>(|| Ok("aligned"));
/// assert_eq!(missed.unwrap_err(), ConformanceFailure::NotRaised);
/// ```
pub fn intercept<T, F, R>(operation: F) -> Result<T, ConformanceFailure>
where
    T: CliFormattingError,
    F: FnOnce() -> anyhow::Result<R>,
{
    match operation() {
        Ok(_) => Err(ConformanceFailure::NotRaised),
        Err(err) => err
            .downcast::<T>()
            .map_err(|other| ConformanceFailure::WrongKind {
                found: other.to_string(),
            }),
    }
}

fn raise_generic<T: CliFormattingError>(error: T) -> anyhow::Result<()> {
    raise::<(), T>(error)?;
    Ok(())
}

fn expect_message(expected: &str, actual: &str) -> Result<(), ConformanceFailure> {
    if expected == actual {
        Ok(())
    } else {
        Err(ConformanceFailure::mismatch(expected, actual))
    }
}

/// Contract checks for one [`CliFormattingError`] implementation.
///
/// The suite is generic over the type under test and over the factory that
/// builds values of it, so a new implementation is covered without touching
/// the suite. Each check is independent of the others.
///
/// # Example
///
/// ```
/// use cli_formatting_conformance::ConformanceSuite;
/// use cli_formatting_core::FormattingError;
///
/// let mut suite = ConformanceSuite::<FormattingError>::new()
///     .with_instance(FormattingError::new("set up by the test"));
/// suite.run().unwrap();
/// ```
pub struct ConformanceSuite<T> {
    factory: Factory<T>,
    instance: Option<T>,
}

impl<T: CliFormattingError> ConformanceSuite<T> {
    /// Create a suite that builds values with [`CliFormattingError::with_message`].
    pub fn new() -> Self {
        Self::with_factory(|message: &str| T::with_message(message))
    }

    /// Create a suite that builds values with `factory`.
    ///
    /// The factory receives the message each check wants the value to carry.
    pub fn with_factory(factory: impl Fn(&str) -> T + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            instance: None,
        }
    }

    /// Attach a prepared test instance, checked by [`Self::instance_is_raisable`].
    pub fn with_instance(mut self, instance: T) -> Self {
        self.instance = Some(instance);
        self
    }

    /// The current test instance, if one was set.
    pub fn instance(&self) -> Option<&T> {
        self.instance.as_ref()
    }

    /// Replace the test instance.
    pub fn set_instance(&mut self, instance: T) {
        self.instance = Some(instance);
    }

    /// Build a value of the type under test carrying `message`.
    pub fn build(&self, message: &str) -> T {
        (self.factory)(message)
    }

    /// A raised value is intercepted by a generic handler as the type under test.
    pub fn can_be_raised(&self) -> Result<(), ConformanceFailure> {
        log::trace!(target: TARGET, "can_be_raised: {}", type_name::<T>());
        let error = self.build(RAISE_MESSAGE);
        intercept::<T, _, _>(|| raise_generic(error))?;
        Ok(())
    }

    /// A raised value keeps the exact message it was built with.
    pub fn can_be_raised_with_specified_message(&self) -> Result<(), ConformanceFailure> {
        log::trace!(
            target: TARGET,
            "can_be_raised_with_specified_message: {}",
            type_name::<T>()
        );
        let error = self.build(SPECIFIED_MESSAGE);
        let intercepted = intercept::<T, _, _>(|| raise_generic(error))?;
        expect_message(SPECIFIED_MESSAGE, intercepted.message())
    }

    /// A value constructed without a message carries the empty message.
    pub fn default_message_is_empty(&self) -> Result<(), ConformanceFailure> {
        log::trace!(target: TARGET, "default_message_is_empty: {}", type_name::<T>());
        let intercepted = intercept::<T, _, _>(|| raise_generic(T::default()))?;
        expect_message("", intercepted.message())
    }

    /// Raising and intercepting a value built with `message` yields `message`.
    pub fn message_round_trips(&self, message: &str) -> Result<(), ConformanceFailure> {
        log::trace!(
            target: TARGET,
            "message_round_trips: {} {:?}",
            type_name::<T>(),
            message
        );
        let error = self.build(message);
        let intercepted = intercept::<T, _, _>(|| raise_generic(error))?;
        expect_message(message, intercepted.message())
    }

    /// Reading the message twice gives the same text both times.
    pub fn message_read_is_stable(&self, message: &str) -> Result<(), ConformanceFailure> {
        log::trace!(target: TARGET, "message_read_is_stable: {}", type_name::<T>());
        let error = self.build(message);
        let first = error.message().to_owned();
        let second = error.message();
        if first != second {
            return Err(ConformanceFailure::UnstableMessage {
                first,
                second: second.to_owned(),
            });
        }
        Ok(())
    }

    /// The test instance survives a raise with its message intact.
    ///
    /// When no instance has been set, one is built from the factory with
    /// [`MULTILINE_UNICODE_MESSAGE`] and checked against that message. The
    /// intercepted value is stored back as the instance.
    pub fn instance_is_raisable(&mut self) -> Result<(), ConformanceFailure> {
        log::trace!(target: TARGET, "instance_is_raisable: {}", type_name::<T>());
        let (instance, expected) = match self.instance.take() {
            Some(instance) => {
                let expected = instance.message().to_owned();
                (instance, expected)
            }
            None => (
                self.build(MULTILINE_UNICODE_MESSAGE),
                MULTILINE_UNICODE_MESSAGE.to_owned(),
            ),
        };
        let intercepted = intercept::<T, _, _>(|| raise_generic(instance))?;
        let outcome = expect_message(&expected, intercepted.message());
        self.instance = Some(intercepted);
        outcome
    }

    /// Run every check, stopping at the first failure.
    pub fn run(&mut self) -> Result<(), ConformanceFailure> {
        self.can_be_raised()?;
        self.can_be_raised_with_specified_message()?;
        self.default_message_is_empty()?;
        for message in ["", MULTILINE_UNICODE_MESSAGE, CONTROL_CHARACTER_MESSAGE] {
            self.message_round_trips(message)?;
            self.message_read_is_stable(message)?;
        }
        self.instance_is_raisable()
    }
}

impl<T: CliFormattingError> Default for ConformanceSuite<T> {
    fn default() -> Self {
        Self::new()
    }
}
