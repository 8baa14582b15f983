//! Test generation for conforming types.

/// Generate one `#[test]` per conformance check for a [`CliFormattingError`]
/// implementation.
///
/// Expands to a module named `$name` holding the tests. The optional third
/// argument is an expression producing the [`ConformanceSuite`] to use, for a
/// custom factory or a prepared test instance; it is evaluated once per test.
/// Without a prepared instance, `instance_is_raisable` checks one built by the
/// factory.
///
/// Names used in `$type` and `$suite` resolve from the invoking module.
///
/// ```
/// use cli_formatting_core::FormattingError;
///
/// cli_formatting_conformance::cli_formatting_error_conformance!(
///     formatting_error,
///     FormattingError
/// );
///
/// cli_formatting_conformance::cli_formatting_error_conformance!(
///     formatting_error_with_instance,
///     FormattingError,
///     cli_formatting_conformance::ConformanceSuite::new()
///         .with_instance(FormattingError::new("prepared"))
/// );
/// # fn main() {}
/// ```
///
/// [`CliFormattingError`]: cli_formatting_core::CliFormattingError
/// [`ConformanceSuite`]: crate::ConformanceSuite
#[macro_export]
macro_rules! cli_formatting_error_conformance {
    ($name:ident, $type:ty) => {
        $crate::cli_formatting_error_conformance!(
            $name,
            $type,
            $crate::ConformanceSuite::<$type>::new()
        );
    };
    ($name:ident, $type:ty, $suite:expr) => {
        mod $name {
            #[allow(unused_imports)]
            use super::*;

            fn suite() -> $crate::ConformanceSuite<$type> {
                $suite
            }

            #[test]
            fn can_be_raised() -> ::std::result::Result<(), $crate::ConformanceFailure> {
                suite().can_be_raised()
            }

            #[test]
            fn can_be_raised_with_specified_message(
            ) -> ::std::result::Result<(), $crate::ConformanceFailure> {
                suite().can_be_raised_with_specified_message()
            }

            #[test]
            fn default_message_is_empty() -> ::std::result::Result<(), $crate::ConformanceFailure> {
                suite().default_message_is_empty()
            }

            #[test]
            fn message_round_trips_multiline_unicode(
            ) -> ::std::result::Result<(), $crate::ConformanceFailure> {
                suite().message_round_trips($crate::MULTILINE_UNICODE_MESSAGE)
            }

            #[test]
            fn message_round_trips_control_characters(
            ) -> ::std::result::Result<(), $crate::ConformanceFailure> {
                suite().message_round_trips($crate::CONTROL_CHARACTER_MESSAGE)
            }

            #[test]
            fn message_read_is_stable() -> ::std::result::Result<(), $crate::ConformanceFailure> {
                suite().message_read_is_stable($crate::MULTILINE_UNICODE_MESSAGE)
            }

            #[test]
            fn instance_is_raisable() -> ::std::result::Result<(), $crate::ConformanceFailure> {
                suite().instance_is_raisable()
            }
        }
    };
}
