//! Conformance of concrete CLI formatting error types, and of callers intercepting them.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};

use cli_formatting_conformance::{
    ConformanceFailure, ConformanceSuite, MULTILINE_UNICODE_MESSAGE, SPECIFIED_MESSAGE,
    cli_formatting_error_conformance, intercept,
};
use cli_formatting_core::{CliFormattingError, FormattingError, raise};
use proptest::prelude::*;

// ============================================================================
// Conforming types
// ============================================================================

cli_formatting_error_conformance!(formatting_error, FormattingError);

cli_formatting_error_conformance!(
    formatting_error_with_instance,
    FormattingError,
    ConformanceSuite::new().with_instance(FormattingError::new(
        "A formatting error occurred. Triggered by: scenario2"
    ))
);

/// A separately written implementation, standing in for one supplied by a
/// downstream formatting library.
#[derive(Debug, Default, thiserror::Error)]
#[error("table layout failed: {reason}")]
struct TableLayoutError {
    reason: String,
}

impl CliFormattingError for TableLayoutError {
    fn with_message(message: impl Into<String>) -> Self {
        Self {
            reason: message.into(),
        }
    }

    fn message(&self) -> &str {
        &self.reason
    }
}

cli_formatting_error_conformance!(table_layout_error, TableLayoutError);

// ============================================================================
// Non-conforming types
// ============================================================================

/// Drops everything after the first line.
#[derive(Debug, Default, thiserror::Error)]
#[error("{0}")]
struct FirstLineOnly(String);

impl CliFormattingError for FirstLineOnly {
    fn with_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self(message.lines().next().unwrap_or_default().to_owned())
    }

    fn message(&self) -> &str {
        &self.0
    }
}

/// Falls back to a canned message when constructed without one.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct CannedDefault(String);

impl Default for CannedDefault {
    fn default() -> Self {
        Self("unknown formatting error".into())
    }
}

impl CliFormattingError for CannedDefault {
    fn with_message(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    fn message(&self) -> &str {
        &self.0
    }
}

/// Returns a shorter slice of the message on every read.
#[derive(Debug, Default, thiserror::Error)]
#[error("{message}")]
struct ShrinkingMessage {
    message: String,
    reads: AtomicUsize,
}

impl CliFormattingError for ShrinkingMessage {
    fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            reads: AtomicUsize::new(0),
        }
    }

    fn message(&self) -> &str {
        let reads = self.reads.fetch_add(1, Ordering::Relaxed);
        let end = self
            .message
            .char_indices()
            .rev()
            .nth(reads)
            .map_or(0, |(index, _)| index);
        &self.message[..end]
    }
}

#[test]
fn test_truncating_type_fails_multiline_round_trip() {
    let suite = ConformanceSuite::<FirstLineOnly>::new();
    assert!(suite.can_be_raised().is_ok());
    assert!(suite.can_be_raised_with_specified_message().is_ok());
    assert_eq!(
        suite.message_round_trips("header\nrow").unwrap_err(),
        ConformanceFailure::mismatch("header\nrow", "header")
    );
}

#[test]
fn test_truncating_type_fails_instance_check_without_prepared_instance() {
    let mut suite = ConformanceSuite::<FirstLineOnly>::new();
    assert!(suite.instance().is_none());
    assert_eq!(
        suite.instance_is_raisable().unwrap_err(),
        ConformanceFailure::mismatch(MULTILINE_UNICODE_MESSAGE, "column 3 overflows")
    );
}

#[test]
fn test_truncating_type_fails_prepared_multiline_instance() {
    let mut suite = ConformanceSuite::<FirstLineOnly>::new()
        .with_instance(FirstLineOnly("header\nrow".into()));
    assert_eq!(
        suite.instance_is_raisable().unwrap_err(),
        ConformanceFailure::mismatch("header\nrow", "header")
    );
}

#[test]
fn test_canned_default_fails_empty_default() {
    let suite = ConformanceSuite::<CannedDefault>::new();
    assert_eq!(
        suite.default_message_is_empty().unwrap_err(),
        ConformanceFailure::mismatch("", "unknown formatting error")
    );
}

#[test]
fn test_shrinking_message_fails_stability() {
    let suite = ConformanceSuite::<ShrinkingMessage>::new();
    let failure = suite
        .message_read_is_stable(MULTILINE_UNICODE_MESSAGE)
        .unwrap_err();
    assert!(matches!(failure, ConformanceFailure::UnstableMessage { .. }));
}

#[test]
fn test_run_stops_at_first_failure() {
    let mut suite = ConformanceSuite::<FirstLineOnly>::new();
    assert!(matches!(
        suite.run(),
        Err(ConformanceFailure::MessageMismatch { .. })
    ));
}

// ============================================================================
// Interception by callers of a formatting library
// ============================================================================

fn truncate_to_width(text: &str, width: usize) -> cli_formatting_core::Result<String> {
    if width == 0 {
        return raise(FormattingError::new(format!(
            "cannot fit {text:?} into zero columns"
        )));
    }
    Ok(text.chars().take(width).collect())
}

fn render_cell(text: &str, width: usize) -> anyhow::Result<String> {
    let cell = truncate_to_width(text, width)?;
    Ok(format!("|{cell}|"))
}

#[test]
fn test_caller_intercepts_formatting_failure_by_type() {
    let caught = intercept::<FormattingError, _, _>(|| render_cell("name", 0)).unwrap();
    assert_eq!(caught.message(), "cannot fit \"name\" into zero columns");
}

#[test]
fn test_caller_sees_success_as_not_raised() {
    assert_eq!(
        intercept::<FormattingError, _, _>(|| render_cell("name", 2)).unwrap_err(),
        ConformanceFailure::NotRaised
    );
}

#[test]
fn test_other_conforming_type_is_a_different_kind() {
    let result = intercept::<TableLayoutError, _, _>(|| render_cell("name", 0));
    assert_eq!(
        result.unwrap_err(),
        ConformanceFailure::WrongKind {
            found: "cannot fit \"name\" into zero columns".into()
        }
    );
}

#[test]
fn test_specified_message_literal() {
    assert_eq!(
        SPECIFIED_MESSAGE,
        "A formatting error occurred. Triggered by: can_be_raised_with_specified_message"
    );
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_any_message_round_trips(message in any::<String>()) {
        let suite = ConformanceSuite::<FormattingError>::new();
        prop_assert!(suite.message_round_trips(&message).is_ok());
        prop_assert!(suite.message_read_is_stable(&message).is_ok());
    }

    #[test]
    fn prop_any_message_round_trips_for_table_layout_error(message in "(?s).{0,64}") {
        let suite = ConformanceSuite::<TableLayoutError>::new();
        prop_assert!(suite.message_round_trips(&message).is_ok());
    }
}
