//! Failure reports produced by the conformance suite.

use thiserror::Error;

/// Ways a type can fail the CLI formatting error contract.
///
/// These describe the type under test, not a formatting failure; they are
/// what a conformance test reports when it fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConformanceFailure {
    /// The raise path completed without producing an error.
    #[error("raising did not produce an error")]
    NotRaised,

    /// The generic handler intercepted an error of a different type.
    #[error("intercepted an error of the wrong kind: {found}")]
    WrongKind {
        /// Display text of the error that was intercepted instead.
        found: String,
    },

    /// The intercepted message differs from the one supplied at construction.
    #[error("message was altered: expected {expected:?}, got {actual:?}")]
    MessageMismatch {
        /// Message supplied at construction.
        expected: String,
        /// Message observed after interception.
        actual: String,
    },

    /// Two consecutive reads of the message disagreed.
    #[error("message changed between reads: {first:?} then {second:?}")]
    UnstableMessage {
        /// First read.
        first: String,
        /// Second read.
        second: String,
    },
}

impl ConformanceFailure {
    /// Create a message mismatch failure.
    pub fn mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::MessageMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
