//! Conformance tests for CLI formatting errors.
//!
//! Any type implementing [`CliFormattingError`] can be checked against the
//! contract with [`ConformanceSuite`], either by calling the checks directly
//! or by generating a test module with [`cli_formatting_error_conformance!`].
//! Add this crate as a dev-dependency only; nothing here runs in production.
//!
//! # Modules
//!
//! - [`failure`]: [`ConformanceFailure`], what a failed check reports
//! - [`suite`]: [`ConformanceSuite`], [`intercept`] and the sample messages
//!
//! [`CliFormattingError`]: cli_formatting_core::CliFormattingError

pub mod failure;
mod macros;
pub mod suite;

pub use failure::ConformanceFailure;
pub use suite::{
    CONTROL_CHARACTER_MESSAGE, ConformanceSuite, MULTILINE_UNICODE_MESSAGE, RAISE_MESSAGE,
    SPECIFIED_MESSAGE, intercept,
};
