//! Error types for the expansion engine.
//!
//! Expansion itself is total: every abbreviation produces some output, and
//! malformed input selects a fallback rather than an error. The one
//! fallible operation is resolving a language tag up front.

use thiserror::Error;

/// A language tag that [`Language`](crate::Language) does not recognize.
///
/// Returned by `Language::from_str`. The untyped [`expand`](crate::expand)
/// entry point never surfaces this; it treats an unknown tag as a request
/// to pass the abbreviation through unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown language tag: {0}")]
pub struct UnknownLanguageError(pub String);
