//! Error types for civil date/time handling.

use thiserror::Error;

/// Errors from date/time parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Structurally impossible calendar date (e.g. Feb 30) or unparsable text.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Unparsable or out-of-range clock time.
    #[error("invalid time: {0}")]
    InvalidTime(String),
}
