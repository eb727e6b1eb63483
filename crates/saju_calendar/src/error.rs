//! Error types for calendar conversion and solar-term search.

use thiserror::Error;

/// Errors from lunar/solar conversion or solar-term lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Structurally impossible calendar date (e.g. lunar day 30 of a 29-day month).
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Date outside the embedded lunar table.
    #[error("date outside supported range: {0}")]
    UnsupportedDateRange(String),
    /// Leap flag set for a month that is not that year's intercalary month.
    #[error("lunar year {year} has no intercalary month {month}")]
    InvalidIntercalationFlag { year: i32, month: u32 },
    /// Iterative solar-term search did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
}
