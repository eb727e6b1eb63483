//! Error types for the saju pipeline.

use saju_calendar::CalendarError;
use saju_time::TimeError;
use thiserror::Error;

/// Errors from chart computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Lunar/solar conversion or solar-term failure.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// Date or time string failed to parse.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Request field with an unrecognized value.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Configuration rejected by validation or TOML parsing.
    #[error("invalid config: {0}")]
    Config(String),
    /// Assembled result violates a structural invariant.
    #[error("inconsistent result: {0}")]
    InconsistentResult(String),
}

/// Coarse error classes reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SajuErrorKind {
    InvalidDate,
    UnsupportedDateRange,
    InvalidIntercalationFlag,
    InvalidInput,
    Config,
    InconsistentResult,
    Internal,
}

impl SajuError {
    pub fn kind(&self) -> SajuErrorKind {
        match self {
            Self::Calendar(CalendarError::InvalidDate(_))
            | Self::Time(TimeError::InvalidDate(_)) => SajuErrorKind::InvalidDate,
            Self::Calendar(CalendarError::UnsupportedDateRange(_)) => {
                SajuErrorKind::UnsupportedDateRange
            }
            Self::Calendar(CalendarError::InvalidIntercalationFlag { .. }) => {
                SajuErrorKind::InvalidIntercalationFlag
            }
            Self::Time(_) | Self::InvalidInput(_) => SajuErrorKind::InvalidInput,
            Self::Config(_) => SajuErrorKind::Config,
            Self::InconsistentResult(_) => SajuErrorKind::InconsistentResult,
            Self::Calendar(_) => SajuErrorKind::Internal,
        }
    }

    /// Whether the caller can fix this by changing the request.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind(),
            SajuErrorKind::InvalidDate
                | SajuErrorKind::UnsupportedDateRange
                | SajuErrorKind::InvalidIntercalationFlag
                | SajuErrorKind::InvalidInput
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intercalation_is_a_user_error() {
        let e = SajuError::from(CalendarError::InvalidIntercalationFlag {
            year: 2023,
            month: 3,
        });
        assert_eq!(e.kind(), SajuErrorKind::InvalidIntercalationFlag);
        assert!(e.is_user_error());
        assert_eq!(e.to_string(), "lunar year 2023 has no intercalary month 3");
    }

    #[test]
    fn convergence_failure_is_internal() {
        let e = SajuError::from(CalendarError::NoConvergence("solar longitude crossing"));
        assert_eq!(e.kind(), SajuErrorKind::Internal);
        assert!(!e.is_user_error());
    }

    #[test]
    fn time_errors_classify() {
        let e = SajuError::from(TimeError::InvalidDate("2023-02-30".into()));
        assert_eq!(e.kind(), SajuErrorKind::InvalidDate);
        let e = SajuError::from(TimeError::InvalidTime("25:00".into()));
        assert_eq!(e.kind(), SajuErrorKind::InvalidInput);
    }

    #[test]
    fn calendar_invalid_date_is_user_error() {
        let e = SajuError::from(CalendarError::InvalidDate("lunar 2023-01-30".into()));
        assert_eq!(e.kind(), SajuErrorKind::InvalidDate);
        assert!(e.is_user_error());
    }

    #[test]
    fn inconsistent_result_is_not_user_error() {
        let e = SajuError::InconsistentResult("hour".into());
        assert!(!e.is_user_error());
    }
}
