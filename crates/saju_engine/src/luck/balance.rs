//! Starting age of the first daeun step.
//!
//! The distance from birth to the governing jeol term is converted at
//! three days per year: forward cycles count to the next jeol, backward
//! cycles count back to the previous one.

use saju_calendar::{CalendarError, next_jeol, prev_jeol};

/// Days of term distance per year of starting age.
pub const DAYS_PER_LUCK_YEAR: f64 = 3.0;

/// Bounds of the rounded starting age.
pub const START_AGE_RANGE: (u32, u32) = (1, 10);

/// Compute `(exact_age, rounded_age)` for a birth at `jd_tt`.
///
/// `rounded_age` is clamped to [`START_AGE_RANGE`].
pub fn daeun_start_age(jd_tt: f64, forward: bool) -> Result<(f64, u32), CalendarError> {
    let days = if forward {
        next_jeol(jd_tt)?.jd_tt - jd_tt
    } else {
        jd_tt - prev_jeol(jd_tt)?.jd_tt
    };
    let exact = days.max(0.0) / DAYS_PER_LUCK_YEAR;
    let rounded = (exact.round() as u32).clamp(START_AGE_RANGE.0, START_AGE_RANGE.1);
    Ok((exact, rounded))
}
