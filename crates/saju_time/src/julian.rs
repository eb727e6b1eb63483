//! Julian Day conversions for the proleptic Gregorian calendar.
//!
//! Fractional JD follows Meeus, *Astronomical Algorithms* ch. 7. Integer
//! day numbers (JDN) are derived from `chrono`'s day count so that day
//! offsets between civil dates are exact.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

/// JD of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// JDN of 0001-01-01 minus one; `chrono` counts that day as 1.
const CE_JDN_OFFSET: i64 = 1_721_425;

/// Julian Day Number (integer, noon-based) of a civil date.
pub fn julian_day_number(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 + CE_JDN_OFFSET
}

/// Civil date for a Julian Day Number. `None` if outside chrono's range.
pub fn date_from_jdn(jdn: i64) -> Option<NaiveDate> {
    let days = i32::try_from(jdn - CE_JDN_OFFSET).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days)
}

/// Fractional Julian Date for a Gregorian calendar date.
///
/// `day_frac` carries the time of day, e.g. 1.5 = the 1st at 12:00.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Inverse of [`calendar_to_jd`]: returns `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;
    (year, month, day_frac)
}

/// Civil date-time for a fractional JD, rounded to the second.
pub fn jd_to_datetime(jd: f64) -> Option<NaiveDateTime> {
    let (year, month, day_frac) = jd_to_calendar(jd);
    let day = day_frac.floor();
    let seconds = ((day_frac - day) * 86_400.0).round() as i64;
    let midnight = NaiveDate::from_ymd_opt(year, month, day as u32)?.and_hms_opt(0, 0, 0)?;
    Some(midnight + TimeDelta::seconds(seconds))
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}
