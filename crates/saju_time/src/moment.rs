//! Local civil birth moment.
//!
//! A birth is recorded as a local calendar date, an optional clock time and
//! the zone offset that clock was set to. Two different views are derived
//! from it:
//! - the physical instant (JD UT / JD TT), used against solar-term
//!   boundaries; a longitude correction never moves it
//! - the effective local clock, shifted by the true-solar-time correction,
//!   used for day and hour boundaries

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::delta_t::delta_t_seconds;
use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Korean Standard Time, UTC+09:00.
pub const KST_OFFSET_MINUTES: i32 = 9 * 60;

/// Minutes into the day assumed when the birth time is unknown.
const UNKNOWN_TIME_MINUTES: u32 = 12 * 60;

/// Local civil date with an optional clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthMoment {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    /// Offset of the local clock from UTC, in minutes (KST = 540).
    pub utc_offset_minutes: i32,
}

impl BirthMoment {
    pub fn new(date: NaiveDate, time: Option<NaiveTime>, utc_offset_minutes: i32) -> Self {
        Self {
            date,
            time,
            utc_offset_minutes,
        }
    }

    /// Whether a clock time was supplied.
    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }

    fn local_minutes(&self) -> u32 {
        self.time
            .map(|t| t.hour() * 60 + t.minute())
            .unwrap_or(UNKNOWN_TIME_MINUTES)
    }

    /// Physical instant as JD UT. Unknown times are taken as local noon.
    pub fn jd_ut(&self) -> f64 {
        let minutes = self.local_minutes() as f64 - self.utc_offset_minutes as f64;
        calendar_to_jd(
            self.date.year(),
            self.date.month(),
            self.date.day() as f64 + minutes / 1440.0,
        )
    }

    /// Physical instant as JD TT (UT + ΔT).
    pub fn jd_tt(&self) -> f64 {
        let decimal_year = self.date.year() as f64 + (self.date.month() as f64 - 0.5) / 12.0;
        self.jd_ut() + delta_t_seconds(decimal_year) / 86_400.0
    }

    /// Local clock shifted by `longitude_offset_minutes`.
    ///
    /// `None` when no time was supplied: the correction cannot move a date
    /// whose time of day is unknown.
    pub fn effective_local(&self, longitude_offset_minutes: i32) -> Option<NaiveDateTime> {
        let time = self.time?;
        let local = self.date.and_time(time);
        Some(local + TimeDelta::minutes(i64::from(longitude_offset_minutes)))
    }
}

impl std::fmt::Display for BirthMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.utc_offset_minutes < 0 { '-' } else { '+' };
        let off = self.utc_offset_minutes.unsigned_abs();
        match self.time {
            Some(t) => write!(
                f,
                "{}T{}{}{:02}:{:02}",
                self.date,
                t.format("%H:%M"),
                sign,
                off / 60,
                off % 60
            ),
            None => write!(f, "{} (time unknown)", self.date),
        }
    }
}

/// Parse `YYYY-MM-DD` (or `YYYYMMDD`) into a validated civil date.
pub fn parse_date(text: &str) -> Result<NaiveDate, TimeError> {
    let s = text.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y%m%d"))
        .map_err(|_| TimeError::InvalidDate(s.to_string()))
}

/// Split `YYYY-MM-DD` (or `YYYYMMDD`) into numeric fields without civil
/// validation. Lunar dates such as the 30th of the 2nd month pass here and
/// are checked against the lunar table later.
pub fn parse_ymd(text: &str) -> Result<(i32, u32, u32), TimeError> {
    let s = text.trim();
    let invalid = || TimeError::InvalidDate(s.to_string());
    let (y, m, d) = match s.split('-').collect::<Vec<_>>().as_slice() {
        [y, m, d] => (*y, *m, *d),
        [compact] if compact.len() == 8 && compact.is_ascii() => {
            (&compact[..4], &compact[4..6], &compact[6..])
        }
        _ => return Err(invalid()),
    };
    let year = y.parse::<i32>().map_err(|_| invalid())?;
    let month = m.parse::<u32>().map_err(|_| invalid())?;
    let day = d.parse::<u32>().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }
    Ok((year, month, day))
}

/// Parse `HH:MM` or `HH:MM:SS`. Blank input means "time unknown".
pub fn parse_time(text: &str) -> Result<Option<NaiveTime>, TimeError> {
    let s = text.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map(Some)
        .map_err(|_| TimeError::InvalidTime(s.to_string()))
}
