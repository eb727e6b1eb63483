//! Time primitives for the saju engine.
//!
//! This crate provides:
//! - Julian Day conversions (integer day numbers and fractional JD)
//! - A ΔT (TT − UT) estimate for 1900–2150
//! - [`BirthMoment`], a local civil birth date/time with its UTC offset
//!
//! All functions are pure; nothing here reads the wall clock.

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod moment;

pub use delta_t::{delta_t_seconds, tt_to_ut};
pub use error::TimeError;
pub use julian::{
    J2000_JD, calendar_to_jd, date_from_jdn, jd_to_calendar, jd_to_centuries, jd_to_datetime,
    julian_day_number,
};
pub use moment::{BirthMoment, KST_OFFSET_MINUTES, parse_date, parse_time, parse_ymd};
