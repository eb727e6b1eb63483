//! Calendar layer of the saju engine.
//!
//! This crate provides:
//! - Table-driven lunar ⇄ solar conversion for lunar years 1900–2100,
//!   including intercalary (leap) months
//! - Apparent solar longitude from a truncated VSOP87 series
//! - The 24 solar terms and search for the instant each one begins
//!
//! Everything is pure; the lunar table is an immutable value passed in by
//! the caller.

pub mod conversion;
pub mod error;
pub mod lunar;
pub mod lunar_data;
pub mod solar_term;
pub mod sun;

pub use conversion::{CalendarConversion, CalendarType, convert, convert_fields};
pub use error::CalendarError;
pub use lunar::{LunarDate, LunarTable, embedded_epoch, to_lunar, to_solar};
pub use solar_term::{
    ALL_SOLAR_TERMS, IPCHUN_LONGITUDE, SolarTerm, SolarTermEvent, TROPICAL_YEAR_DAYS,
    find_longitude_crossing, jeol_month_index, next_jeol, prev_jeol, term_in_year, terms_of_year,
};
pub use sun::apparent_longitude;
