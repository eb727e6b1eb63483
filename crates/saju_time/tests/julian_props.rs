//! Julian Day conversions hold across the supported span.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use saju_time::{calendar_to_jd, date_from_jdn, jd_to_calendar, julian_day_number};

proptest! {
    #[test]
    fn jdn_round_trip(days in 0i32..80_000) {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Days::new(days as u64);
        prop_assert_eq!(date_from_jdn(julian_day_number(date)), Some(date));
    }

    #[test]
    fn fractional_jd_agrees_with_jdn(days in 0i32..80_000, frac in 0.001f64..0.999) {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Days::new(days as u64);
        let jd = calendar_to_jd(date.year(), date.month(), date.day() as f64 + frac);
        // JDN names the day whose noon falls inside it
        prop_assert_eq!((jd + 0.5).floor() as i64, julian_day_number(date));
        let (y, m, d) = jd_to_calendar(jd);
        prop_assert_eq!((y, m, d.floor() as u32), (date.year(), date.month(), date.day()));
    }
}
