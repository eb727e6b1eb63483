//! Lunar ⇄ solar date conversion.
//!
//! Conversion is table driven: each lunar year is one packed word (see
//! [`crate::lunar_data`]), and a date is located by counting days from the
//! table epoch. The table is a plain value so callers can inject another
//! reckoning (e.g. one derived from a national almanac) without touching the
//! algorithm.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use saju_time::{date_from_jdn, julian_day_number};

use crate::error::CalendarError;
use crate::lunar_data::{EPOCH_SOLAR_YMD, FIRST_LUNAR_YEAR, LUNAR_INFO};

/// JDN of lunar 1900-01-01 (solar 1900-01-31).
const EMBEDDED_EPOCH_JDN: i64 = 2_415_051;

/// A lunar calendar date. `is_leap` marks the intercalary month that shares
/// its number with the preceding ordinary month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, is_leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap,
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.is_leap {
            write!(f, " (leap)")?;
        }
        Ok(())
    }
}

/// Read-only lunisolar reference table.
#[derive(Debug, Clone, Copy)]
pub struct LunarTable {
    first_year: i32,
    words: &'static [u32],
    epoch_jdn: i64,
}

impl LunarTable {
    /// Table with a custom data source. `epoch_jdn` is the JDN of lunar
    /// `first_year`-01-01.
    pub const fn new(first_year: i32, words: &'static [u32], epoch_jdn: i64) -> Self {
        Self {
            first_year,
            words,
            epoch_jdn,
        }
    }

    /// The built-in 1900–2100 table.
    pub fn embedded() -> Self {
        Self::new(FIRST_LUNAR_YEAR, &LUNAR_INFO, EMBEDDED_EPOCH_JDN)
    }

    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    pub fn last_year(&self) -> i32 {
        self.first_year + self.words.len() as i32 - 1
    }

    fn word(&self, year: i32) -> Result<u32, CalendarError> {
        if year < self.first_year || year > self.last_year() {
            return Err(CalendarError::UnsupportedDateRange(format!(
                "lunar year {year} outside {}..={}",
                self.first_year,
                self.last_year()
            )));
        }
        Ok(self.words[(year - self.first_year) as usize])
    }

    /// Intercalary month of a lunar year, if any.
    pub fn leap_month(&self, year: i32) -> Result<Option<u32>, CalendarError> {
        let m = self.word(year)? & 0xf;
        Ok(if m == 0 { None } else { Some(m) })
    }

    /// Length (29 or 30) of ordinary month `month` of `year`.
    pub fn month_days(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidDate(format!("lunar month {month}")));
        }
        let word = self.word(year)?;
        Ok(if word & (0x10000 >> month) != 0 { 30 } else { 29 })
    }

    /// Length of the intercalary month of `year`, 0 if there is none.
    pub fn leap_month_days(&self, year: i32) -> Result<u32, CalendarError> {
        let word = self.word(year)?;
        Ok(match word & 0xf {
            0 => 0,
            _ if word & 0x10000 != 0 => 30,
            _ => 29,
        })
    }

    /// Number of days in lunar `year`, intercalary month included.
    pub fn year_days(&self, year: i32) -> Result<u32, CalendarError> {
        let mut total = self.leap_month_days(year)?;
        for month in 1..=12 {
            total += self.month_days(year, month)?;
        }
        Ok(total)
    }

    /// First solar date the table can convert.
    pub fn first_solar_date(&self) -> Option<NaiveDate> {
        date_from_jdn(self.epoch_jdn)
    }

    /// Last solar date the table can convert.
    pub fn last_solar_date(&self) -> Option<NaiveDate> {
        let mut days = 0i64;
        for year in self.first_year..=self.last_year() {
            days += i64::from(self.year_days(year).ok()?);
        }
        date_from_jdn(self.epoch_jdn + days - 1)
    }
}

impl Default for LunarTable {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Convert a lunar date to its solar (Gregorian) date.
pub fn to_solar(table: &LunarTable, date: LunarDate) -> Result<NaiveDate, CalendarError> {
    let leap = table.leap_month(date.year)?;
    if !(1..=12).contains(&date.month) {
        return Err(CalendarError::InvalidDate(format!("lunar {date}")));
    }
    if date.is_leap && leap != Some(date.month) {
        return Err(CalendarError::InvalidIntercalationFlag {
            year: date.year,
            month: date.month,
        });
    }

    let len = if date.is_leap {
        table.leap_month_days(date.year)?
    } else {
        table.month_days(date.year, date.month)?
    };
    if date.day == 0 || date.day > len {
        return Err(CalendarError::InvalidDate(format!(
            "lunar {date}: month has {len} days"
        )));
    }

    let mut offset = 0i64;
    for year in table.first_year()..date.year {
        offset += i64::from(table.year_days(year)?);
    }
    for month in 1..date.month {
        offset += i64::from(table.month_days(date.year, month)?);
        if leap == Some(month) {
            offset += i64::from(table.leap_month_days(date.year)?);
        }
    }
    if date.is_leap {
        offset += i64::from(table.month_days(date.year, date.month)?);
    }
    offset += i64::from(date.day - 1);

    date_from_jdn(table.epoch_jdn + offset)
        .ok_or_else(|| CalendarError::UnsupportedDateRange(format!("lunar {date}")))
}

/// Convert a solar (Gregorian) date to its lunar date.
pub fn to_lunar(table: &LunarTable, solar: NaiveDate) -> Result<LunarDate, CalendarError> {
    let out_of_range = || CalendarError::UnsupportedDateRange(format!("solar {solar}"));

    let mut offset = julian_day_number(solar) - table.epoch_jdn;
    if offset < 0 {
        return Err(out_of_range());
    }

    let mut year = table.first_year();
    loop {
        if year > table.last_year() {
            return Err(out_of_range());
        }
        let days = i64::from(table.year_days(year)?);
        if offset < days {
            break;
        }
        offset -= days;
        year += 1;
    }

    let leap = table.leap_month(year)?;
    for month in 1..=12 {
        let days = i64::from(table.month_days(year, month)?);
        if offset < days {
            return Ok(LunarDate::new(year, month, offset as u32 + 1, false));
        }
        offset -= days;
        if leap == Some(month) {
            let days = i64::from(table.leap_month_days(year)?);
            if offset < days {
                return Ok(LunarDate::new(year, month, offset as u32 + 1, true));
            }
            offset -= days;
        }
    }
    // year_days is the exact sum of the months walked above
    Err(out_of_range())
}

/// Solar date of lunar `first_year`-01-01 for the embedded table.
pub fn embedded_epoch() -> (i32, u32, u32) {
    EPOCH_SOLAR_YMD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_matches_table_comment() {
        let (y, m, d) = embedded_epoch();
        let t = LunarTable::embedded();
        assert_eq!(t.first_solar_date(), Some(ymd(y, m, d)));
    }

    #[test]
    fn lunar_new_year_2024() {
        let t = LunarTable::embedded();
        let solar = to_solar(&t, LunarDate::new(2024, 1, 1, false)).unwrap();
        assert_eq!(solar, ymd(2024, 2, 10));
    }

    #[test]
    fn lunar_new_year_1990() {
        let t = LunarTable::embedded();
        assert_eq!(
            to_lunar(&t, ymd(1990, 1, 27)).unwrap(),
            LunarDate::new(1990, 1, 1, false)
        );
        // Day before is the last day of lunar 1989-12
        let prev = to_lunar(&t, ymd(1990, 1, 26)).unwrap();
        assert_eq!((prev.year, prev.month), (1989, 12));
    }

    #[test]
    fn leap_months_known_years() {
        let t = LunarTable::embedded();
        assert_eq!(t.leap_month(2023).unwrap(), Some(2));
        assert_eq!(t.leap_month(2020).unwrap(), Some(4));
        assert_eq!(t.leap_month(1990).unwrap(), Some(5));
        assert_eq!(t.leap_month(2024).unwrap(), None);
    }

    #[test]
    fn leap_month_follows_ordinary_month() {
        let t = LunarTable::embedded();
        let ordinary = to_solar(&t, LunarDate::new(2023, 2, 1, false)).unwrap();
        let leap = to_solar(&t, LunarDate::new(2023, 2, 1, true)).unwrap();
        let days = t.month_days(2023, 2).unwrap() as i64;
        assert_eq!((leap - ordinary).num_days(), days);
        assert_eq!(to_lunar(&t, leap).unwrap(), LunarDate::new(2023, 2, 1, true));
    }

    #[test]
    fn rejects_missing_intercalary_month() {
        let t = LunarTable::embedded();
        let err = to_solar(&t, LunarDate::new(2023, 3, 15, true)).unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidIntercalationFlag {
                year: 2023,
                month: 3
            }
        );
        let err = to_solar(&t, LunarDate::new(2024, 1, 1, true)).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidIntercalationFlag { .. }));
    }

    #[test]
    fn rejects_day_past_month_end() {
        let t = LunarTable::embedded();
        let year = 2024;
        let short = (1..=12).find(|&m| t.month_days(year, m).unwrap() == 29).unwrap();
        let err = to_solar(&t, LunarDate::new(year, short, 30, false)).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDate(_)));
        let err = to_solar(&t, LunarDate::new(year, 13, 1, false)).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDate(_)));
    }

    #[test]
    fn rejects_out_of_range() {
        let t = LunarTable::embedded();
        assert!(matches!(
            to_solar(&t, LunarDate::new(1899, 1, 1, false)),
            Err(CalendarError::UnsupportedDateRange(_))
        ));
        assert!(matches!(
            to_lunar(&t, ymd(1900, 1, 30)),
            Err(CalendarError::UnsupportedDateRange(_))
        ));
        assert!(matches!(
            to_lunar(&t, ymd(2101, 1, 29)),
            Err(CalendarError::UnsupportedDateRange(_))
        ));
    }

    #[test]
    fn last_solar_date_is_end_of_lunar_2100() {
        let t = LunarTable::embedded();
        let last = t.last_solar_date().unwrap();
        assert_eq!(last, ymd(2101, 1, 28));
        let l = to_lunar(&t, last).unwrap();
        assert_eq!((l.year, l.month), (2100, 12));
    }

    #[test]
    fn year_lengths_are_plausible() {
        let t = LunarTable::embedded();
        for year in t.first_year()..=t.last_year() {
            let days = t.year_days(year).unwrap();
            if t.leap_month(year).unwrap().is_some() {
                assert!((383..=385).contains(&days), "{year}: {days}");
            } else {
                assert!((353..=355).contains(&days), "{year}: {days}");
            }
        }
    }
}
