//! Canonical solar/lunar pair for a birth date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CalendarError;
use crate::lunar::{LunarDate, LunarTable, to_lunar, to_solar};

/// Which calendar the caller's date is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    #[default]
    Solar,
    Lunar,
}

impl CalendarType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::Lunar => "lunar",
        }
    }
}

impl std::str::FromStr for CalendarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solar" | "양력" => Ok(Self::Solar),
            "lunar" | "음력" => Ok(Self::Lunar),
            other => Err(format!("unknown calendar type {other:?}")),
        }
    }
}

/// Solar date with its lunar equivalent. Always carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarConversion {
    pub solar: NaiveDate,
    pub lunar: LunarDate,
}

/// Resolve a caller-supplied date into both calendars.
///
/// For solar input the leap flag is meaningless and ignored. For lunar
/// input the numeric year/month/day of `date` are read as lunar fields.
pub fn convert(
    table: &LunarTable,
    calendar_type: CalendarType,
    date: NaiveDate,
    is_intercalation: bool,
) -> Result<CalendarConversion, CalendarError> {
    convert_fields(
        table,
        calendar_type,
        date.year(),
        date.month(),
        date.day(),
        is_intercalation,
    )
}

/// As [`convert`], from raw fields. Lunar day 30 of February is a valid
/// lunar date even though it is no valid solar one, so lunar input must not
/// go through civil validation first.
pub fn convert_fields(
    table: &LunarTable,
    calendar_type: CalendarType,
    year: i32,
    month: u32,
    day: u32,
    is_intercalation: bool,
) -> Result<CalendarConversion, CalendarError> {
    let conversion = match calendar_type {
        CalendarType::Solar => {
            if is_intercalation {
                warn!(year, month, day, "intercalation flag ignored for solar input");
            }
            let solar = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                CalendarError::InvalidDate(format!("solar {year:04}-{month:02}-{day:02}"))
            })?;
            let lunar = to_lunar(table, solar)?;
            CalendarConversion { solar, lunar }
        }
        CalendarType::Lunar => {
            let lunar = LunarDate::new(year, month, day, is_intercalation);
            let solar = to_solar(table, lunar)?;
            CalendarConversion { solar, lunar }
        }
    };
    debug!(
        calendar = calendar_type.name(),
        solar = %conversion.solar,
        lunar = %conversion.lunar,
        "calendar conversion"
    );
    Ok(conversion)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn solar_input_is_echoed() {
        let t = LunarTable::embedded();
        let c = convert(&t, CalendarType::Solar, ymd(1990, 1, 1), false).unwrap();
        assert_eq!(c.solar, ymd(1990, 1, 1));
        assert_eq!(c.lunar, LunarDate::new(1989, 12, 5, false));
    }

    #[test]
    fn solar_input_ignores_leap_flag() {
        let t = LunarTable::embedded();
        let a = convert(&t, CalendarType::Solar, ymd(2023, 3, 15), true).unwrap();
        let b = convert(&t, CalendarType::Solar, ymd(2023, 3, 15), false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn lunar_input_with_bad_leap_flag() {
        let t = LunarTable::embedded();
        let err = convert_fields(&t, CalendarType::Lunar, 2023, 3, 15, true).unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidIntercalationFlag {
                year: 2023,
                month: 3
            }
        );
    }

    #[test]
    fn lunar_day_thirty_of_second_month() {
        let t = LunarTable::embedded();
        let year = (1990..2030)
            .find(|&y| t.month_days(y, 2).unwrap() == 30)
            .unwrap();
        let c = convert_fields(&t, CalendarType::Lunar, year, 2, 30, false).unwrap();
        assert_eq!(c.lunar, LunarDate::new(year, 2, 30, false));
    }

    #[test]
    fn solar_feb_30_is_invalid() {
        let t = LunarTable::embedded();
        let err = convert_fields(&t, CalendarType::Solar, 2023, 2, 30, false).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDate(_)));
    }

    #[test]
    fn calendar_type_parses() {
        assert_eq!("Solar".parse::<CalendarType>().unwrap(), CalendarType::Solar);
        assert_eq!("lunar".parse::<CalendarType>().unwrap(), CalendarType::Lunar);
        assert_eq!("음력".parse::<CalendarType>().unwrap(), CalendarType::Lunar);
        assert!("julian".parse::<CalendarType>().is_err());
    }
}
