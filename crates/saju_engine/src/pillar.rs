//! Four-pillar chart from a birth moment.
//!
//! Year and month pillars change at solar-term instants, so they are found
//! from the physical birth instant. Day and hour pillars follow the local
//! clock, optionally shifted to local mean solar time.

use chrono::{Datelike, NaiveDate, Timelike};
use saju_base::{Gapja, Stem, hour_slot, hour_stem, month_gapja, year_gapja};
use saju_calendar::{CalendarError, apparent_longitude, jeol_month_index};
use saju_time::{BirthMoment, julian_day_number};
use tracing::trace;

use crate::config::ZiHourMode;
use crate::error::SajuError;
use crate::position::Positions;

/// First and last civil years the solar-term model is trusted for.
pub const PILLAR_YEAR_RANGE: (i32, i32) = (1900, 2101);

/// Year, month, day and optional hour pillars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FourPillarChart {
    pub pillars: Positions<Gapja>,
    /// Saju year (begins at ipchun) the year pillar belongs to.
    pub saju_year: i32,
    /// Saju month index, 0 = 寅 month.
    pub month_index: u8,
}

impl FourPillarChart {
    pub fn year(&self) -> Gapja {
        self.pillars.year
    }

    pub fn month(&self) -> Gapja {
        self.pillars.month
    }

    pub fn day(&self) -> Gapja {
        self.pillars.day
    }

    pub fn hour(&self) -> Option<Gapja> {
        self.pillars.hour
    }

    pub fn day_master(&self) -> Stem {
        self.pillars.day.stem()
    }
}

/// Compute the four pillars.
///
/// `longitude_offset_minutes` shifts the clock used for day and hour
/// boundaries only; term boundaries always use the physical instant.
pub fn compute_pillars(
    moment: &BirthMoment,
    longitude_offset_minutes: i32,
    zi_mode: ZiHourMode,
) -> Result<FourPillarChart, SajuError> {
    let civil_year = moment.date.year();
    if civil_year < PILLAR_YEAR_RANGE.0 || civil_year > PILLAR_YEAR_RANGE.1 {
        return Err(CalendarError::UnsupportedDateRange(format!("solar {}", moment.date)).into());
    }

    let lon = apparent_longitude(moment.jd_tt());
    let month_index = jeol_month_index(lon);
    // 子 and 丑 months reaching into January/February belong to last year
    let saju_year = if month_index >= 10 && moment.date.month() <= 2 {
        civil_year - 1
    } else {
        civil_year
    };
    let year = year_gapja(saju_year);
    let month = month_gapja(year.stem(), month_index);

    let (day, hour) = match moment.effective_local(longitude_offset_minutes) {
        None => (day_gapja(moment.date), None),
        Some(local) => {
            let late_zi = local.hour() >= 23;
            let calendar_day = local.date();
            let next_day = calendar_day
                .succ_opt()
                .ok_or_else(|| CalendarError::UnsupportedDateRange(local.to_string()))?;
            let day = match zi_mode {
                ZiHourMode::EarlyZi if late_zi => day_gapja(next_day),
                _ => day_gapja(calendar_day),
            };
            let stem_day = if late_zi { day_gapja(next_day) } else { day };
            let branch = hour_slot(local.hour() * 60 + local.minute());
            let hour = Gapja::from_parts(hour_stem(stem_day.stem(), branch), branch)
                .ok_or_else(|| SajuError::InconsistentResult("hour stem parity".into()))?;
            (day, Some(hour))
        }
    };

    trace!(
        birth = %moment,
        solar_longitude = lon,
        saju_year,
        month_index,
        "pillars located"
    );

    Ok(FourPillarChart {
        pillars: Positions {
            year,
            month,
            day,
            hour,
        },
        saju_year,
        month_index,
    })
}

/// Day pillar of a local civil date.
pub fn day_gapja(date: NaiveDate) -> Gapja {
    Gapja::from_jdn(julian_day_number(date))
}
