//! Monthly luck (woleun) for the twelve civil months of a year.
//!
//! Civil month m carries the saju month opened by the jeol term that falls
//! in it: sohan in January (丑 month of the previous saju year), ipchun in
//! February (寅 month), through daeseol in December (子 month).

use saju_base::{month_gapja, year_gapja};
use saju_calendar::{ALL_SOLAR_TERMS, CalendarError, jeol_month_index, term_in_year};

use crate::error::SajuError;
use crate::luck::types::{LuckEntry, WoleunEntry};
use crate::pillar::FourPillarChart;

/// Monthly luck for civil `year`, term times on a clock `utc_offset_minutes`
/// from UTC.
pub fn project_woleun(
    chart: &FourPillarChart,
    year: i32,
    utc_offset_minutes: i32,
) -> Result<Vec<WoleunEntry>, SajuError> {
    (1..=12u32)
        .map(|month| -> Result<WoleunEntry, SajuError> {
            let term = ALL_SOLAR_TERMS[(month as usize - 1) * 2];
            let event = term_in_year(year, term)?;
            let month_index = jeol_month_index(term.longitude());
            let saju_year = if month == 1 { year - 1 } else { year };
            let gapja = month_gapja(year_gapja(saju_year).stem(), month_index);
            let term_start = event.local_datetime(utc_offset_minutes).ok_or_else(|| {
                CalendarError::UnsupportedDateRange(format!("{} of {year}", term.korean()))
            })?;
            Ok(WoleunEntry {
                year,
                month,
                entry: LuckEntry::read(chart, gapja),
                term_start,
            })
        })
        .collect()
}
