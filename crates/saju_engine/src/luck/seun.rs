//! Annual luck (seun): the year pillar of each saju year.

use std::ops::RangeInclusive;

use saju_base::year_gapja;

use crate::luck::types::{LuckEntry, SeunEntry};
use crate::pillar::FourPillarChart;

/// Years `before` ahead of and `after` past `reference_year`, clamped to the
/// `i32` range.
pub fn seun_window(reference_year: i32, before: u16, after: u16) -> RangeInclusive<i32> {
    reference_year.saturating_sub(i32::from(before))
        ..=reference_year.saturating_add(i32::from(after))
}

/// Annual luck for each year in `years`.
pub fn project_seun(chart: &FourPillarChart, years: RangeInclusive<i32>) -> Vec<SeunEntry> {
    years
        .map(|year| SeunEntry {
            year,
            entry: LuckEntry::read(chart, year_gapja(year)),
        })
        .collect()
}
