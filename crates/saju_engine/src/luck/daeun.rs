//! Decade luck (daeun).
//!
//! The sequence walks the sexagenary cycle from the month pillar, forward
//! for yang-year males and yin-year females, backward otherwise.

use chrono::Datelike;
use serde::Serialize;
use saju_base::Stem;
use saju_time::BirthMoment;
use tracing::debug;

use crate::error::SajuError;
use crate::input::Gender;
use crate::luck::balance::daeun_start_age;
use crate::luck::types::{Daeun, DaeunStep, LuckEntry};
use crate::pillar::FourPillarChart;

/// Direction of the daeun walk through the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Forward => "순행",
            Self::Backward => "역행",
        }
    }

    const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Direction from the year stem's polarity and the gender.
pub fn daeun_direction(year_stem: Stem, gender: Gender) -> LuckDirection {
    match (year_stem.is_yang(), gender) {
        (true, Gender::Male) | (false, Gender::Female) => LuckDirection::Forward,
        _ => LuckDirection::Backward,
    }
}

/// Project `steps` decades of luck.
pub fn project_daeun(
    chart: &FourPillarChart,
    gender: Gender,
    moment: &BirthMoment,
    steps: u8,
) -> Result<Daeun, SajuError> {
    let direction = daeun_direction(chart.year().stem(), gender);
    let (start_age_exact, start_age) =
        daeun_start_age(moment.jd_tt(), direction == LuckDirection::Forward)?;
    let birth_year = moment.date.year();

    let steps: Vec<DaeunStep> = (0..u32::from(steps))
        .map(|i| {
            let age = start_age + 10 * i;
            let gapja = chart.month().offset(direction.sign() * (i64::from(i) + 1));
            DaeunStep {
                age,
                start_year: birth_year + age as i32,
                entry: LuckEntry::read(chart, gapja),
            }
        })
        .collect();

    debug!(
        direction = direction.korean(),
        start_age_exact,
        start_age,
        steps = steps.len(),
        "daeun projected"
    );
    Ok(Daeun {
        direction,
        start_age_exact,
        steps,
    })
}
