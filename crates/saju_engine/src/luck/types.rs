//! Core types shared by the luck-cycle projections.

use chrono::NaiveDateTime;
use saju_base::{
    Gapja, Sinsal, TenGod, TwelveStage, sinsal12, ten_god, ten_god_of_branch, twelve_stage,
};

use crate::luck::daeun::LuckDirection;
use crate::pillar::FourPillarChart;

/// A luck gapja read against the natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckEntry {
    pub gapja: Gapja,
    /// Ten god of the stem.
    pub ten_god: TenGod,
    /// Ten god of the branch, through its principal hidden stem.
    pub branch_ten_god: TenGod,
    /// Twelve sinsal relative to the natal year branch.
    pub sinsal: Sinsal,
    /// Day master's life stage at the branch.
    pub twelve_stage: TwelveStage,
}

impl LuckEntry {
    pub fn read(chart: &FourPillarChart, gapja: Gapja) -> Self {
        let day = chart.day_master();
        Self {
            gapja,
            ten_god: ten_god(day, gapja.stem()),
            branch_ten_god: ten_god_of_branch(day, gapja.branch()),
            sinsal: sinsal12(chart.year().branch(), gapja.branch()),
            twelve_stage: twelve_stage(day, gapja.branch()),
        }
    }
}

/// One decade of the daeun sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaeunStep {
    /// Age (in years) at which the step begins.
    pub age: u32,
    /// Civil year in which the step begins.
    pub start_year: i32,
    pub entry: LuckEntry,
}

/// The decade luck sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Daeun {
    pub direction: LuckDirection,
    /// Days to the governing jeol term divided by three, unrounded.
    pub start_age_exact: f64,
    pub steps: Vec<DaeunStep>,
}

/// Annual luck for one saju year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeunEntry {
    pub year: i32,
    pub entry: LuckEntry,
}

/// Monthly luck for one civil month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WoleunEntry {
    pub year: i32,
    /// Civil month 1..=12.
    pub month: u32,
    pub entry: LuckEntry,
    /// Local time of the jeol term that opens this saju month.
    pub term_start: NaiveDateTime,
}
