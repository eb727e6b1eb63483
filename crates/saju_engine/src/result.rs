//! Persisted result shape.
//!
//! Field names and nesting are a compatibility surface: stored rows are
//! read back by other services, so keys are camelCase and absent values
//! are written as `null` rather than omitted.

use chrono::NaiveDateTime;
use serde::Serialize;
use saju_calendar::{CalendarType, LunarDate};

use crate::luck::LuckDirection;
use crate::position::{PillarPosition, Positions};

/// Full saju result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SajuResult {
    pub calendar_type: CalendarType,
    pub is_intercalation: bool,
    pub solar: SolarYmd,
    pub lunar: LunarDate,
    pub gapja_korean: Positions<String>,
    pub gapja_chinese: Positions<String>,
    pub ohang: Ohang,
    pub sipseong: Positions<Sipseong>,
    pub unseong12: Positions<String>,
    pub cheongan_relation: Positions<Vec<StemRelationOut>>,
    pub jiji_relation: Positions<Vec<BranchRelationOut>>,
    pub sinsal12: Positions<String>,
    pub sinsal_combined: Positions<Vec<String>>,
    pub daeun: DaeunOut,
    pub seun: Vec<SeunOut>,
    pub woleun: Vec<WoleunOut>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarYmd {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Element counts keyed by their Korean names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Distribution {
    #[serde(rename = "목")]
    pub wood: u8,
    #[serde(rename = "화")]
    pub fire: u8,
    #[serde(rename = "토")]
    pub earth: u8,
    #[serde(rename = "금")]
    pub metal: u8,
    #[serde(rename = "수")]
    pub water: u8,
}

impl Distribution {
    pub fn total(&self) -> u32 {
        [self.wood, self.fire, self.earth, self.metal, self.water]
            .iter()
            .map(|&n| u32::from(n))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ohang {
    pub distribution: Distribution,
    /// Day stem with its element, e.g. "병화".
    pub day_master: String,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sipseong {
    pub ko: String,
    pub hanja: String,
    pub ji_ko: String,
    pub ji_hanja: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StemRelationOut {
    #[serde(rename = "type")]
    pub kind: String,
    pub type_ko: String,
    pub with_stem: String,
    pub with_position: PillarPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRelationOut {
    #[serde(rename = "type")]
    pub kind: String,
    pub type_ko: String,
    pub with_branch: String,
    pub with_position: PillarPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaeunOut {
    pub direction: LuckDirection,
    pub start_age_exact: f64,
    pub steps: Vec<DaeunStepOut>,
}

/// Fields shared by every luck entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckFields {
    pub gapja: String,
    pub gapja_ko: String,
    pub sipseong: String,
    pub sipseong_ji: String,
    pub sinsal: String,
    pub unseong12: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaeunStepOut {
    pub age: u32,
    pub start_year: i32,
    #[serde(flatten)]
    pub luck: LuckFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeunOut {
    pub year: i32,
    #[serde(flatten)]
    pub luck: LuckFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WoleunOut {
    pub month: u32,
    #[serde(flatten)]
    pub luck: LuckFields,
    pub term_start: NaiveDateTime,
}
