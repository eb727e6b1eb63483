//! Twelve life stages (sibiunseong) of a stem across the branches.
//!
//! Each stem is "born" (장생) at a fixed branch. Yang stems then advance
//! forward through the branches, yin stems backward.

use crate::branch::Branch;
use crate::stem::Stem;

/// The twelve stages in order from birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TwelveStage {
    Jangsaeng,
    Mogyok,
    Gwandae,
    Geonrok,
    Jewang,
    Soe,
    Byeong,
    Sa,
    Myo,
    Jeol,
    Tae,
    Yang,
}

pub const ALL_TWELVE_STAGES: [TwelveStage; 12] = [
    TwelveStage::Jangsaeng,
    TwelveStage::Mogyok,
    TwelveStage::Gwandae,
    TwelveStage::Geonrok,
    TwelveStage::Jewang,
    TwelveStage::Soe,
    TwelveStage::Byeong,
    TwelveStage::Sa,
    TwelveStage::Myo,
    TwelveStage::Jeol,
    TwelveStage::Tae,
    TwelveStage::Yang,
];

const KOREAN: [&str; 12] = [
    "장생", "목욕", "관대", "건록", "제왕", "쇠", "병", "사", "묘", "절", "태", "양",
];
const HANJA: [&str; 12] = [
    "長生", "沐浴", "冠帶", "建祿", "帝旺", "衰", "病", "死", "墓", "絶", "胎", "養",
];

impl TwelveStage {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn korean(self) -> &'static str {
        KOREAN[self.index() as usize]
    }

    pub fn hanja(self) -> &'static str {
        HANJA[self.index() as usize]
    }
}

/// Branch where `stem` is at 장생.
///
/// Earth stems follow fire: 戊 with 丙, 己 with 丁.
pub const fn birth_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Gap => Branch::Hae,
        Stem::Eul => Branch::O,
        Stem::Byeong | Stem::Mu => Branch::In,
        Stem::Jeong | Stem::Gi => Branch::Yu,
        Stem::Gyeong => Branch::Sa,
        Stem::Sin => Branch::Ja,
        Stem::Im => Branch::Sin,
        Stem::Gye => Branch::Myo,
    }
}

/// Life stage of `stem` at `branch`.
pub fn twelve_stage(stem: Stem, branch: Branch) -> TwelveStage {
    let start = i64::from(birth_branch(stem).index());
    let b = i64::from(branch.index());
    let steps = if stem.is_yang() { b - start } else { start - b };
    ALL_TWELVE_STAGES[steps.rem_euclid(12) as usize]
}
