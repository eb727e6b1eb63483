//! Sinsal: the twelve spirit-killers and the special stars.
//!
//! The twelve sinsal are read from a reference branch (year or day branch).
//! Its three-harmony group fixes where 겁살 falls; the other eleven follow
//! in branch order. Special sinsal depend on the day stem or on a pillar's
//! own stem-branch pair.

use crate::branch::Branch;
use crate::gapja::Gapja;
use crate::stem::Stem;

/// The twelve sinsal in cycle order starting from 겁살.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Sinsal {
    Geopsal,
    Jaesal,
    Cheonsal,
    Jisal,
    Yeonsal,
    Wolsal,
    Mangsinsal,
    Jangseongsal,
    Bananssal,
    Yeokmasal,
    Yukhaesal,
    Hwagaesal,
}

pub const ALL_SINSAL: [Sinsal; 12] = [
    Sinsal::Geopsal,
    Sinsal::Jaesal,
    Sinsal::Cheonsal,
    Sinsal::Jisal,
    Sinsal::Yeonsal,
    Sinsal::Wolsal,
    Sinsal::Mangsinsal,
    Sinsal::Jangseongsal,
    Sinsal::Bananssal,
    Sinsal::Yeokmasal,
    Sinsal::Yukhaesal,
    Sinsal::Hwagaesal,
];

const KOREAN: [&str; 12] = [
    "겁살", "재살", "천살", "지살", "연살", "월살", "망신살", "장성살", "반안살", "역마살",
    "육해살", "화개살",
];
const HANJA: [&str; 12] = [
    "劫煞", "災煞", "天煞", "地煞", "年煞", "月煞", "亡身煞", "將星煞", "攀鞍煞", "驛馬煞",
    "六害煞", "華蓋煞",
];

impl Sinsal {
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

/// Branch of 지살 (the group's birth branch) for a reference branch.
///
/// 申子辰 → 申, 巳酉丑 → 巳, 寅午戌 → 寅, 亥卯未 → 亥.
fn jisal_branch(reference: Branch) -> i64 {
    (8 - 3 * i64::from(reference.trine_group())).rem_euclid(12)
}

/// Twelve-sinsal of `target` as seen from `reference`.
pub fn sinsal12(reference: Branch, target: Branch) -> Sinsal {
    let geopsal = jisal_branch(reference) - 3;
    ALL_SINSAL[(i64::from(target.index()) - geopsal).rem_euclid(12) as usize]
}

/// Special sinsal outside the twelve-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialSinsal {
    /// 천을귀인, by day stem.
    CheoneulGwiin,
    /// 문창귀인, by day stem.
    MunchangGwiin,
    /// 양인살, by yang day stem.
    Yangin,
    /// 홍염살, by day stem.
    Hongyeom,
    /// 백호살, by the pillar's own pair.
    Baekho,
    /// 괴강살, by the pillar's own pair.
    Goegang,
    /// 도화살, alias of 연살.
    Dohwa,
}

impl SpecialSinsal {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::CheoneulGwiin => "천을귀인",
            Self::MunchangGwiin => "문창귀인",
            Self::Yangin => "양인살",
            Self::Hongyeom => "홍염살",
            Self::Baekho => "백호살",
            Self::Goegang => "괴강살",
            Self::Dohwa => "도화살",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::CheoneulGwiin => "天乙貴人",
            Self::MunchangGwiin => "文昌貴人",
            Self::Yangin => "羊刃煞",
            Self::Hongyeom => "紅艶煞",
            Self::Baekho => "白虎煞",
            Self::Goegang => "魁罡煞",
            Self::Dohwa => "桃花煞",
        }
    }
}

fn cheoneul_branches(day: Stem) -> [Branch; 2] {
    match day {
        Stem::Gap | Stem::Mu | Stem::Gyeong => [Branch::Chuk, Branch::Mi],
        Stem::Eul | Stem::Gi => [Branch::Ja, Branch::Sin],
        Stem::Byeong | Stem::Jeong => [Branch::Hae, Branch::Yu],
        Stem::Sin => [Branch::In, Branch::O],
        Stem::Im | Stem::Gye => [Branch::Sa, Branch::Myo],
    }
}

fn munchang_branch(day: Stem) -> Branch {
    match day {
        Stem::Gap => Branch::Sa,
        Stem::Eul => Branch::O,
        Stem::Byeong | Stem::Mu => Branch::Sin,
        Stem::Jeong | Stem::Gi => Branch::Yu,
        Stem::Gyeong => Branch::Hae,
        Stem::Sin => Branch::Ja,
        Stem::Im => Branch::In,
        Stem::Gye => Branch::Myo,
    }
}

fn yangin_branch(day: Stem) -> Option<Branch> {
    match day {
        Stem::Gap => Some(Branch::Myo),
        Stem::Byeong | Stem::Mu => Some(Branch::O),
        Stem::Gyeong => Some(Branch::Yu),
        Stem::Im => Some(Branch::Ja),
        _ => None,
    }
}

fn hongyeom_branch(day: Stem) -> Branch {
    match day {
        Stem::Gap | Stem::Eul => Branch::O,
        Stem::Byeong => Branch::In,
        Stem::Jeong => Branch::Mi,
        Stem::Mu | Stem::Gi => Branch::Jin,
        Stem::Gyeong => Branch::Sul,
        Stem::Sin => Branch::Yu,
        Stem::Im => Branch::Ja,
        Stem::Gye => Branch::Sin,
    }
}

/// 甲辰 乙未 丙戌 丁丑 戊辰 壬戌 癸丑.
const BAEKHO: [(Stem, Branch); 7] = [
    (Stem::Gap, Branch::Jin),
    (Stem::Eul, Branch::Mi),
    (Stem::Byeong, Branch::Sul),
    (Stem::Jeong, Branch::Chuk),
    (Stem::Mu, Branch::Jin),
    (Stem::Im, Branch::Sul),
    (Stem::Gye, Branch::Chuk),
];

/// 庚辰 庚戌 壬辰 壬戌 戊戌.
const GOEGANG: [(Stem, Branch); 5] = [
    (Stem::Gyeong, Branch::Jin),
    (Stem::Gyeong, Branch::Sul),
    (Stem::Im, Branch::Jin),
    (Stem::Im, Branch::Sul),
    (Stem::Mu, Branch::Sul),
];

/// Special sinsal carried by `pillar` for a chart with day stem `day`.
pub fn special_sinsal(day: Stem, pillar: Gapja) -> Vec<SpecialSinsal> {
    let branch = pillar.branch();
    let pair = (pillar.stem(), branch);
    let mut out = Vec::new();
    if cheoneul_branches(day).contains(&branch) {
        out.push(SpecialSinsal::CheoneulGwiin);
    }
    if munchang_branch(day) == branch {
        out.push(SpecialSinsal::MunchangGwiin);
    }
    if yangin_branch(day) == Some(branch) {
        out.push(SpecialSinsal::Yangin);
    }
    if hongyeom_branch(day) == branch {
        out.push(SpecialSinsal::Hongyeom);
    }
    if BAEKHO.contains(&pair) {
        out.push(SpecialSinsal::Baekho);
    }
    if GOEGANG.contains(&pair) {
        out.push(SpecialSinsal::Goegang);
    }
    out
}
