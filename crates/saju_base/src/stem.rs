//! The ten heavenly stems (cheongan).
//!
//! Stems pair off by element in generating order: 甲乙 wood, 丙丁 fire,
//! 戊己 earth, 庚辛 metal, 壬癸 water. The first of each pair is yang.

use crate::element::{Element, Polarity};

/// The ten heavenly stems starting from 甲.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All ten stems in order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_STEMS.get(index as usize).copied()
    }

    /// Stem at `index` mod 10.
    pub fn wrapping(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    pub fn korean(self) -> &'static str {
        KOREAN[self.index() as usize]
    }

    pub fn hanja(self) -> &'static str {
        HANJA[self.index() as usize]
    }

    /// Parse a single Korean or hanja character.
    pub fn from_name(name: &str) -> Option<Self> {
        KOREAN
            .iter()
            .position(|&k| k == name)
            .or_else(|| HANJA.iter().position(|&h| h == name))
            .and_then(|i| Self::from_index(i as u8))
    }

    pub fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}
