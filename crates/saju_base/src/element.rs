//! The five elements (ohang) and yin/yang polarity.
//!
//! Elements are ordered along the generating cycle: wood → fire → earth →
//! metal → water → wood. With that order, the element an element generates
//! is the next one and the element it controls is two steps ahead.

use serde::{Deserialize, Serialize};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order (0 = wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_ELEMENTS.get(index as usize).copied()
    }

    /// Korean reading: 목 화 토 금 수.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Element this one generates (wood → fire).
    pub fn generates(self) -> Self {
        ALL_ELEMENTS[(self.index() as usize + 1) % 5]
    }

    /// Element this one controls (wood → earth).
    pub fn controls(self) -> Self {
        ALL_ELEMENTS[(self.index() as usize + 2) % 5]
    }

    /// Steps from `self` to `other` along the generating cycle, 0..5.
    pub fn steps_to(self, other: Self) -> u8 {
        (other.index() + 5 - self.index()) % 5
    }
}

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of the n-th stem or branch: even indices are yang.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Yin => "음",
        }
    }
}
