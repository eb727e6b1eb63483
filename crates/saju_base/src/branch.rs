//! The twelve earthly branches (jiji).

use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// The twelve earthly branches starting from 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All twelve branches in order (0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const KOREAN: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const ANIMALS: [&str; 12] = [
    "쥐", "소", "호랑이", "토끼", "용", "뱀", "말", "양", "원숭이", "닭", "개", "돼지",
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_BRANCHES.get(index as usize).copied()
    }

    /// Branch at `index` mod 12.
    pub fn wrapping(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
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

    /// Zodiac animal (tti) in Korean.
    pub fn animal(self) -> &'static str {
        ANIMALS[self.index() as usize]
    }

    pub fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Principal hidden stem (jeonggi), used for the branch ten god.
    pub const fn main_hidden_stem(self) -> Stem {
        match self {
            Self::Ja => Stem::Gye,
            Self::Chuk => Stem::Gi,
            Self::In => Stem::Gap,
            Self::Myo => Stem::Eul,
            Self::Jin => Stem::Mu,
            Self::Sa => Stem::Byeong,
            Self::O => Stem::Jeong,
            Self::Mi => Stem::Gi,
            Self::Sin => Stem::Gyeong,
            Self::Yu => Stem::Sin,
            Self::Sul => Stem::Mu,
            Self::Hae => Stem::Im,
        }
    }

    /// Index of this branch's three-harmony (samhap) group, 0..4.
    /// 申子辰 = 0, 巳酉丑 = 1, 寅午戌 = 2, 亥卯未 = 3.
    pub const fn trine_group(self) -> u8 {
        self.index() % 4
    }

    /// 子 午 卯 酉: the cardinal branch of each trine.
    pub const fn is_cardinal(self) -> bool {
        self.index() % 3 == 0
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
        assert_eq!(Branch::from_index(12), None);
        assert_eq!(Branch::wrapping(-1), Branch::Hae);
    }

    #[test]
    fn names_round_trip() {
        for b in ALL_BRANCHES {
            assert_eq!(Branch::from_name(b.korean()), Some(b));
            assert_eq!(Branch::from_name(b.hanja()), Some(b));
        }
    }

    #[test]
    fn elements() {
        let elems: Vec<_> = ALL_BRANCHES.iter().map(|b| b.element().korean()).collect();
        assert_eq!(
            elems,
            ["수", "토", "목", "목", "토", "화", "화", "토", "금", "금", "토", "수"]
        );
    }

    #[test]
    fn hidden_stem_shares_element() {
        for b in ALL_BRANCHES {
            assert_eq!(b.main_hidden_stem().element(), b.element(), "{b}");
        }
    }

    #[test]
    fn animals() {
        assert_eq!(Branch::Ja.animal(), "쥐");
        assert_eq!(Branch::O.animal(), "말");
        assert_eq!(Branch::Hae.animal(), "돼지");
    }

    #[test]
    fn trines_and_cardinals() {
        assert_eq!(Branch::Sin.trine_group(), Branch::Ja.trine_group());
        assert_eq!(Branch::Jin.trine_group(), Branch::Ja.trine_group());
        assert_eq!(Branch::Hae.trine_group(), Branch::Mi.trine_group());
        let cardinals: Vec<_> = ALL_BRANCHES.iter().filter(|b| b.is_cardinal()).collect();
        assert_eq!(cardinals, [&Branch::Ja, &Branch::Myo, &Branch::O, &Branch::Yu]);
    }
}
