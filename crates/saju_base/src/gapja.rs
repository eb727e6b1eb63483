//! The sexagenary cycle (60 gapja) and the pillar stem rules.
//!
//! A gapja pairs stem `n mod 10` with branch `n mod 12`, so only pairs of
//! equal polarity occur. Years cycle from 4 CE = 甲子; days cycle with a
//! fixed offset from the Julian Day Number (2000-01-01 = 戊午).

use crate::branch::Branch;
use crate::stem::Stem;

/// Reference epoch: CE 4 = 甲子 (index 0).
pub const GAPJA_EPOCH_YEAR: i32 = 4;

/// Offset added to a Julian Day Number to get its day gapja index.
pub const DAY_GAPJA_JDN_OFFSET: i64 = 49;

/// One of the 60 stem-branch pairs. Index 0 = 甲子, 59 = 癸亥.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gapja(u8);

impl Gapja {
    pub fn new(index: u8) -> Option<Self> {
        (index < 60).then_some(Self(index))
    }

    /// Gapja at `index` mod 60.
    pub fn wrapping(index: i64) -> Self {
        Self(index.rem_euclid(60) as u8)
    }

    /// Pair a stem with a branch. `None` when polarities differ.
    pub fn from_parts(stem: Stem, branch: Branch) -> Option<Self> {
        let (s, b) = (stem.index(), branch.index());
        // the unique n in 0..60 with n ≡ s (mod 10) and n ≡ b (mod 12)
        (0..6)
            .map(|k| s + 10 * k)
            .find(|n| n % 12 == b)
            .map(Self)
    }

    /// Parse a two-character name such as "갑자" or "甲子".
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let stem = Stem::from_name(&chars.next()?.to_string())?;
        let branch = Branch::from_name(&chars.next()?.to_string())?;
        if chars.next().is_some() {
            return None;
        }
        Self::from_parts(stem, branch)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn stem(self) -> Stem {
        Stem::wrapping(i64::from(self.0))
    }

    pub fn branch(self) -> Branch {
        Branch::wrapping(i64::from(self.0))
    }

    /// Gapja `steps` positions later (earlier if negative).
    pub fn offset(self, steps: i64) -> Self {
        Self::wrapping(i64::from(self.0) + steps)
    }

    /// Korean reading, e.g. "갑자".
    pub fn korean(self) -> String {
        format!("{}{}", self.stem().korean(), self.branch().korean())
    }

    /// Hanja form, e.g. "甲子".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem().hanja(), self.branch().hanja())
    }

    /// Day gapja for a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        Self::wrapping(jdn + DAY_GAPJA_JDN_OFFSET)
    }
}

impl std::fmt::Display for Gapja {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem().hanja(), self.branch().hanja())
    }
}

/// Year gapja of saju year `year` (the year that starts at ipchun).
pub fn year_gapja(year: i32) -> Gapja {
    Gapja::wrapping(i64::from(year) - i64::from(GAPJA_EPOCH_YEAR))
}

/// Month gapja from the year stem and the saju month index (0 = 寅 month).
///
/// 甲/己 years open with 丙寅, 乙/庚 with 戊寅, 丙/辛 with 庚寅, 丁/壬 with
/// 壬寅, 戊/癸 with 甲寅.
pub fn month_gapja(year_stem: Stem, month_index: u8) -> Gapja {
    // 寅 month of a 甲 year is 丙寅 (index 2); each later year stem moves it by 12
    let first = 2 + 12 * (i64::from(year_stem.index()) % 5);
    Gapja::wrapping(first + i64::from(month_index % 12))
}

/// Hour branch for minutes after local midnight. 子 covers 23:00–00:59.
pub fn hour_slot(minutes_of_day: u32) -> Branch {
    Branch::wrapping(i64::from((minutes_of_day % 1440 + 60) / 120))
}

/// Hour stem from the day stem: 甲/己 days start at 甲子.
pub fn hour_stem(day_stem: Stem, hour_branch: Branch) -> Stem {
    Stem::wrapping(i64::from(day_stem.index()) * 2 + i64::from(hour_branch.index()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_distinct_pairs() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..60 {
            let g = Gapja::new(i).unwrap();
            assert!(seen.insert((g.stem(), g.branch())));
            assert_eq!(Gapja::from_parts(g.stem(), g.branch()), Some(g));
        }
        assert_eq!(Gapja::new(60), None);
    }

    #[test]
    fn mixed_polarity_pair_is_rejected() {
        assert_eq!(Gapja::from_parts(Stem::Gap, Branch::Chuk), None);
    }

    #[test]
    fn names() {
        let g = Gapja::new(0).unwrap();
        assert_eq!(g.korean(), "갑자");
        assert_eq!(g.hanja(), "甲子");
        assert_eq!(Gapja::new(59).unwrap().korean(), "계해");
        assert_eq!(Gapja::from_name("무오"), Gapja::new(54));
        assert_eq!(Gapja::from_name("戊午"), Gapja::new(54));
        assert_eq!(Gapja::from_name("갑축"), None);
        assert_eq!(Gapja::from_name("갑자년"), None);
    }

    #[test]
    fn year_1984_is_gapja() {
        assert_eq!(year_gapja(1984).korean(), "갑자");
        assert_eq!(year_gapja(1989).korean(), "기사");
        assert_eq!(year_gapja(2024).korean(), "갑진");
        assert_eq!(year_gapja(1983).korean(), "계해");
    }

    #[test]
    fn day_anchor() {
        // 2000-01-01 = JDN 2451545
        assert_eq!(Gapja::from_jdn(2_451_545).hanja(), "戊午");
        // 1949-10-01 = JDN 2433191
        assert_eq!(Gapja::from_jdn(2_433_191).hanja(), "甲子");
    }

    #[test]
    fn first_month_by_year_stem() {
        let expected = ["병인", "무인", "경인", "임인", "갑인"];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(month_gapja(Stem::wrapping(i as i64), 0).korean(), *want);
            assert_eq!(month_gapja(Stem::wrapping(i as i64 + 5), 0).korean(), *want);
        }
    }

    #[test]
    fn month_stems_advance() {
        // 己 year, 子 month (index 10) = 丙子
        assert_eq!(month_gapja(Stem::Gi, 10).hanja(), "丙子");
        assert_eq!(month_gapja(Stem::Gi, 11).hanja(), "丁丑");
    }

    #[test]
    fn month_pairs_follow_stem_and_branch_rule() {
        for year_stem in 0..10i64 {
            for m in 0..12u8 {
                let g = month_gapja(Stem::wrapping(year_stem), m);
                assert_eq!(g.stem(), Stem::wrapping(year_stem * 2 + 2 + i64::from(m)));
                assert_eq!(g.branch(), Branch::wrapping(2 + i64::from(m)));
            }
        }
        // index wraps past 亥 month
        assert_eq!(month_gapja(Stem::Gap, 12), month_gapja(Stem::Gap, 0));
    }

    #[test]
    fn hour_slots() {
        assert_eq!(hour_slot(0), Branch::Ja);
        assert_eq!(hour_slot(59), Branch::Ja);
        assert_eq!(hour_slot(60), Branch::Chuk);
        assert_eq!(hour_slot(14 * 60 + 30), Branch::Mi);
        assert_eq!(hour_slot(22 * 60 + 59), Branch::Hae);
        assert_eq!(hour_slot(23 * 60), Branch::Ja);
    }

    #[test]
    fn hour_stem_rule() {
        assert_eq!(hour_stem(Stem::Gap, Branch::Ja), Stem::Gap);
        assert_eq!(hour_stem(Stem::Gi, Branch::Ja), Stem::Gap);
        assert_eq!(hour_stem(Stem::Eul, Branch::Ja), Stem::Byeong);
        assert_eq!(hour_stem(Stem::Byeong, Branch::Mi), Stem::Eul);
    }
}
