//! Pairwise stem and branch relations.
//!
//! Stems: five combinations (甲己 乙庚 丙辛 丁壬 戊癸) and four clashes
//! (甲庚 乙辛 丙壬 丁癸). Branches: six harmonies, six clashes, the
//! punishments, breaks, harms and the half three-harmonies.

use crate::branch::Branch;
use crate::element::Element;
use crate::stem::Stem;

/// Relation between two heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemRelation {
    /// 천간합, with the element the pair transforms into.
    Hap(Element),
    /// 천간충.
    Chung,
}

impl StemRelation {
    /// Machine tag used in serialized output.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Hap(_) => "hap",
            Self::Chung => "chung",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Hap(_) => "천간합",
            Self::Chung => "천간충",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Hap(_) => "天干合",
            Self::Chung => "天干沖",
        }
    }
}

/// Stem pair relation, if any. Symmetric.
pub fn stem_relation(a: Stem, b: Stem) -> Option<StemRelation> {
    match a.index().abs_diff(b.index()) {
        5 => {
            // 甲己 earth, 乙庚 metal, 丙辛 water, 丁壬 wood, 戊癸 fire
            let low = a.index().min(b.index());
            Element::from_index((low + 2) % 5).map(StemRelation::Hap)
        }
        6 => Some(StemRelation::Chung),
        _ => None,
    }
}

/// Relation between two earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchRelation {
    /// 육합.
    Yukhap,
    /// 충.
    Chung,
    /// 형, including self-punishment of 辰 午 酉 亥.
    Hyeong,
    /// 파.
    Pa,
    /// 해.
    Hae,
    /// 반합: two members of a three-harmony group, one of them cardinal.
    Banhap(Element),
}

impl BranchRelation {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Yukhap => "yukhap",
            Self::Chung => "chung",
            Self::Hyeong => "hyeong",
            Self::Pa => "pa",
            Self::Hae => "hae",
            Self::Banhap(_) => "banhap",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Yukhap => "육합",
            Self::Chung => "지지충",
            Self::Hyeong => "형",
            Self::Pa => "파",
            Self::Hae => "해",
            Self::Banhap(_) => "반합",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Yukhap => "六合",
            Self::Chung => "地支沖",
            Self::Hyeong => "刑",
            Self::Pa => "破",
            Self::Hae => "害",
            Self::Banhap(_) => "半合",
        }
    }
}

/// 子卯, 寅巳, 巳申, 寅申, 丑戌, 戌未, 丑未.
const HYEONG_PAIRS: [(u8, u8); 7] = [
    (0, 3),  // 子卯
    (2, 5),  // 寅巳
    (5, 8),  // 巳申
    (2, 8),  // 寅申
    (1, 10), // 丑戌
    (7, 10), // 未戌
    (1, 7),  // 丑未
];

/// Branches that punish themselves: 辰 午 酉 亥.
const SELF_HYEONG: [u8; 4] = [4, 6, 9, 11];

/// 子酉, 丑辰, 寅亥, 卯午, 巳申, 未戌.
const PA_PAIRS: [(u8, u8); 6] = [
    (0, 9),  // 子酉
    (1, 4),  // 丑辰
    (2, 11), // 寅亥
    (3, 6),  // 卯午
    (5, 8),  // 巳申
    (7, 10), // 未戌
];

/// Element of each three-harmony group, indexed by `Branch::trine_group`.
const TRINE_ELEMENTS: [Element; 4] = [
    Element::Water, // 申子辰
    Element::Metal, // 巳酉丑
    Element::Fire,  // 寅午戌
    Element::Wood,  // 亥卯未
];

fn in_pairs(pairs: &[(u8, u8)], a: u8, b: u8) -> bool {
    pairs
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// All relations between two branches, in a fixed order. Symmetric.
///
/// A pair can carry several relations (寅亥 is both 육합 and 파).
pub fn branch_relations(a: Branch, b: Branch) -> Vec<BranchRelation> {
    let (x, y) = (a.index(), b.index());
    let mut out = Vec::new();
    if a == b {
        if SELF_HYEONG.contains(&x) {
            out.push(BranchRelation::Hyeong);
        }
        return out;
    }
    if (x + y) % 12 == 1 {
        out.push(BranchRelation::Yukhap);
    }
    if x.abs_diff(y) == 6 {
        out.push(BranchRelation::Chung);
    }
    if in_pairs(&HYEONG_PAIRS, x, y) {
        out.push(BranchRelation::Hyeong);
    }
    if in_pairs(&PA_PAIRS, x, y) {
        out.push(BranchRelation::Pa);
    }
    if (x + y) % 12 == 7 {
        out.push(BranchRelation::Hae);
    }
    if a.trine_group() == b.trine_group() && (a.is_cardinal() || b.is_cardinal()) {
        out.push(BranchRelation::Banhap(
            TRINE_ELEMENTS[a.trine_group() as usize],
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn five_stem_combinations() {
        let cases = [
            (Stem::Gap, Stem::Gi, Element::Earth),
            (Stem::Eul, Stem::Gyeong, Element::Metal),
            (Stem::Byeong, Stem::Sin, Element::Water),
            (Stem::Jeong, Stem::Im, Element::Wood),
            (Stem::Mu, Stem::Gye, Element::Fire),
        ];
        for (a, b, e) in cases {
            assert_eq!(stem_relation(a, b), Some(StemRelation::Hap(e)));
            assert_eq!(stem_relation(b, a), Some(StemRelation::Hap(e)));
        }
    }

    #[test]
    fn four_stem_clashes() {
        let clashes: Vec<_> = ALL_STEMS
            .iter()
            .flat_map(|&a| ALL_STEMS.iter().map(move |&b| (a, b)))
            .filter(|&(a, b)| a < b && stem_relation(a, b) == Some(StemRelation::Chung))
            .collect();
        assert_eq!(
            clashes,
            [
                (Stem::Gap, Stem::Gyeong),
                (Stem::Eul, Stem::Sin),
                (Stem::Byeong, Stem::Im),
                (Stem::Jeong, Stem::Gye),
            ]
        );
    }

    #[test]
    fn unrelated_stems() {
        assert_eq!(stem_relation(Stem::Gap, Stem::Byeong), None);
        assert_eq!(stem_relation(Stem::Gap, Stem::Gap), None);
    }

    #[test]
    fn six_harmonies_and_clashes() {
        assert!(branch_relations(Branch::Ja, Branch::Chuk).contains(&BranchRelation::Yukhap));
        assert!(branch_relations(Branch::O, Branch::Mi).contains(&BranchRelation::Yukhap));
        assert!(branch_relations(Branch::Ja, Branch::O).contains(&BranchRelation::Chung));
        assert!(branch_relations(Branch::Sa, Branch::Hae).contains(&BranchRelation::Chung));
    }

    #[test]
    fn multiple_relations_on_one_pair() {
        assert_eq!(
            branch_relations(Branch::In, Branch::Hae),
            [BranchRelation::Yukhap, BranchRelation::Pa]
        );
        assert_eq!(
            branch_relations(Branch::Sa, Branch::Sin),
            [BranchRelation::Yukhap, BranchRelation::Hyeong, BranchRelation::Pa]
        );
        assert_eq!(
            branch_relations(Branch::In, Branch::Sa),
            [BranchRelation::Hyeong, BranchRelation::Hae]
        );
    }

    #[test]
    fn self_punishment() {
        assert_eq!(branch_relations(Branch::O, Branch::O), [BranchRelation::Hyeong]);
        assert!(branch_relations(Branch::Ja, Branch::Ja).is_empty());
    }

    #[test]
    fn half_harmonies_need_a_cardinal() {
        assert_eq!(
            branch_relations(Branch::Sin, Branch::Ja),
            [BranchRelation::Banhap(Element::Water)]
        );
        assert!(
            branch_relations(Branch::Hae, Branch::Myo)
                .contains(&BranchRelation::Banhap(Element::Wood))
        );
        // 申辰 has no cardinal
        assert!(
            !branch_relations(Branch::Sin, Branch::Jin)
                .iter()
                .any(|r| matches!(r, BranchRelation::Banhap(_)))
        );
    }

    #[test]
    fn relations_are_symmetric() {
        for a in ALL_BRANCHES {
            for b in ALL_BRANCHES {
                assert_eq!(branch_relations(a, b), branch_relations(b, a), "{a}{b}");
            }
        }
    }
}
