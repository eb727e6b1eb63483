//! Ten gods (sipseong): the relation of any stem to the day master.
//!
//! The category comes from the element relation (same, generated by the day
//! master, controlled by it, controlling it, generating it) and is split in
//! two by whether the polarities match.

use crate::branch::Branch;
use crate::stem::Stem;

/// A ten-god category, plus the marker for the day stem itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// 비견: same element, same polarity.
    Bigyeon,
    /// 겁재: same element, other polarity.
    Geopjae,
    /// 식신: generated by the day master, same polarity.
    Siksin,
    /// 상관: generated by the day master, other polarity.
    Sanggwan,
    /// 편재: controlled by the day master, same polarity.
    Pyeonjae,
    /// 정재: controlled by the day master, other polarity.
    Jeongjae,
    /// 편관: controls the day master, same polarity.
    Pyeongwan,
    /// 정관: controls the day master, other polarity.
    Jeonggwan,
    /// 편인: generates the day master, same polarity.
    Pyeonin,
    /// 정인: generates the day master, other polarity.
    Jeongin,
    /// The day stem itself.
    DayMaster,
}

impl TenGod {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Bigyeon => "비견",
            Self::Geopjae => "겁재",
            Self::Siksin => "식신",
            Self::Sanggwan => "상관",
            Self::Pyeonjae => "편재",
            Self::Jeongjae => "정재",
            Self::Pyeongwan => "편관",
            Self::Jeonggwan => "정관",
            Self::Pyeonin => "편인",
            Self::Jeongin => "정인",
            Self::DayMaster => "일간",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Bigyeon => "比肩",
            Self::Geopjae => "劫財",
            Self::Siksin => "食神",
            Self::Sanggwan => "傷官",
            Self::Pyeonjae => "偏財",
            Self::Jeongjae => "正財",
            Self::Pyeongwan => "偏官",
            Self::Jeonggwan => "正官",
            Self::Pyeonin => "偏印",
            Self::Jeongin => "正印",
            Self::DayMaster => "日干",
        }
    }
}

/// Ten god of `other` relative to the day master `day`.
///
/// Never returns [`TenGod::DayMaster`]; the caller tags the day stem's own
/// position, since another pillar can carry the same stem.
pub fn ten_god(day: Stem, other: Stem) -> TenGod {
    let same = day.polarity() == other.polarity();
    let pick = |a, b| if same { a } else { b };
    match day.element().steps_to(other.element()) {
        0 => pick(TenGod::Bigyeon, TenGod::Geopjae),
        1 => pick(TenGod::Siksin, TenGod::Sanggwan),
        2 => pick(TenGod::Pyeonjae, TenGod::Jeongjae),
        3 => pick(TenGod::Pyeongwan, TenGod::Jeonggwan),
        _ => pick(TenGod::Pyeonin, TenGod::Jeongin),
    }
}

/// Ten god of a branch, through its principal hidden stem.
pub fn ten_god_of_branch(day: Stem, branch: Branch) -> TenGod {
    ten_god(day, branch.main_hidden_stem())
}
