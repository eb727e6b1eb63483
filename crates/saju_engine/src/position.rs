//! The four pillar positions and a per-position container.

use serde::Serialize;

/// One of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Year => "년주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

/// A value per pillar. The hour slot is empty exactly when the birth time
/// is unknown, and every `map` keeps it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Positions<T> {
    pub year: T,
    pub month: T,
    pub day: T,
    pub hour: Option<T>,
}

impl<T> Positions<T> {
    pub fn get(&self, position: PillarPosition) -> Option<&T> {
        match position {
            PillarPosition::Year => Some(&self.year),
            PillarPosition::Month => Some(&self.month),
            PillarPosition::Day => Some(&self.day),
            PillarPosition::Hour => self.hour.as_ref(),
        }
    }

    /// Present entries in year, month, day, hour order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, &T)> {
        ALL_POSITIONS
            .into_iter()
            .filter_map(move |p| self.get(p).map(|v| (p, v)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(PillarPosition, &T) -> U) -> Positions<U> {
        Positions {
            year: f(PillarPosition::Year, &self.year),
            month: f(PillarPosition::Month, &self.month),
            day: f(PillarPosition::Day, &self.day),
            hour: self.hour.as_ref().map(|h| f(PillarPosition::Hour, h)),
        }
    }

    /// Number of present pillars: 4, or 3 when the hour is unknown.
    pub fn pillar_count(&self) -> usize {
        if self.hour.is_some() { 4 } else { 3 }
    }

    pub fn has_hour(&self) -> bool {
        self.hour.is_some()
    }
}
