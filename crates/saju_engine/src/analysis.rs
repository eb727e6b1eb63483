//! Five-element distribution, ten gods, life stages, relations and sinsal
//! of a chart.
//!
//! Every tag is recomputed from the pillars on each call. A missing hour
//! pillar simply drops out of every pairwise set.

use saju_base::{
    ALL_ELEMENTS, Branch, BranchRelation, Element, Gapja, Sinsal, SpecialSinsal, Stem,
    StemRelation, TenGod, TwelveStage, branch_relations, sinsal12, special_sinsal,
    stem_relation, ten_god, ten_god_of_branch, twelve_stage,
};
use tracing::debug;

use crate::pillar::FourPillarChart;
use crate::position::{PillarPosition, Positions};

/// Element counts over every present stem and branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementDistribution {
    counts: [u8; 5],
}

impl ElementDistribution {
    pub fn from_chart(chart: &FourPillarChart) -> Self {
        let mut counts = [0u8; 5];
        for (_, g) in chart.pillars.iter() {
            counts[g.stem().element().index() as usize] += 1;
            counts[g.branch().element().index() as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// 8 with an hour pillar, 6 without.
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// Elements that do not occur at all.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .into_iter()
            .filter(|&e| self.count(e) == 0)
            .collect()
    }
}

/// Ten gods of one pillar: stem and branch (through its hidden stem).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenGodPair {
    pub stem: TenGod,
    pub branch: TenGod,
}

/// A stem relation seen from one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemRelationTag {
    pub relation: StemRelation,
    pub with_stem: Stem,
    pub with_position: PillarPosition,
}

/// A branch relation seen from one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchRelationTag {
    pub relation: BranchRelation,
    pub with_branch: Branch,
    pub with_position: PillarPosition,
}

/// Entry of the merged sinsal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinsalMark {
    Twelve(Sinsal),
    Special(SpecialSinsal),
}

impl SinsalMark {
    pub fn korean(self) -> &'static str {
        match self {
            Self::Twelve(s) => s.korean(),
            Self::Special(s) => s.korean(),
        }
    }

    pub fn hanja(self) -> &'static str {
        match self {
            Self::Twelve(s) => s.hanja(),
            Self::Special(s) => s.hanja(),
        }
    }
}

/// Everything derived from the pillars alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub day_master: Stem,
    pub distribution: ElementDistribution,
    pub ten_gods: Positions<TenGodPair>,
    pub twelve_stages: Positions<TwelveStage>,
    pub stem_relations: Positions<Vec<StemRelationTag>>,
    pub branch_relations: Positions<Vec<BranchRelationTag>>,
    /// Twelve sinsal relative to the year branch.
    pub sinsal12: Positions<Sinsal>,
    /// Year- and day-branch twelve sinsal merged with the special sinsal.
    pub sinsal_combined: Positions<Vec<SinsalMark>>,
}

/// Analyze a chart.
pub fn analyze(chart: &FourPillarChart) -> Analysis {
    let pillars = &chart.pillars;
    let day_master = chart.day_master();
    let year_branch = pillars.year.branch();
    let day_branch = pillars.day.branch();

    let ten_gods = pillars.map(|pos, g| TenGodPair {
        stem: if pos == PillarPosition::Day {
            TenGod::DayMaster
        } else {
            ten_god(day_master, g.stem())
        },
        branch: ten_god_of_branch(day_master, g.branch()),
    });

    let stem_relations = pillars.map(|pos, g| {
        others(pillars, pos)
            .filter_map(|(other_pos, other)| {
                stem_relation(g.stem(), other.stem()).map(|relation| StemRelationTag {
                    relation,
                    with_stem: other.stem(),
                    with_position: other_pos,
                })
            })
            .collect()
    });

    let branch_relations = pillars.map(|pos, g| {
        others(pillars, pos)
            .flat_map(|(other_pos, other)| {
                branch_relations(g.branch(), other.branch())
                    .into_iter()
                    .map(move |relation| BranchRelationTag {
                        relation,
                        with_branch: other.branch(),
                        with_position: other_pos,
                    })
            })
            .collect()
    });

    let sinsal_combined = pillars.map(|_, g| combined_sinsal(day_master, year_branch, day_branch, *g));

    let analysis = Analysis {
        day_master,
        distribution: ElementDistribution::from_chart(chart),
        ten_gods,
        twelve_stages: pillars.map(|_, g| twelve_stage(day_master, g.branch())),
        stem_relations,
        branch_relations,
        sinsal12: pillars.map(|_, g| sinsal12(year_branch, g.branch())),
        sinsal_combined,
    };
    debug!(
        day_master = day_master.hanja(),
        total = analysis.distribution.total(),
        "chart analyzed"
    );
    analysis
}

fn others(
    pillars: &Positions<Gapja>,
    pos: PillarPosition,
) -> impl Iterator<Item = (PillarPosition, Gapja)> + '_ {
    pillars
        .iter()
        .filter(move |(p, _)| *p != pos)
        .map(|(p, g)| (p, *g))
}

fn combined_sinsal(
    day_master: Stem,
    year_branch: Branch,
    day_branch: Branch,
    pillar: Gapja,
) -> Vec<SinsalMark> {
    let branch = pillar.branch();
    let mut marks = vec![
        SinsalMark::Twelve(sinsal12(year_branch, branch)),
        SinsalMark::Twelve(sinsal12(day_branch, branch)),
    ];
    if marks.contains(&SinsalMark::Twelve(Sinsal::Yeonsal)) {
        marks.push(SinsalMark::Special(SpecialSinsal::Dohwa));
    }
    marks.extend(
        special_sinsal(day_master, pillar)
            .into_iter()
            .map(SinsalMark::Special),
    );
    let mut seen = Vec::with_capacity(marks.len());
    marks.retain(|m| {
        if seen.contains(m) {
            false
        } else {
            seen.push(*m);
            true
        }
    });
    marks
}
