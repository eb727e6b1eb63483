//! Assemble the persisted result from the pipeline outputs.

use chrono::Datelike;
use saju_base::{Element, Gapja};
use saju_calendar::{CalendarConversion, CalendarType};

use crate::analysis::Analysis;
use crate::error::SajuError;
use crate::luck::{Daeun, LuckEntry, SeunEntry, WoleunEntry};
use crate::pillar::FourPillarChart;
use crate::position::Positions;
use crate::result::{
    BranchRelationOut, DaeunOut, DaeunStepOut, Distribution, LuckFields, Ohang, SajuResult,
    SeunOut, Sipseong, SolarYmd, StemRelationOut, WoleunOut,
};

/// Everything the assembler reads.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyInput<'a> {
    pub conversion: &'a CalendarConversion,
    pub calendar_type: CalendarType,
    pub is_intercalation: bool,
    pub chart: &'a FourPillarChart,
    pub analysis: &'a Analysis,
    pub daeun: &'a Daeun,
    pub seun: &'a [SeunEntry],
    pub woleun: &'a [WoleunEntry],
}

/// Build the result and check its structural invariants.
pub fn assemble(input: AssemblyInput<'_>) -> Result<SajuResult, SajuError> {
    let AssemblyInput {
        conversion,
        calendar_type,
        is_intercalation,
        chart,
        analysis,
        daeun,
        seun,
        woleun,
    } = input;
    let pillars = &chart.pillars;
    let dist = &analysis.distribution;

    let result = SajuResult {
        calendar_type,
        // the flag only means something for lunar input
        is_intercalation: is_intercalation && calendar_type == CalendarType::Lunar,
        solar: SolarYmd {
            year: conversion.solar.year(),
            month: conversion.solar.month(),
            day: conversion.solar.day(),
        },
        lunar: conversion.lunar,
        gapja_korean: pillars.map(|_, g| g.korean()),
        gapja_chinese: pillars.map(|_, g| g.hanja()),
        ohang: Ohang {
            distribution: Distribution {
                wood: dist.count(Element::Wood),
                fire: dist.count(Element::Fire),
                earth: dist.count(Element::Earth),
                metal: dist.count(Element::Metal),
                water: dist.count(Element::Water),
            },
            day_master: format!(
                "{}{}",
                analysis.day_master.korean(),
                analysis.day_master.element().korean()
            ),
            missing: dist.missing().iter().map(|e| e.korean().to_string()).collect(),
        },
        sipseong: analysis.ten_gods.map(|_, t| Sipseong {
            ko: t.stem.korean().to_string(),
            hanja: t.stem.hanja().to_string(),
            ji_ko: t.branch.korean().to_string(),
            ji_hanja: t.branch.hanja().to_string(),
        }),
        unseong12: analysis.twelve_stages.map(|_, s| s.korean().to_string()),
        cheongan_relation: analysis.stem_relations.map(|_, tags| {
            tags.iter()
                .map(|t| StemRelationOut {
                    kind: t.relation.tag().to_string(),
                    type_ko: t.relation.korean().to_string(),
                    with_stem: t.with_stem.korean().to_string(),
                    with_position: t.with_position,
                })
                .collect()
        }),
        jiji_relation: analysis.branch_relations.map(|_, tags| {
            tags.iter()
                .map(|t| BranchRelationOut {
                    kind: t.relation.tag().to_string(),
                    type_ko: t.relation.korean().to_string(),
                    with_branch: t.with_branch.korean().to_string(),
                    with_position: t.with_position,
                })
                .collect()
        }),
        sinsal12: analysis.sinsal12.map(|_, s| s.korean().to_string()),
        sinsal_combined: analysis
            .sinsal_combined
            .map(|_, marks| marks.iter().map(|m| m.korean().to_string()).collect()),
        daeun: DaeunOut {
            direction: daeun.direction,
            start_age_exact: daeun.start_age_exact,
            steps: daeun
                .steps
                .iter()
                .map(|s| DaeunStepOut {
                    age: s.age,
                    start_year: s.start_year,
                    luck: luck_fields(&s.entry),
                })
                .collect(),
        },
        seun: seun
            .iter()
            .map(|s| SeunOut {
                year: s.year,
                luck: luck_fields(&s.entry),
            })
            .collect(),
        woleun: woleun
            .iter()
            .map(|w| WoleunOut {
                month: w.month,
                luck: luck_fields(&w.entry),
                term_start: w.term_start,
            })
            .collect(),
    };

    check_consistency(&result, pillars)?;
    Ok(result)
}

fn luck_fields(entry: &LuckEntry) -> LuckFields {
    LuckFields {
        gapja: entry.gapja.hanja(),
        gapja_ko: entry.gapja.korean(),
        sipseong: entry.ten_god.korean().to_string(),
        sipseong_ji: entry.branch_ten_god.korean().to_string(),
        sinsal: entry.sinsal.korean().to_string(),
        unseong12: entry.twelve_stage.korean().to_string(),
    }
}

/// Every hour-keyed field is null exactly when the hour pillar is, and the
/// element counts cover exactly the present stems and branches.
pub fn check_consistency(result: &SajuResult, pillars: &Positions<Gapja>) -> Result<(), SajuError> {
    let has_hour = pillars.has_hour();
    let hour_fields = [
        ("gapjaKorean", result.gapja_korean.has_hour()),
        ("gapjaChinese", result.gapja_chinese.has_hour()),
        ("sipseong", result.sipseong.has_hour()),
        ("unseong12", result.unseong12.has_hour()),
        ("cheonganRelation", result.cheongan_relation.has_hour()),
        ("jijiRelation", result.jiji_relation.has_hour()),
        ("sinsal12", result.sinsal12.has_hour()),
        ("sinsalCombined", result.sinsal_combined.has_hour()),
    ];
    for (name, present) in hour_fields {
        if present != has_hour {
            return Err(SajuError::InconsistentResult(format!(
                "{name}.hour present={present} but hour pillar present={has_hour}"
            )));
        }
    }

    let expected = 2 * pillars.pillar_count() as u32;
    let total = result.ohang.distribution.total();
    if total != expected {
        return Err(SajuError::InconsistentResult(format!(
            "element distribution sums to {total}, expected {expected}"
        )));
    }
    Ok(())
}
