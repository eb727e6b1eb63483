//! Symbol tables and pure rules of the sexagenary (gapja) system.
//!
//! This crate provides:
//! - The ten heavenly stems and twelve earthly branches with their
//!   five-element and yin/yang attributes
//! - The 60-pair sexagenary cycle and its year/month/day/hour stem rules
//! - Ten gods, twelve life stages, stem and branch relations
//! - The twelve spirit-killers (sinsal) and the special sinsal
//!
//! Nothing here knows about calendars or instants; callers pass indices
//! already fixed by the calendar layer.

pub mod branch;
pub mod element;
pub mod gapja;
pub mod relation;
pub mod sinsal;
pub mod stem;
pub mod ten_god;
pub mod twelve_stage;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use gapja::{Gapja, hour_slot, hour_stem, month_gapja, year_gapja};
pub use relation::{BranchRelation, StemRelation, branch_relations, stem_relation};
pub use sinsal::{ALL_SINSAL, Sinsal, SpecialSinsal, sinsal12, special_sinsal};
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{TenGod, ten_god, ten_god_of_branch};
pub use twelve_stage::{ALL_TWELVE_STAGES, TwelveStage, twelve_stage};
