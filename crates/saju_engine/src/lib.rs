//! Four-pillar (saju) chart engine.
//!
//! This crate provides:
//! - [`compute_pillars`]: year, month, day and hour gapja of a birth moment
//! - [`analyze`]: element distribution, ten gods, life stages, relations
//!   and sinsal of a chart
//! - [`luck`]: decade, annual and monthly luck cycles
//! - [`SajuEngine`], which runs the whole pipeline from a [`BirthRequest`]
//!   to a serializable [`SajuResult`]
//!
//! Nothing here reads the wall clock; the reference year for annual and
//! monthly luck is always supplied by the caller.

pub mod analysis;
pub mod assemble;
pub mod config;
pub mod error;
pub mod input;
pub mod luck;
pub mod pillar;
pub mod position;
pub mod region;
pub mod result;

pub use analysis::{Analysis, ElementDistribution, SinsalMark, TenGodPair, analyze};
pub use assemble::{AssemblyInput, assemble, check_consistency};
pub use config::{SajuConfig, ZiHourMode};
pub use error::{SajuError, SajuErrorKind};
pub use input::{BirthRequest, Gender};
pub use luck::{Daeun, LuckDirection, project_daeun, project_seun, project_woleun, seun_window};
pub use pillar::{FourPillarChart, PILLAR_YEAR_RANGE, compute_pillars, day_gapja};
pub use position::{ALL_POSITIONS, PillarPosition, Positions};
pub use region::{longitude_offset_minutes, region_longitude};
pub use result::SajuResult;

use saju_calendar::{LunarTable, convert_fields};
use saju_time::{BirthMoment, parse_time, parse_ymd};
use tracing::{debug, debug_span, warn};

/// Reference years accepted by [`SajuEngine::compute`].
pub const REFERENCE_YEAR_RANGE: (i32, i32) = (1, 9999);

/// Chart engine: a lunar table plus validated configuration.
#[derive(Debug, Clone)]
pub struct SajuEngine {
    table: LunarTable,
    config: SajuConfig,
}

impl SajuEngine {
    /// Create an engine over the embedded lunar table.
    pub fn new(config: SajuConfig) -> Result<Self, SajuError> {
        Self::with_table(LunarTable::embedded(), config)
    }

    /// Create an engine over a caller-supplied lunar table.
    pub fn with_table(table: LunarTable, config: SajuConfig) -> Result<Self, SajuError> {
        config.validate()?;
        Ok(Self { table, config })
    }

    pub fn config(&self) -> &SajuConfig {
        &self.config
    }

    pub fn table(&self) -> &LunarTable {
        &self.table
    }

    /// Run the full pipeline for one request.
    ///
    /// `reference_year` centers the annual luck window and selects the year
    /// of monthly luck.
    pub fn compute(
        &self,
        request: &BirthRequest,
        reference_year: i32,
    ) -> Result<SajuResult, SajuError> {
        let _span = debug_span!(
            "saju",
            date = %request.birth_date,
            calendar = request.calendar_type.name()
        )
        .entered();
        let cfg = &self.config;
        if !(REFERENCE_YEAR_RANGE.0..=REFERENCE_YEAR_RANGE.1).contains(&reference_year) {
            return Err(SajuError::InvalidInput(format!(
                "reference year {reference_year} outside {}..={}",
                REFERENCE_YEAR_RANGE.0, REFERENCE_YEAR_RANGE.1
            )));
        }

        let (year, month, day) = parse_ymd(&request.birth_date)?;
        let time = parse_time(request.time_text())?;
        let conversion = convert_fields(
            &self.table,
            request.calendar_type,
            year,
            month,
            day,
            request.is_intercalation,
        )?;

        let utc_offset = self.birth_utc_offset(request)?;
        let moment = BirthMoment::new(conversion.solar, time, utc_offset);
        let longitude_offset = self.longitude_offset(request, utc_offset);
        debug!(%moment, utc_offset, longitude_offset, "birth moment");

        let chart = compute_pillars(&moment, longitude_offset, cfg.zi_hour_mode)?;
        let analysis = analyze(&chart);
        let daeun = project_daeun(&chart, request.gender, &moment, cfg.daeun_steps)?;
        let seun = project_seun(
            &chart,
            seun_window(reference_year, cfg.seun_years_before, cfg.seun_years_after),
        );
        let woleun = project_woleun(&chart, reference_year, cfg.utc_offset_minutes)?;

        assemble(AssemblyInput {
            conversion: &conversion,
            calendar_type: request.calendar_type,
            is_intercalation: request.is_intercalation,
            chart: &chart,
            analysis: &analysis,
            daeun: &daeun,
            seun: &seun,
            woleun: &woleun,
        })
    }

    /// Clock offset of the birth: the request's own, else the configured one.
    fn birth_utc_offset(&self, request: &BirthRequest) -> Result<i32, SajuError> {
        match request.utc_offset_minutes {
            None => Ok(self.config.utc_offset_minutes),
            Some(m) if (-12 * 60..=14 * 60).contains(&m) => Ok(m),
            Some(m) => Err(SajuError::InvalidInput(format!(
                "utc offset {m} minutes outside -720..=840"
            ))),
        }
    }

    /// True-solar-time correction for the request's region on a clock at
    /// `utc_offset` minutes, or 0.
    fn longitude_offset(&self, request: &BirthRequest, utc_offset: i32) -> i32 {
        if !self.config.true_solar_time {
            return 0;
        }
        let Some(region) = request.region.as_deref() else {
            return 0;
        };
        match region_longitude(region) {
            Some(lon) => longitude_offset_minutes(lon, utc_offset),
            None => {
                warn!(region, "unknown region, no longitude correction");
                0
            }
        }
    }
}
