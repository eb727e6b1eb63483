//! Engine configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config.

use serde::{Deserialize, Serialize};
use saju_time::KST_OFFSET_MINUTES;

use crate::error::SajuError;

/// Where the day boundary sits relative to the 子 hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiHourMode {
    /// Day changes at 00:00. Births from 23:00 keep the current day pillar
    /// and take the next day's 子-hour stem.
    #[default]
    Midnight,
    /// Day changes at 23:00, at the start of the 子 hour.
    EarlyZi,
}

/// Tunables of the saju pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SajuConfig {
    /// Offset of birth clock times from UTC, in minutes.
    pub utc_offset_minutes: i32,
    pub zi_hour_mode: ZiHourMode,
    /// Shift day/hour boundaries by the birth region's longitude.
    pub true_solar_time: bool,
    /// Number of daeun steps to project.
    pub daeun_steps: u8,
    /// Seun years listed before the reference year.
    pub seun_years_before: u16,
    /// Seun years listed after the reference year.
    pub seun_years_after: u16,
}

impl Default for SajuConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: KST_OFFSET_MINUTES,
            zi_hour_mode: ZiHourMode::default(),
            true_solar_time: false,
            daeun_steps: 10,
            seun_years_before: 5,
            seun_years_after: 4,
        }
    }
}

impl SajuConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, SajuError> {
        let config: Self = toml::from_str(text).map_err(|e| SajuError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SajuError> {
        if !(-12 * 60..=14 * 60).contains(&self.utc_offset_minutes) {
            return Err(SajuError::Config(format!(
                "utc_offset_minutes {} outside -720..=840",
                self.utc_offset_minutes
            )));
        }
        if !(1..=12).contains(&self.daeun_steps) {
            return Err(SajuError::Config(format!(
                "daeun_steps {} outside 1..=12",
                self.daeun_steps
            )));
        }
        if self.seun_years_before + self.seun_years_after > 120 {
            return Err(SajuError::Config(
                "seun window must not exceed 121 years".to_string(),
            ));
        }
        Ok(())
    }
}
