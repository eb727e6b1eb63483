//! The 24 solar terms (jeolgi) and search for their instants.
//!
//! A solar term begins when the Sun's apparent longitude reaches a multiple
//! of 15°. The twelve "jeol" terms (odd multiples of 15°, starting with
//! ipchun at 315°) open the saju months; the twelve "jung" terms sit midway.
//!
//! Instants are found by iterating on the longitude residual scaled by the
//! mean solar motion, the same zero-crossing refinement used for sankranti
//! searches; convergence takes a handful of steps.

use chrono::NaiveDateTime;
use saju_time::{calendar_to_jd, jd_to_datetime, tt_to_ut};

use crate::error::CalendarError;
use crate::sun::{apparent_longitude, normalize_to_pm180};

/// Mean tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_19;

/// Longitude at which the saju year begins (ipchun).
pub const IPCHUN_LONGITUDE: f64 = 315.0;

const MAX_ITERATIONS: usize = 30;
const CONVERGENCE_DEG: f64 = 1e-7;

/// The 24 solar terms in calendar-year order (sohan first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Sohan,
    Daehan,
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
}

/// All 24 terms, index 0 = Sohan (285°).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Sohan,
    SolarTerm::Daehan,
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
];

const KOREAN_NAMES: [&str; 24] = [
    "소한", "대한", "입춘", "우수", "경칩", "춘분", "청명", "곡우", "입하", "소만", "망종", "하지",
    "소서", "대서", "입추", "처서", "백로", "추분", "한로", "상강", "입동", "소설", "대설", "동지",
];

const HANJA_NAMES: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "驚蟄", "春分", "淸明", "穀雨", "立夏", "小滿", "芒種", "夏至",
    "小暑", "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

impl SolarTerm {
    /// 0-based index (Sohan=0 .. Dongji=23).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_SOLAR_TERMS.get(index as usize).copied()
    }

    pub fn korean(self) -> &'static str {
        KOREAN_NAMES[self.index() as usize]
    }

    pub fn hanja(self) -> &'static str {
        HANJA_NAMES[self.index() as usize]
    }

    /// Apparent solar longitude at which the term begins.
    pub fn longitude(self) -> f64 {
        (285.0 + 15.0 * self.index() as f64).rem_euclid(360.0)
    }

    /// Whether this term opens a saju month.
    pub fn is_jeol(self) -> bool {
        self.index() % 2 == 0
    }

    /// Civil month in which the term normally falls.
    pub fn civil_month(self) -> u32 {
        self.index() as u32 / 2 + 1
    }

    /// Term beginning at a given longitude (multiple of 15°).
    pub fn from_longitude(lon: f64) -> Option<Self> {
        let steps = ((lon - 285.0).rem_euclid(360.0) / 15.0).round() as u8 % 24;
        let term = Self::from_index(steps)?;
        ((term.longitude() - lon.rem_euclid(360.0)).abs() < 1e-9).then_some(term)
    }
}

/// A located solar term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    /// Instant of the term, JD TT.
    pub jd_tt: f64,
}

impl SolarTermEvent {
    /// Instant as JD UT.
    pub fn jd_ut(&self) -> f64 {
        tt_to_ut(self.jd_tt)
    }

    /// Local civil date-time for a clock `utc_offset_minutes` from UTC.
    pub fn local_datetime(&self, utc_offset_minutes: i32) -> Option<NaiveDateTime> {
        jd_to_datetime(self.jd_ut() + utc_offset_minutes as f64 / 1440.0)
    }
}

/// Refine the JD TT at which the Sun reaches `target_deg`, starting from a
/// guess within a few weeks of the answer.
pub fn find_longitude_crossing(target_deg: f64, jd_guess: f64) -> Result<f64, CalendarError> {
    let mut jd = jd_guess;
    for _ in 0..MAX_ITERATIONS {
        let residual = normalize_to_pm180(target_deg - apparent_longitude(jd));
        jd += residual * TROPICAL_YEAR_DAYS / 360.0;
        if residual.abs() < CONVERGENCE_DEG {
            return Ok(jd);
        }
    }
    Err(CalendarError::NoConvergence("solar longitude crossing"))
}

/// Instant of `term` in civil year `year`.
pub fn term_in_year(year: i32, term: SolarTerm) -> Result<SolarTermEvent, CalendarError> {
    let day = if term.is_jeol() { 6.0 } else { 21.0 };
    let guess = calendar_to_jd(year, term.civil_month(), day);
    let jd_tt = find_longitude_crossing(term.longitude(), guess)?;
    Ok(SolarTermEvent { term, jd_tt })
}

/// All 24 terms of civil year `year`, in order.
pub fn terms_of_year(year: i32) -> Result<Vec<SolarTermEvent>, CalendarError> {
    ALL_SOLAR_TERMS
        .iter()
        .map(|&term| term_in_year(year, term))
        .collect()
}

/// Saju month index at a solar longitude: 0 = 寅 month (from ipchun)
/// through 11 = 丑 month (from sohan).
pub fn jeol_month_index(lon: f64) -> u8 {
    ((lon - IPCHUN_LONGITUDE).rem_euclid(360.0) / 30.0).floor() as u8 % 12
}

/// Most recent jeol term at or before `jd_tt`.
pub fn prev_jeol(jd_tt: f64) -> Result<SolarTermEvent, CalendarError> {
    let lon = apparent_longitude(jd_tt);
    let target = IPCHUN_LONGITUDE + 30.0 * jeol_month_index(lon) as f64;
    let behind = (lon - target).rem_euclid(360.0);
    let guess = jd_tt - behind * TROPICAL_YEAR_DAYS / 360.0;
    jeol_event(target, guess)
}

/// First jeol term strictly after `jd_tt`.
pub fn next_jeol(jd_tt: f64) -> Result<SolarTermEvent, CalendarError> {
    let lon = apparent_longitude(jd_tt);
    let target = IPCHUN_LONGITUDE + 30.0 * (jeol_month_index(lon) as f64 + 1.0);
    let ahead = (target - lon).rem_euclid(360.0);
    let guess = jd_tt + ahead * TROPICAL_YEAR_DAYS / 360.0;
    jeol_event(target, guess)
}

fn jeol_event(target: f64, guess: f64) -> Result<SolarTermEvent, CalendarError> {
    let target = target.rem_euclid(360.0);
    let jd_tt = find_longitude_crossing(target, guess)?;
    let term = SolarTerm::from_longitude(target)
        .ok_or(CalendarError::NoConvergence("jeol longitude off the 15° grid"))?;
    Ok(SolarTermEvent { term, jd_tt })
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_time::KST_OFFSET_MINUTES;

    /// Assert the term falls within 90 s of an almanac minute (KST).
    fn assert_kst(event: &SolarTermEvent, expected: &str) {
        let expected = NaiveDateTime::parse_from_str(expected, "%Y-%m-%d %H:%M").unwrap();
        let got = event.local_datetime(KST_OFFSET_MINUTES).unwrap();
        let diff = (got - expected).num_seconds().abs();
        assert!(diff <= 90, "expected {expected}, got {got}");
    }

    #[test]
    fn names_and_longitudes() {
        assert_eq!(SolarTerm::Ipchun.korean(), "입춘");
        assert_eq!(SolarTerm::Ipchun.hanja(), "立春");
        assert!((SolarTerm::Ipchun.longitude() - 315.0).abs() < 1e-12);
        assert!(SolarTerm::Chunbun.longitude().abs() < 1e-12);
        assert!((SolarTerm::Dongji.longitude() - 270.0).abs() < 1e-12);
        assert!(SolarTerm::Sohan.is_jeol());
        assert!(!SolarTerm::Daehan.is_jeol());
    }

    #[test]
    fn from_longitude_round_trips() {
        for term in ALL_SOLAR_TERMS {
            assert_eq!(SolarTerm::from_longitude(term.longitude()), Some(term));
        }
        assert_eq!(SolarTerm::from_longitude(7.5), None);
    }

    #[test]
    fn ipchun_2024() {
        // Almanac: 2024-02-04 17:27 KST
        let e = term_in_year(2024, SolarTerm::Ipchun).unwrap();
        assert_kst(&e, "2024-02-04 17:27");
    }

    #[test]
    fn ipchun_2000() {
        // Almanac: 2000-02-04 21:40 KST
        let e = term_in_year(2000, SolarTerm::Ipchun).unwrap();
        assert_kst(&e, "2000-02-04 21:40");
    }

    #[test]
    fn chunbun_2024() {
        // Almanac: 2024-03-20 12:06 KST
        let e = term_in_year(2024, SolarTerm::Chunbun).unwrap();
        assert_kst(&e, "2024-03-20 12:06");
    }

    #[test]
    fn year_has_24_increasing_terms() {
        let terms = terms_of_year(1990).unwrap();
        assert_eq!(terms.len(), 24);
        for pair in terms.windows(2) {
            let gap = pair[1].jd_tt - pair[0].jd_tt;
            assert!((14.0..16.5).contains(&gap), "gap {gap}");
        }
    }

    #[test]
    fn month_index_boundaries() {
        assert_eq!(jeol_month_index(315.0), 0);
        assert_eq!(jeol_month_index(314.999), 11);
        assert_eq!(jeol_month_index(345.0), 1);
        assert_eq!(jeol_month_index(0.0), 1);
        assert_eq!(jeol_month_index(15.0), 2);
        assert_eq!(jeol_month_index(255.0), 10);
        assert_eq!(jeol_month_index(285.0), 11);
    }

    #[test]
    fn prev_and_next_jeol_bracket_instant() {
        let jd = calendar_to_jd(1990, 1, 1.25);
        let prev = prev_jeol(jd).unwrap();
        let next = next_jeol(jd).unwrap();
        assert_eq!(prev.term, SolarTerm::Daeseol);
        assert_eq!(next.term, SolarTerm::Sohan);
        assert!(prev.jd_tt <= jd && jd < next.jd_tt);
        assert_kst(&next, "1990-01-05 23:33");
    }
}
