//! ΔT = TT − UT estimate.
//!
//! Piecewise polynomials of Espenak & Meeus (NASA eclipse canon), restricted
//! to the span the lunar table covers plus margin. Accuracy is a few seconds
//! for the 20th century, which is far below the resolution that matters for
//! solar-term boundaries.

use crate::julian::J2000_JD;

/// Convert JD TT to JD UT.
pub fn tt_to_ut(jd_tt: f64) -> f64 {
    let decimal_year = 2000.0 + (jd_tt - J2000_JD) / 365.25;
    jd_tt - delta_t_seconds(decimal_year) / 86_400.0
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1900.0 {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    } else if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t.powi(2)
    } else if year < 2150.0 {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000_near_64s() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.01, "got {dt}");
    }

    #[test]
    fn tt_to_ut_subtracts_delta_t() {
        let diff_s = (J2000_JD - tt_to_ut(J2000_JD)) * 86_400.0;
        assert!((diff_s - 63.86).abs() < 0.01, "got {diff_s}");
    }

    #[test]
    fn year_1900_near_zero() {
        assert!(delta_t_seconds(1900.0).abs() < 3.0);
    }

    #[test]
    fn segments_are_roughly_continuous() {
        for boundary in [1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0, 2150.0] {
            let before = delta_t_seconds(boundary - 1e-6);
            let after = delta_t_seconds(boundary);
            assert!(
                (before - after).abs() < 2.0,
                "jump at {boundary}: {before} vs {after}"
            );
        }
    }
}
