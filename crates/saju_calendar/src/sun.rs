//! Apparent geocentric longitude of the Sun.
//!
//! Truncated VSOP87D series for the heliocentric longitude of the Earth
//! (Meeus, *Astronomical Algorithms*, ch. 25 and appendix III), followed by
//! the FK5 correction, a four-term nutation in longitude and annual
//! aberration. Accuracy is about one arcsecond, i.e. solar-term instants to
//! within a minute across 1900–2100.

use saju_time::{J2000_JD, jd_to_centuries};

/// Arcseconds to degrees.
const AS2DEG: f64 = 1.0 / 3600.0;

/// Constant of aberration in arcseconds (for R = 1 AU).
const ABERRATION_AS: f64 = 20.4898;

/// VSOP87D Earth L terms: `[A, B, C]`, term = A·cos(B + C·τ), A in 1e-8 rad.
#[rustfmt::skip]
static EARTH_L0: [[f64; 3]; 64] = [
    [175_347_046.0, 0.0, 0.0],
    [3_341_656.0, 4.669_256_8, 6_283.075_850_0],
    [34_894.0, 4.626_10, 12_566.151_70],
    [3_497.0, 2.744_1, 5_753.384_9],
    [3_418.0, 2.828_9, 3.523_1],
    [3_136.0, 3.627_7, 77_713.771_5],
    [2_676.0, 4.418_1, 7_860.419_4],
    [2_343.0, 6.135_2, 3_930.209_7],
    [1_324.0, 0.742_5, 11_506.769_8],
    [1_273.0, 2.037_1, 529.691_0],
    [1_199.0, 1.109_6, 1_577.343_5],
    [990.0, 5.233, 5_884.927],
    [902.0, 2.045, 26.298],
    [857.0, 3.508, 398.149],
    [780.0, 1.179, 5_223.694],
    [753.0, 2.533, 5_507.553],
    [505.0, 4.583, 18_849.228],
    [492.0, 4.205, 775.523],
    [357.0, 2.920, 0.067],
    [317.0, 5.849, 11_790.629],
    [284.0, 1.899, 796.298],
    [271.0, 0.315, 10_977.079],
    [243.0, 0.345, 5_486.778],
    [206.0, 4.806, 2_544.314],
    [205.0, 1.869, 5_573.143],
    [202.0, 2.458, 6_069.777],
    [156.0, 0.833, 213.299],
    [132.0, 3.411, 2_942.463],
    [126.0, 1.083, 20.775],
    [115.0, 0.645, 0.980],
    [103.0, 0.636, 4_694.003],
    [102.0, 0.976, 15_720.839],
    [102.0, 4.267, 7.114],
    [99.0, 6.21, 2_146.17],
    [98.0, 0.68, 155.42],
    [86.0, 5.98, 161_000.69],
    [85.0, 1.30, 6_275.96],
    [85.0, 3.67, 71_430.70],
    [80.0, 1.81, 17_260.15],
    [79.0, 3.04, 12_036.46],
    [75.0, 1.76, 5_088.63],
    [74.0, 3.50, 3_154.69],
    [74.0, 4.68, 801.82],
    [70.0, 0.83, 9_437.76],
    [62.0, 3.98, 8_827.39],
    [61.0, 1.82, 7_084.90],
    [57.0, 2.78, 6_286.60],
    [56.0, 4.39, 14_143.50],
    [56.0, 3.47, 6_279.55],
    [52.0, 0.19, 12_139.55],
    [52.0, 1.33, 1_748.02],
    [51.0, 0.28, 5_856.48],
    [49.0, 0.49, 1_194.45],
    [41.0, 5.37, 8_429.24],
    [41.0, 2.40, 19_651.05],
    [39.0, 6.17, 10_447.39],
    [37.0, 6.04, 10_213.29],
    [37.0, 2.57, 1_059.38],
    [36.0, 1.71, 2_352.87],
    [36.0, 1.78, 6_812.77],
    [33.0, 0.59, 17_789.85],
    [30.0, 0.44, 83_996.85],
    [30.0, 2.74, 1_349.87],
    [25.0, 3.16, 4_690.48],
];

#[rustfmt::skip]
static EARTH_L1: [[f64; 3]; 34] = [
    [628_331_966_747.0, 0.0, 0.0],
    [206_059.0, 2.678_235, 6_283.075_850],
    [4_303.0, 2.635_1, 12_566.151_7],
    [425.0, 1.590, 3.523],
    [119.0, 5.796, 26.298],
    [109.0, 2.966, 1_577.344],
    [93.0, 2.59, 18_849.23],
    [72.0, 1.14, 529.69],
    [68.0, 1.87, 398.15],
    [67.0, 4.41, 5_507.55],
    [59.0, 2.89, 5_223.69],
    [56.0, 2.17, 155.42],
    [45.0, 0.40, 796.30],
    [36.0, 0.47, 775.52],
    [29.0, 2.65, 7.11],
    [21.0, 5.34, 0.98],
    [19.0, 1.85, 5_486.78],
    [19.0, 4.97, 213.30],
    [17.0, 2.99, 6_275.96],
    [16.0, 0.03, 2_544.31],
    [16.0, 1.43, 2_146.17],
    [15.0, 1.21, 10_977.08],
    [12.0, 2.83, 1_748.02],
    [12.0, 3.26, 5_088.63],
    [12.0, 5.27, 1_194.45],
    [12.0, 2.08, 4_694.00],
    [11.0, 0.77, 553.57],
    [10.0, 1.30, 6_286.60],
    [10.0, 4.24, 1_349.87],
    [9.0, 2.70, 242.73],
    [9.0, 5.64, 951.72],
    [8.0, 5.30, 2_352.87],
    [6.0, 2.65, 9_437.76],
    [6.0, 4.67, 4_690.48],
];

#[rustfmt::skip]
static EARTH_L2: [[f64; 3]; 20] = [
    [52_919.0, 0.0, 0.0],
    [8_720.0, 1.072_1, 6_283.075_8],
    [309.0, 0.867, 12_566.152],
    [27.0, 0.05, 3.52],
    [16.0, 5.19, 26.30],
    [16.0, 3.68, 155.42],
    [10.0, 0.76, 18_849.23],
    [9.0, 2.06, 77_713.77],
    [7.0, 0.83, 775.52],
    [5.0, 4.66, 1_577.34],
    [4.0, 1.03, 7.11],
    [4.0, 3.44, 5_573.14],
    [3.0, 5.14, 796.30],
    [3.0, 6.05, 5_507.55],
    [3.0, 1.19, 242.73],
    [3.0, 6.12, 529.69],
    [3.0, 0.31, 398.15],
    [3.0, 2.28, 553.57],
    [2.0, 4.38, 5_223.69],
    [2.0, 3.75, 0.98],
];

#[rustfmt::skip]
static EARTH_L3: [[f64; 3]; 7] = [
    [289.0, 5.844, 6_283.076],
    [35.0, 0.0, 0.0],
    [17.0, 5.49, 12_566.15],
    [3.0, 5.20, 155.42],
    [1.0, 4.72, 3.52],
    [1.0, 5.30, 18_849.23],
    [1.0, 5.97, 242.73],
];

#[rustfmt::skip]
static EARTH_L4: [[f64; 3]; 3] = [
    [114.0, 3.142, 0.0],
    [8.0, 4.13, 6_283.08],
    [1.0, 3.84, 12_566.15],
];

static EARTH_L5: [[f64; 3]; 1] = [[1.0, 3.14, 0.0]];

fn series(terms: &[[f64; 3]], tau: f64) -> f64 {
    terms
        .iter()
        .map(|[a, b, c]| a * (b + c * tau).cos())
        .sum()
}

/// Heliocentric ecliptic longitude of the Earth (radians, mean equinox of date).
fn earth_longitude_rad(jd_tt: f64) -> f64 {
    let tau = (jd_tt - J2000_JD) / 365_250.0;
    let powers = [
        series(&EARTH_L0, tau),
        series(&EARTH_L1, tau),
        series(&EARTH_L2, tau),
        series(&EARTH_L3, tau),
        series(&EARTH_L4, tau),
        series(&EARTH_L5, tau),
    ];
    // Horner in τ
    powers.iter().rev().fold(0.0, |acc, p| acc * tau + p) * 1e-8
}

/// Nutation in longitude Δψ in arcseconds (four leading terms).
pub fn nutation_longitude_as(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let omega = (125.044_52 - 1_934.136_261 * t).to_radians();
    let sun_mean = (280.4665 + 36_000.7698 * t).to_radians();
    let moon_mean = (218.3165 + 481_267.8813 * t).to_radians();
    -17.20 * omega.sin() - 1.32 * (2.0 * sun_mean).sin() - 0.23 * (2.0 * moon_mean).sin()
        + 0.21 * (2.0 * omega).sin()
}

/// Apparent geocentric ecliptic longitude of the Sun in degrees, [0, 360).
pub fn apparent_longitude(jd_tt: f64) -> f64 {
    let geometric = earth_longitude_rad(jd_tt).to_degrees() + 180.0;
    let fk5 = -0.090_33 * AS2DEG;
    let nutation = nutation_longitude_as(jd_tt) * AS2DEG;
    let aberration = -ABERRATION_AS * AS2DEG;
    (geometric + fk5 + nutation + aberration).rem_euclid(360.0)
}

/// Normalize an angle to (-180, +180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}
