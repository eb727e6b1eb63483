//! Embedded lunisolar reference table, lunar years 1900–2100.
//!
//! One word per lunar year:
//! - bits 0..4: intercalary month number (0 = none)
//! - bits 4..16: month lengths, bit `0x10000 >> m` set = month `m` has 30 days
//! - bit 16: the intercalary month has 30 days
//!
//! Months follow the Korean reckoning: a month starts on the civil date of the
//! new moon and the intercalary month is the first month of a 13-month
//! solstice year without a principal term, both evaluated in the standard
//! time in force in Korea (UTC+9, UTC+8:30 for 1908–1911 and 1954–1961,
//! Seoul mean time before 1908). The Chinese almanac uses UTC+8 and differs
//! in a number of years, e.g. 2012 (윤3월 here, 윤4월 there) and 2017
//! (윤5월 here, 윤6월 there).
//!
//! Lunar 1900-01-01 fell on solar 1900-01-31.

/// First lunar year covered by [`LUNAR_INFO`].
pub const FIRST_LUNAR_YEAR: i32 = 1900;

/// Last lunar year covered by [`LUNAR_INFO`].
pub const LAST_LUNAR_YEAR: i32 = 2100;

/// Solar date of lunar 1900-01-01 as `(year, month, day)`.
pub const EPOCH_SOLAR_YMD: (i32, u32, u32) = (1900, 1, 31);

/// Packed year words, index 0 = lunar 1900.
pub static LUNAR_INFO: [u32; 201] = [
    // 1900-1909
    0x04bd8, 0x04ae0, 0x0a570, 0x054e5, 0x0d2a0, 0x0e950, 0x16554, 0x056a0, 0x0aad0, 0x055d2,
    // 1910-1919
    0x04ae0, 0x0a5d6, 0x0a4d0, 0x0d250, 0x0da95, 0x0b550, 0x056a0, 0x0ada2, 0x095d0, 0x04bb7,
    // 1920-1929
    0x049b0, 0x0a4b0, 0x0b4b5, 0x06a90, 0x0ad40, 0x0bb54, 0x02b60, 0x095b0, 0x05372, 0x04970,
    // 1930-1939
    0x06566, 0x0e4a0, 0x0ea50, 0x16a95, 0x05b50, 0x02b60, 0x18ae3, 0x092e0, 0x1c8d7, 0x0c950,
    // 1940-1949
    0x0d4a0, 0x1d8a6, 0x0b690, 0x056d0, 0x125b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0d557,
    // 1950-1959
    0x0b4a0, 0x0b550, 0x15555, 0x04db0, 0x025b0, 0x18573, 0x052b0, 0x0a9b8, 0x06950, 0x06aa0,
    // 1960-1969
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05270, 0x07263, 0x0d950, 0x06b57, 0x056a0,
    // 1970-1979
    0x09ad0, 0x04dd5, 0x04ae0, 0x0a4e0, 0x0d4d4, 0x0d250, 0x0d598, 0x0b540, 0x0d6a0, 0x195a6,
    // 1980-1989
    0x095b0, 0x049b0, 0x0a9b4, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0b756, 0x02b60, 0x095b0,
    // 1990-1999
    0x04b75, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06d98, 0x05ad0, 0x02b60, 0x096e5, 0x092e0,
    // 2000-2009
    0x0c960, 0x0e954, 0x0d4a0, 0x0da50, 0x07552, 0x056c0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    // 2010-2019
    0x0a950, 0x0b4a0, 0x1b4a3, 0x0b550, 0x055d9, 0x04ba0, 0x0a5b0, 0x05575, 0x052b0, 0x0a950,
    // 2020-2029
    0x0b954, 0x06aa0, 0x0ad50, 0x06b52, 0x04b60, 0x0a6e6, 0x0a570, 0x05270, 0x06a65, 0x0d930,
    // 2030-2039
    0x05aa0, 0x0b6a3, 0x096d0, 0x04afb, 0x04ae0, 0x0a4d0, 0x1d0d6, 0x0d250, 0x0d520, 0x0dd45,
    // 2040-2049
    0x0b6a0, 0x096d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0b250, 0x1b255, 0x06d40, 0x0ada0,
    // 2050-2059
    0x18b63, 0x09570, 0x14978, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1aac4, 0x0ab60,
    // 2060-2069
    0x09370, 0x052e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0aad0, 0x095d4,
    // 2070-2079
    0x092d0, 0x0c9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    // 2080-2089
    0x0b2b3, 0x0a930, 0x07557, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054f4, 0x05260,
    // 2090-2099
    0x0e968, 0x0d530, 0x05aa0, 0x1aaa6, 0x096d0, 0x04ae0, 0x0aad4, 0x0a4d0, 0x0d260, 0x0f253,
    // 2100
    0x0d520,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_range() {
        assert_eq!(
            LUNAR_INFO.len() as i32,
            LAST_LUNAR_YEAR - FIRST_LUNAR_YEAR + 1
        );
    }

    #[test]
    fn leap_months_in_range() {
        for word in LUNAR_INFO {
            assert!(word & 0xf <= 12);
            assert!(word >> 17 == 0, "stray high bits in {word:#x}");
        }
    }
}
