//! Birth regions and the longitude correction of local clock time.
//!
//! Local mean solar time runs 4 minutes per degree of longitude ahead of
//! the zone meridian (135°E for KST). Seoul at 126.98°E is therefore about
//! 32 minutes behind its clock.

/// (names, longitude °E). Names match by prefix, so "서울특별시" finds 서울.
const REGIONS: [(&[&str], f64); 17] = [
    (&["서울", "seoul"], 126.98),
    (&["부산", "busan"], 129.08),
    (&["대구", "daegu"], 128.60),
    (&["인천", "incheon"], 126.70),
    (&["광주", "gwangju"], 126.85),
    (&["대전", "daejeon"], 127.38),
    (&["울산", "ulsan"], 129.31),
    (&["세종", "sejong"], 127.29),
    (&["제주", "jeju"], 126.53),
    (&["수원", "suwon"], 127.03),
    (&["춘천", "chuncheon"], 127.73),
    (&["강릉", "gangneung"], 128.90),
    (&["청주", "cheongju"], 127.49),
    (&["전주", "jeonju"], 127.15),
    (&["포항", "pohang"], 129.37),
    (&["창원", "changwon"], 128.68),
    (&["목포", "mokpo"], 126.39),
];

/// Longitude of a known region, `None` if the name is not recognized.
pub fn region_longitude(name: &str) -> Option<f64> {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    REGIONS
        .iter()
        .find(|(names, _)| names.iter().any(|n| key.starts_with(n)))
        .map(|&(_, lon)| lon)
}

/// Minutes to add to a clock at `utc_offset_minutes` to get local mean
/// solar time at `longitude_deg`.
pub fn longitude_offset_minutes(longitude_deg: f64, utc_offset_minutes: i32) -> i32 {
    (longitude_deg * 4.0 - f64::from(utc_offset_minutes)).round() as i32
}
