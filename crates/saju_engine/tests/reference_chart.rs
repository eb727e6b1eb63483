//! End-to-end pipeline on known charts.

use pretty_assertions::assert_eq;
use saju_calendar::CalendarError;
use saju_engine::{BirthRequest, Gender, SajuConfig, SajuEngine, SajuError, SajuErrorKind};
use serde_json::{Value, json};

fn engine() -> SajuEngine {
    SajuEngine::new(SajuConfig::default()).unwrap()
}

fn reference_json() -> Value {
    let req = BirthRequest::solar("1990-01-01", Some("14:30"), Gender::Male);
    serde_json::to_value(engine().compute(&req, 2025).unwrap()).unwrap()
}

#[test]
fn reference_pillars() {
    let v = reference_json();
    assert_eq!(
        v["gapjaChinese"],
        json!({"year": "己巳", "month": "丙子", "day": "丙寅", "hour": "乙未"})
    );
    assert_eq!(
        v["gapjaKorean"],
        json!({"year": "기사", "month": "병자", "day": "병인", "hour": "을미"})
    );
}

#[test]
fn reference_calendar_fields() {
    let v = reference_json();
    assert_eq!(v["calendarType"], "solar");
    assert_eq!(v["isIntercalation"], false);
    assert_eq!(v["solar"], json!({"year": 1990, "month": 1, "day": 1}));
    assert_eq!(
        v["lunar"],
        json!({"year": 1989, "month": 12, "day": 5, "isLeap": false})
    );
}

#[test]
fn reference_elements_and_ten_gods() {
    let v = reference_json();
    assert_eq!(
        v["ohang"]["distribution"],
        json!({"목": 2, "화": 3, "토": 2, "금": 0, "수": 1})
    );
    assert_eq!(v["ohang"]["dayMaster"], "병화");
    assert_eq!(v["ohang"]["missing"], json!(["금"]));

    assert_eq!(v["sipseong"]["day"]["ko"], "일간");
    assert_eq!(v["sipseong"]["year"]["ko"], "상관");
    assert_eq!(v["sipseong"]["month"]["ko"], "비견");
    assert_eq!(v["sipseong"]["hour"]["ko"], "정인");
    assert_eq!(v["unseong12"]["day"], "장생");
}

#[test]
fn reference_luck() {
    let v = reference_json();
    let daeun = &v["daeun"];
    assert_eq!(daeun["direction"], "backward");
    let steps = daeun["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 10);
    assert_eq!(steps[0]["gapja"], "乙亥");
    assert_eq!(steps[1]["gapja"], "甲戌");
    assert_eq!(steps[0]["age"], 8);
    assert_eq!(steps[0]["startYear"], 1998);
    assert_eq!(steps[1]["age"], 18);

    let seun = v["seun"].as_array().unwrap();
    assert_eq!(seun.len(), 10);
    assert_eq!(seun[0]["year"], 2020);
    assert_eq!(seun[5]["year"], 2025);
    assert_eq!(seun[5]["gapja"], "乙巳");

    let woleun = v["woleun"].as_array().unwrap();
    assert_eq!(woleun.len(), 12);
    assert_eq!(woleun[0]["month"], 1);
    assert!(woleun[1]["termStart"].as_str().unwrap().starts_with("2025-02-03"));
}

#[test]
fn same_request_same_json() {
    assert_eq!(reference_json(), reference_json());
}

#[test]
fn lunar_input_matches_solar_chart() {
    let lunar = BirthRequest::lunar("1989-12-05", Some("14:30"), Gender::Male, false);
    let v = serde_json::to_value(engine().compute(&lunar, 2025).unwrap()).unwrap();
    let reference = reference_json();
    assert_eq!(v["calendarType"], "lunar");
    assert_eq!(v["gapjaChinese"], reference["gapjaChinese"]);
    assert_eq!(v["solar"], reference["solar"]);
    assert_eq!(v["daeun"], reference["daeun"]);
}

#[test]
fn unknown_time_leaves_hour_null() {
    let req = BirthRequest::solar("1990-01-01", None, Gender::Male);
    let v = serde_json::to_value(engine().compute(&req, 2025).unwrap()).unwrap();
    for key in [
        "gapjaKorean",
        "gapjaChinese",
        "sipseong",
        "unseong12",
        "cheonganRelation",
        "jijiRelation",
        "sinsal12",
        "sinsalCombined",
    ] {
        assert!(v[key]["hour"].is_null(), "{key}.hour");
        assert!(!v[key]["day"].is_null(), "{key}.day");
    }
    let total: u64 = v["ohang"]["distribution"]
        .as_object()
        .unwrap()
        .values()
        .map(|n| n.as_u64().unwrap())
        .sum();
    assert_eq!(total, 6);
}

#[test]
fn leap_flag_on_ordinary_month_is_rejected() {
    let req = BirthRequest::lunar("2023-03-15", Some("10:00"), Gender::Female, true);
    let err = engine().compute(&req, 2025).unwrap_err();
    assert_eq!(
        err,
        SajuError::Calendar(CalendarError::InvalidIntercalationFlag {
            year: 2023,
            month: 3
        })
    );
    assert_eq!(err.kind(), SajuErrorKind::InvalidIntercalationFlag);
}

#[test]
fn leap_month_input_is_accepted() {
    // 2023 has a leap 2nd month
    let req = BirthRequest::lunar("2023-02-15", None, Gender::Female, true);
    let v = serde_json::to_value(engine().compute(&req, 2025).unwrap()).unwrap();
    assert_eq!(v["isIntercalation"], true);
    assert_eq!(v["lunar"]["isLeap"], true);
    assert_eq!(v["solar"], json!({"year": 2023, "month": 4, "day": 5}));
}

#[test]
fn out_of_range_year_is_rejected() {
    let req = BirthRequest::solar("1850-06-01", None, Gender::Male);
    let err = engine().compute(&req, 2025).unwrap_err();
    assert!(err.is_user_error());
}

#[test]
fn malformed_date_is_rejected() {
    let req = BirthRequest::solar("1990/01/01", None, Gender::Male);
    let err = engine().compute(&req, 2025).unwrap_err();
    assert_eq!(err.kind(), SajuErrorKind::InvalidDate);
}

#[test]
fn true_solar_time_moves_hour_boundary() {
    // 13:10 KST in Seoul is 12:38 local mean time: 午 hour instead of 未
    let req = BirthRequest::solar("1990-01-01", Some("13:10"), Gender::Male).with_region("서울");
    let plain = serde_json::to_value(engine().compute(&req, 2025).unwrap()).unwrap();
    let tst = SajuEngine::new(SajuConfig {
        true_solar_time: true,
        ..SajuConfig::default()
    })
    .unwrap();
    let corrected = serde_json::to_value(tst.compute(&req, 2025).unwrap()).unwrap();
    assert_eq!(plain["gapjaChinese"]["hour"], "乙未");
    assert_eq!(corrected["gapjaChinese"]["hour"], "甲午");
}

#[test]
fn request_deserializes_from_camel_case() {
    let req: BirthRequest = serde_json::from_value(json!({
        "birthDate": "1990-01-01",
        "birthTime": "14:30",
        "gender": "M",
        "calendarType": "solar",
        "isIntercalation": false
    }))
    .unwrap();
    assert_eq!(
        req,
        BirthRequest::solar("1990-01-01", Some("14:30"), Gender::Male)
    );
}

#[test]
fn birth_offset_moves_ipchun_boundary() {
    // ipchun 2024 fell at 08:27 UTC (17:27 on a +09:00 clock)
    let kst = BirthRequest::solar("2024-02-04", Some("17:10"), Gender::Female);
    let v = serde_json::to_value(engine().compute(&kst, 2025).unwrap()).unwrap();
    assert_eq!(v["gapjaChinese"]["year"], "癸卯");
    assert_eq!(v["gapjaChinese"]["month"], "乙丑");

    // the same clock reading on a +08:30 clock is 08:40 UTC, after ipchun
    let half_hour = kst.with_utc_offset(510);
    let v = serde_json::to_value(engine().compute(&half_hour, 2025).unwrap()).unwrap();
    assert_eq!(v["gapjaChinese"]["year"], "甲辰");
    assert_eq!(v["gapjaChinese"]["month"], "丙寅");
}

#[test]
fn out_of_range_birth_offset_is_rejected() {
    let req = BirthRequest::solar("1990-01-01", None, Gender::Male).with_utc_offset(-800);
    let err = engine().compute(&req, 2025).unwrap_err();
    assert_eq!(err.kind(), SajuErrorKind::InvalidInput);
}
