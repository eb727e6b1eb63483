//! Birth request as received from callers.

use serde::{Deserialize, Serialize};
use saju_calendar::CalendarType;

use crate::error::SajuError;

/// Biological sex as used for the daeun direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Male => "남",
            Self::Female => "여",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" | "남" | "남자" | "남성" => Ok(Self::Male),
            "f" | "female" | "여" | "여자" | "여성" => Ok(Self::Female),
            other => Err(SajuError::InvalidInput(format!("gender {other:?}"))),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = SajuError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A birth chart request.
///
/// `birth_date` is `YYYY-MM-DD` in the calendar named by `calendar_type`.
/// An absent or blank `birth_time` means the time is unknown.
/// `utc_offset_minutes` is the clock offset in force at the birth place
/// (e.g. 510 for Korea 1954–1961, 600 under summer time); when absent the
/// engine's configured offset applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRequest {
    #[serde(alias = "birthDate")]
    pub birth_date: String,
    #[serde(default, alias = "birthTime")]
    pub birth_time: Option<String>,
    pub gender: Gender,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, alias = "calendarType")]
    pub calendar_type: CalendarType,
    #[serde(default, alias = "isIntercalation")]
    pub is_intercalation: bool,
    #[serde(default, alias = "utcOffsetMinutes")]
    pub utc_offset_minutes: Option<i32>,
}

impl BirthRequest {
    /// Solar request with everything optional left unset.
    pub fn solar(birth_date: &str, birth_time: Option<&str>, gender: Gender) -> Self {
        Self {
            birth_date: birth_date.to_string(),
            birth_time: birth_time.map(str::to_string),
            gender,
            region: None,
            calendar_type: CalendarType::Solar,
            is_intercalation: false,
            utc_offset_minutes: None,
        }
    }

    /// Lunar request.
    pub fn lunar(
        birth_date: &str,
        birth_time: Option<&str>,
        gender: Gender,
        is_intercalation: bool,
    ) -> Self {
        Self {
            calendar_type: CalendarType::Lunar,
            is_intercalation,
            ..Self::solar(birth_date, birth_time, gender)
        }
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn with_utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = Some(minutes);
        self
    }

    /// Time string with blanks treated as absent.
    pub fn time_text(&self) -> &str {
        self.birth_time.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_aliases() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("여".parse::<Gender>().unwrap(), Gender::Female);
        assert!(matches!(
            "x".parse::<Gender>(),
            Err(SajuError::InvalidInput(_))
        ));
    }

    #[test]
    fn request_from_json() {
        let req: BirthRequest = serde_json::from_str(
            r#"{"birth_date":"1990-01-01","birth_time":"14:30","gender":"M"}"#,
        )
        .unwrap();
        assert_eq!(req, BirthRequest::solar("1990-01-01", Some("14:30"), Gender::Male));
    }

    #[test]
    fn request_accepts_camel_case() {
        let req: BirthRequest = serde_json::from_str(
            r#"{"birthDate":"2023-02-10","gender":"F","calendarType":"lunar","isIntercalation":true}"#,
        )
        .unwrap();
        assert_eq!(req.calendar_type, CalendarType::Lunar);
        assert!(req.is_intercalation);
        assert_eq!(req.time_text(), "");
    }

    #[test]
    fn request_carries_utc_offset() {
        let req: BirthRequest = serde_json::from_str(
            r#"{"birthDate":"1955-06-01","gender":"M","utcOffsetMinutes":510}"#,
        )
        .unwrap();
        assert_eq!(
            req,
            BirthRequest::solar("1955-06-01", None, Gender::Male).with_utc_offset(510)
        );
    }

    #[test]
    fn bad_gender_fails_deserialization() {
        let res: Result<BirthRequest, _> =
            serde_json::from_str(r#"{"birth_date":"1990-01-01","gender":"?"}"#);
        assert!(res.is_err());
    }
}
