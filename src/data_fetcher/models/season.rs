use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::constants::wire::{CHAMPION_RESULT, CHAMPION_RESULT_NAME, TOP_DIVISION_NUMBER};

/// Lifecycle status of a season as reported by the league service.
///
/// The service sends small integers. Codes 0, 1, 2 and 4 are known; anything
/// else is kept verbatim as `Unrecognized` so that callers can refuse to act
/// on it instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeasonStatus {
    #[default]
    Scheduled,
    Active,
    Completed,
    RegistrationOpen,
    Unrecognized(i32),
}

impl SeasonStatus {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => SeasonStatus::Scheduled,
            1 => SeasonStatus::Active,
            2 => SeasonStatus::Completed,
            4 => SeasonStatus::RegistrationOpen,
            other => SeasonStatus::Unrecognized(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            SeasonStatus::Scheduled => 0,
            SeasonStatus::Active => 1,
            SeasonStatus::Completed => 2,
            SeasonStatus::RegistrationOpen => 4,
            SeasonStatus::Unrecognized(code) => *code,
        }
    }

    /// Maps the protobuf enum name some encoders emit instead of the integer.
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "SEASON_SCHEDULED" => Some(SeasonStatus::Scheduled),
            "SEASON_ACTIVE" => Some(SeasonStatus::Active),
            "SEASON_COMPLETED" => Some(SeasonStatus::Completed),
            "SEASON_REGISTRATION_OPEN" => Some(SeasonStatus::RegistrationOpen),
            _ => name.parse::<i32>().ok().map(SeasonStatus::from_code),
        }
    }
}

impl fmt::Display for SeasonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonStatus::Scheduled => write!(f, "Scheduled"),
            SeasonStatus::Active => write!(f, "Active"),
            SeasonStatus::Completed => write!(f, "Completed"),
            SeasonStatus::RegistrationOpen => write!(f, "Registration open"),
            SeasonStatus::Unrecognized(code) => write!(f, "Unrecognized({code})"),
        }
    }
}

impl Serialize for SeasonStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatus {
    Code(i32),
    Name(String),
}

impl<'de> Deserialize<'de> for SeasonStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawStatus::deserialize(deserializer)? {
            RawStatus::Code(code) => Ok(SeasonStatus::from_code(code)),
            RawStatus::Name(name) => SeasonStatus::from_name(&name).ok_or_else(|| {
                serde::de::Error::custom(format!("unknown season status '{name}'"))
            }),
        }
    }
}

/// Accepts a result code sent as a number, a numeric string or an enum name.
/// Only `RESULT_CHAMPION` is mapped by name; other names and anything
/// unparseable decode to -1, which never matches the champion code.
fn lenient_result<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawResult {
        Code(i32),
        Text(String),
    }

    Ok(match RawResult::deserialize(deserializer)? {
        RawResult::Code(code) => code,
        RawResult::Text(text) => match text.trim() {
            CHAMPION_RESULT_NAME => CHAMPION_RESULT,
            other => other.parse().unwrap_or(-1),
        },
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Standing {
    pub username: String,
    #[serde(deserialize_with = "lenient_result")]
    pub result: i32,
}

impl Standing {
    pub fn is_champion(&self) -> bool {
        self.result == CHAMPION_RESULT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Division {
    pub uuid: String,
    pub division_number: i32,
    /// Server order, never re-sorted locally.
    pub standings: Vec<Standing>,
}

impl Division {
    pub fn is_top(&self) -> bool {
        self.division_number == TOP_DIVISION_NUMBER
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Season {
    pub uuid: String,
    pub league_id: String,
    pub season_number: i32,
    pub status: SeasonStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub divisions: Vec<Division>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Registration {
    pub user_id: String,
    pub username: String,
    pub division_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonsResponse {
    pub seasons: Vec<Season>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonResponse {
    pub season: Option<Season>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationsResponse {
    pub registrations: Vec<Registration>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DivisionStandingsResponse {
    pub divisions: Vec<Division>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_observed_on_the_wire() {
        assert_eq!(SeasonStatus::from_code(0), SeasonStatus::Scheduled);
        assert_eq!(SeasonStatus::from_code(1), SeasonStatus::Active);
        assert_eq!(SeasonStatus::from_code(2), SeasonStatus::Completed);
        assert_eq!(SeasonStatus::from_code(4), SeasonStatus::RegistrationOpen);
        assert_eq!(SeasonStatus::from_code(3), SeasonStatus::Unrecognized(3));
    }

    #[test]
    fn test_status_deserializes_from_number_or_name() {
        let season: Season = serde_json::from_str(r#"{"uuid":"a","status":4}"#).unwrap();
        assert_eq!(season.status, SeasonStatus::RegistrationOpen);

        let season: Season =
            serde_json::from_str(r#"{"uuid":"a","status":"SEASON_COMPLETED"}"#).unwrap();
        assert_eq!(season.status, SeasonStatus::Completed);

        let season: Season = serde_json::from_str(r#"{"uuid":"a","status":"3"}"#).unwrap();
        assert_eq!(season.status, SeasonStatus::Unrecognized(3));

        assert!(serde_json::from_str::<Season>(r#"{"status":"SEASON_PAUSED"}"#).is_err());
    }

    #[test]
    fn test_status_serializes_as_integer() {
        let json = serde_json::to_string(&SeasonStatus::RegistrationOpen).unwrap();
        assert_eq!(json, "4");
    }

    #[test]
    fn test_omitted_fields_take_defaults() {
        let season: Season = serde_json::from_str(r#"{"uuid":"s1","seasonNumber":3}"#).unwrap();
        assert_eq!(season.status, SeasonStatus::Scheduled);
        assert!(season.start_date.is_none());
        assert!(season.divisions.is_empty());
    }

    #[test]
    fn test_standing_result_is_parsed_leniently() {
        let standing: Standing =
            serde_json::from_str(r#"{"username":"y","result":"4"}"#).unwrap();
        assert!(standing.is_champion());

        let standing: Standing =
            serde_json::from_str(r#"{"username":"z","result":"PROMOTED"}"#).unwrap();
        assert_eq!(standing.result, -1);
        assert!(!standing.is_champion());
    }

    #[test]
    fn test_standing_result_accepts_enum_names() {
        let season: Season = serde_json::from_str(
            r#"{"uuid":"s1","status":2,"divisions":[{"uuid":"d1","divisionNumber":1,
                "standings":[{"username":"x","result":"RESULT_PROMOTED"},
                             {"username":"y","result":"RESULT_CHAMPION"}]}]}"#,
        )
        .unwrap();
        let standings = &season.divisions[0].standings;
        assert!(!standings[0].is_champion());
        assert!(standings[1].is_champion());
        assert_eq!(
            crate::data_fetcher::processors::extract_champion(&season),
            Some("y")
        );
    }

    #[test]
    fn test_season_dates_parse_rfc3339() {
        let season: Season = serde_json::from_str(
            r#"{"uuid":"s1","startDate":"2025-03-01T00:00:00Z","endDate":"2025-03-29T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(
            season.start_date.unwrap().to_rfc3339(),
            "2025-03-01T00:00:00+00:00"
        );
        assert!(season.end_date.is_some());
    }
}
