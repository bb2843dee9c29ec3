use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeControl {
    pub increment_seconds: i32,
    pub time_bank_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueSettings {
    pub season_length_days: i32,
    pub time_control: TimeControl,
    pub lexicon: String,
    pub variant: String,
    pub ideal_division_size: i32,
    /// 0 is double challenge
    pub challenge_rule: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct League {
    pub uuid: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub settings: LeagueSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaguesResponse {
    pub leagues: Vec<League>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueResponse {
    pub league: Option<League>,
}
