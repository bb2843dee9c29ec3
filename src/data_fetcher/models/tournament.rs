use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tournament metadata as listed by the tournament service. Read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentInstance {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "scheduledStartTime")]
    pub scheduled_start: Option<DateTime<Utc>>,
    #[serde(rename = "scheduledEndTime")]
    pub scheduled_end: Option<DateTime<Utc>>,
    pub registration_open: bool,
    pub registrant_count: i32,
    pub irl_mode: bool,
    pub monitored: bool,
    pub first_director: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentListResponse {
    pub tournaments: Vec<TournamentInstance>,
}

/// Response of `GetTournamentMetadata`: the tournament plus its raw director roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentMetadataResponse {
    pub metadata: Option<TournamentInstance>,
    /// Stored strings, possibly carrying the read-only suffix.
    pub directors: Vec<String>,
}

/// One entry of an `AddDirectors`/`RemoveDirectors` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentPerson {
    pub id: String,
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentPersons {
    pub id: String,
    pub division: String,
    pub persons: Vec<TournamentPerson>,
}
