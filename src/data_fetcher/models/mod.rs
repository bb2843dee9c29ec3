pub mod league;
pub mod season;
pub mod tournament;

pub use league::{League, LeagueResponse, LeagueSettings, LeaguesResponse, TimeControl};
pub use season::{
    Division, DivisionStandingsResponse, Registration, RegistrationsResponse, Season,
    SeasonResponse, SeasonStatus, SeasonsResponse, Standing,
};
pub use tournament::{
    TournamentInstance, TournamentListResponse, TournamentMetadataResponse, TournamentPerson,
    TournamentPersons,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_metadata_response_from_wire() {
        let json = r#"{
            "metadata": {
                "id": "t1",
                "name": "Spring Open",
                "slug": "/tournament/spring-open",
                "scheduledStartTime": "2025-04-01T15:00:00Z",
                "registrantCount": 42,
                "irlMode": true,
                "firstDirector": "alice"
            },
            "directors": ["alice", "bob:readonly"]
        }"#;

        let response: TournamentMetadataResponse = serde_json::from_str(json).unwrap();
        let metadata = response.metadata.unwrap();

        assert_eq!(metadata.name, "Spring Open");
        assert_eq!(metadata.registrant_count, 42);
        assert!(metadata.irl_mode);
        assert!(!metadata.monitored);
        assert!(metadata.scheduled_start.is_some());
        assert!(metadata.scheduled_end.is_none());
        assert_eq!(response.directors, vec!["alice", "bob:readonly"]);
    }

    #[test]
    fn test_league_settings_from_wire() {
        let json = r#"{
            "uuid": "l1",
            "slug": "woogleague",
            "name": "Woogle League",
            "isActive": true,
            "settings": {
                "seasonLengthDays": 28,
                "timeControl": {"incrementSeconds": 0, "timeBankMinutes": 4320},
                "lexicon": "CSW24",
                "idealDivisionSize": 15
            }
        }"#;

        let league: League = serde_json::from_str(json).unwrap();

        assert!(league.is_active);
        assert_eq!(league.settings.season_length_days, 28);
        assert_eq!(league.settings.time_control.time_bank_minutes, 4320);
        assert_eq!(league.settings.variant, "");
        assert_eq!(league.settings.challenge_rule, 0);
    }

    #[test]
    fn test_director_request_serializes_camel_case() {
        let request = TournamentPersons {
            id: "t1".to_string(),
            division: String::new(),
            persons: vec![TournamentPerson {
                id: "bob".to_string(),
                rating: -1,
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "t1",
                "division": "",
                "persons": [{"id": "bob", "rating": -1}]
            })
        );
    }
}
