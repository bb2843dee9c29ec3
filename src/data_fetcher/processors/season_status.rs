//! Resolves one displayable status per league from its newest seasons.
//!
//! Only three outcomes are ever shown: registration open, a live season
//! (optionally with the champion of the season before it), or a completed
//! season with a champion. Everything else is suppressed.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::champion::extract_champion;
use crate::constants::time_window::PREVIOUS_CHAMPION_WINDOW_SECONDS;
use crate::data_fetcher::models::{League, Season, SeasonStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueStatus {
    RegistrationOpen {
        starts: Option<DateTime<Utc>>,
    },
    Live {
        ends: Option<DateTime<Utc>>,
        previous_champion: Option<String>,
    },
    Completed {
        champion: String,
    },
}

impl LeagueStatus {
    /// Label for the date shown next to the status.
    pub fn date_label(&self) -> Option<&'static str> {
        match self {
            LeagueStatus::RegistrationOpen { .. } => Some("Starts"),
            LeagueStatus::Live { .. } => Some("Ends"),
            LeagueStatus::Completed { .. } => None,
        }
    }

    pub fn shown_date(&self) -> Option<DateTime<Utc>> {
        match self {
            LeagueStatus::RegistrationOpen { starts } => *starts,
            LeagueStatus::Live { ends, .. } => *ends,
            LeagueStatus::Completed { .. } => None,
        }
    }
}

/// A league paired with its resolved status, as shown in the events view.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueStatusView {
    pub league: League,
    pub season_id: String,
    pub season_number: i32,
    pub status: LeagueStatus,
}

/// Resolves a status from the league's seasons, newest first.
///
/// Only the newest season and, for a live season, the one before it are
/// consulted. Returns `None` when the league should not be shown.
pub fn resolve_league_status(seasons: &[Season], now: DateTime<Utc>) -> Option<LeagueStatus> {
    let current = seasons.first()?;

    match current.status {
        SeasonStatus::RegistrationOpen => Some(LeagueStatus::RegistrationOpen {
            starts: current.start_date,
        }),
        SeasonStatus::Active => Some(LeagueStatus::Live {
            ends: current.end_date,
            previous_champion: previous_champion(current, seasons.get(1), now),
        }),
        SeasonStatus::Completed => extract_champion(current).map(|champion| {
            LeagueStatus::Completed {
                champion: champion.to_string(),
            }
        }),
        SeasonStatus::Scheduled | SeasonStatus::Unrecognized(_) => {
            debug!(
                "Season {} has status {}, not shown",
                current.uuid, current.status
            );
            None
        }
    }
}

/// The champion of the directly preceding season, shown only during the
/// first week of the current one.
fn previous_champion(
    current: &Season,
    previous: Option<&Season>,
    now: DateTime<Utc>,
) -> Option<String> {
    let previous = previous?;
    if previous.season_number != current.season_number - 1 {
        return None;
    }

    let elapsed = now
        .signed_duration_since(current.start_date?)
        .num_seconds();
    if !(0..=PREVIOUS_CHAMPION_WINDOW_SECONDS).contains(&elapsed) {
        return None;
    }

    extract_champion(previous).map(str::to_string)
}

/// Resolves the view for one league; `None` means the league is dropped.
pub fn resolve_league(
    league: &League,
    seasons: &[Season],
    now: DateTime<Utc>,
) -> Option<LeagueStatusView> {
    let status = resolve_league_status(seasons, now)?;
    let current = seasons.first()?;

    Some(LeagueStatusView {
        league: league.clone(),
        season_id: current.uuid.clone(),
        season_number: current.season_number,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{Division, Standing};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, 18, 0, 0).unwrap()
    }

    fn top_division(standings: &[(&str, i32)]) -> Division {
        Division {
            uuid: "top".to_string(),
            division_number: 1,
            standings: standings
                .iter()
                .map(|(username, result)| Standing {
                    username: username.to_string(),
                    result: *result,
                })
                .collect(),
        }
    }

    fn season(number: i32, status: SeasonStatus) -> Season {
        Season {
            uuid: format!("season-{number}"),
            league_id: "league".to_string(),
            season_number: number,
            status,
            ..Season::default()
        }
    }

    fn active_with_previous(started_ago: Duration) -> Vec<Season> {
        let mut current = season(5, SeasonStatus::Active);
        current.start_date = Some(now() - started_ago);
        current.end_date = Some(now() + Duration::days(20));

        let mut previous = season(4, SeasonStatus::Completed);
        previous.divisions = vec![top_division(&[("winner", 4), ("runner_up", 2)])];

        vec![current, previous]
    }

    #[test]
    fn test_no_seasons_is_suppressed() {
        assert_eq!(resolve_league_status(&[], now()), None);
    }

    #[test]
    fn test_registration_open_shows_start_date() {
        let mut current = season(2, SeasonStatus::RegistrationOpen);
        current.start_date = Some(now() + Duration::days(3));

        let status = resolve_league_status(&[current.clone()], now()).unwrap();

        assert_eq!(status.date_label(), Some("Starts"));
        assert_eq!(status.shown_date(), current.start_date);
    }

    #[test]
    fn test_active_shows_end_date() {
        let seasons = active_with_previous(Duration::days(12));
        let status = resolve_league_status(&seasons, now()).unwrap();

        assert_eq!(status.date_label(), Some("Ends"));
        assert_eq!(status.shown_date(), seasons[0].end_date);
    }

    #[test]
    fn test_completed_with_champion() {
        let mut current = season(3, SeasonStatus::Completed);
        current.divisions = vec![top_division(&[("x", 2), ("y", 4)])];

        assert_eq!(
            resolve_league_status(&[current], now()),
            Some(LeagueStatus::Completed {
                champion: "y".to_string()
            })
        );
    }

    #[test]
    fn test_completed_without_champion_is_suppressed() {
        let mut current = season(3, SeasonStatus::Completed);
        current.divisions = vec![top_division(&[("x", 2), ("y", 1)])];

        assert_eq!(resolve_league_status(&[current], now()), None);
    }

    #[test]
    fn test_scheduled_and_unrecognized_are_suppressed() {
        assert_eq!(
            resolve_league_status(&[season(1, SeasonStatus::Scheduled)], now()),
            None
        );
        assert_eq!(
            resolve_league_status(&[season(1, SeasonStatus::Unrecognized(3))], now()),
            None
        );
    }

    #[test]
    fn test_previous_champion_within_first_week() {
        let seasons = active_with_previous(Duration::days(3));

        assert_eq!(
            resolve_league_status(&seasons, now()),
            Some(LeagueStatus::Live {
                ends: seasons[0].end_date,
                previous_champion: Some("winner".to_string()),
            })
        );
    }

    #[test]
    fn test_previous_champion_dropped_after_first_week() {
        let seasons = active_with_previous(Duration::days(10));

        match resolve_league_status(&seasons, now()) {
            Some(LeagueStatus::Live {
                previous_champion, ..
            }) => assert_eq!(previous_champion, None),
            other => panic!("expected live status, got {other:?}"),
        }
    }

    #[test]
    fn test_previous_champion_window_edges() {
        let at_edge = active_with_previous(Duration::seconds(PREVIOUS_CHAMPION_WINDOW_SECONDS));
        let past_edge =
            active_with_previous(Duration::seconds(PREVIOUS_CHAMPION_WINDOW_SECONDS + 1));
        let not_started = active_with_previous(Duration::seconds(-60));

        let champion_of = |seasons: &[Season]| match resolve_league_status(seasons, now()) {
            Some(LeagueStatus::Live {
                previous_champion, ..
            }) => previous_champion,
            other => panic!("expected live status, got {other:?}"),
        };

        assert_eq!(champion_of(&at_edge), Some("winner".to_string()));
        assert_eq!(champion_of(&past_edge), None);
        assert_eq!(champion_of(&not_started), None);
    }

    #[test]
    fn test_previous_champion_requires_consecutive_season_numbers() {
        let mut seasons = active_with_previous(Duration::days(1));
        seasons[1].season_number = 2;

        match resolve_league_status(&seasons, now()) {
            Some(LeagueStatus::Live {
                previous_champion, ..
            }) => assert_eq!(previous_champion, None),
            other => panic!("expected live status, got {other:?}"),
        }
    }

    #[test]
    fn test_previous_champion_requires_start_date() {
        let mut seasons = active_with_previous(Duration::days(1));
        seasons[0].start_date = None;

        match resolve_league_status(&seasons, now()) {
            Some(LeagueStatus::Live {
                previous_champion, ..
            }) => assert_eq!(previous_champion, None),
            other => panic!("expected live status, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_league_carries_current_season() {
        let league = League {
            uuid: "l1".to_string(),
            name: "Woogle League".to_string(),
            ..League::default()
        };
        let seasons = active_with_previous(Duration::days(2));

        let view = resolve_league(&league, &seasons, now()).unwrap();

        assert_eq!(view.league.name, "Woogle League");
        assert_eq!(view.season_number, 5);
        assert_eq!(view.season_id, "season-5");
    }
}
