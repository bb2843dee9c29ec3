//! Combined events view: tournaments by time window plus one status line per
//! active league.
//!
//! Every read here degrades instead of failing. A tournament list that cannot
//! be fetched shows as empty; a league whose seasons cannot be fetched is left
//! out.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::constants::RECENT_SEASONS_FOR_STATUS;
use crate::data_fetcher::api::{
    fetch_all_leagues, fetch_past_tournaments, fetch_recent_and_upcoming_tournaments,
    fetch_recent_seasons,
};
use crate::data_fetcher::models::{League, TournamentInstance};
use crate::data_fetcher::processors::{
    LeagueStatusView, ScheduleLine, TimeWindow, classify, resolve_league, schedule_line,
};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct TournamentEntry {
    pub tournament: TournamentInstance,
    pub window: TimeWindow,
    pub schedule: Option<ScheduleLine>,
}

impl TournamentEntry {
    pub fn new(tournament: TournamentInstance, now: DateTime<Utc>) -> Self {
        let start = tournament.scheduled_start;
        let end = tournament.scheduled_end;
        let window = classify(now, start, end);
        Self {
            schedule: schedule_line(window, start, end, now),
            window,
            tournament,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventsView {
    pub generated_at: DateTime<Utc>,
    pub upcoming: Vec<TournamentEntry>,
    pub past: Vec<TournamentEntry>,
    pub leagues: Vec<LeagueStatusView>,
}

/// Drops tournaments whose scheduled end has passed. Tournaments without an
/// end are kept.
pub fn filter_not_ended(
    tournaments: Vec<TournamentInstance>,
    now: DateTime<Utc>,
) -> Vec<TournamentInstance> {
    tournaments
        .into_iter()
        .filter(|t| t.scheduled_end.is_none_or(|end| end > now))
        .collect()
}

/// Builds the whole view. Never fails; see the module docs.
#[instrument(skip(client, config))]
pub async fn build_events_view(
    client: &Client,
    config: &Config,
    now: DateTime<Utc>,
) -> EventsView {
    let (upcoming, past, leagues) = tokio::join!(
        fetch_recent_and_upcoming_tournaments(client, config),
        fetch_past_tournaments(client, config, config.past_tournaments_limit),
        resolve_active_leagues(client, config, now),
    );

    let upcoming = or_empty("recent and upcoming tournaments", upcoming);
    let past = or_empty("past tournaments", past);

    let view = EventsView {
        generated_at: now,
        upcoming: filter_not_ended(upcoming, now)
            .into_iter()
            .map(|t| TournamentEntry::new(t, now))
            .collect(),
        past: past
            .into_iter()
            .map(|t| TournamentEntry::new(t, now))
            .collect(),
        leagues,
    };

    info!(
        "Events view: {} upcoming, {} past, {} leagues",
        view.upcoming.len(),
        view.past.len(),
        view.leagues.len()
    );
    view
}

fn or_empty<T>(what: &str, result: Result<Vec<T>, AppError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!("Failed to fetch {what}: {e}");
        Vec::new()
    })
}

/// Resolves a status for every active league. Seasons are fetched for all
/// leagues concurrently; a league whose fetch fails, or that has nothing to
/// show, is omitted. Output keeps the server's league order.
pub async fn resolve_active_leagues(
    client: &Client,
    config: &Config,
    now: DateTime<Utc>,
) -> Vec<LeagueStatusView> {
    let leagues = match fetch_all_leagues(client, config, true).await {
        Ok(leagues) => leagues,
        Err(e) => {
            warn!("Failed to fetch leagues: {e}");
            return Vec::new();
        }
    };

    let lookups = leagues
        .iter()
        .map(|league| resolve_one(client, config, league, now));

    join_all(lookups).await.into_iter().flatten().collect()
}

async fn resolve_one(
    client: &Client,
    config: &Config,
    league: &League,
    now: DateTime<Utc>,
) -> Option<LeagueStatusView> {
    let seasons =
        match fetch_recent_seasons(client, config, &league.uuid, RECENT_SEASONS_FOR_STATUS).await {
            Ok(seasons) => seasons,
            Err(e) => {
                warn!("Failed to fetch seasons for league {}: {e}", league.name);
                return None;
            }
        };

    let view = resolve_league(league, &seasons, now);
    if view.is_none() {
        debug!("League {} has no displayable status", league.name);
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap()
    }

    fn tournament(id: &str, end: Option<DateTime<Utc>>) -> TournamentInstance {
        TournamentInstance {
            id: id.to_string(),
            scheduled_end: end,
            ..TournamentInstance::default()
        }
    }

    #[test]
    fn test_filter_not_ended() {
        let kept = filter_not_ended(
            vec![
                tournament("ended", Some(now() - Duration::minutes(1))),
                tournament("running", Some(now() + Duration::hours(2))),
                tournament("open-ended", None),
            ],
            now(),
        );

        let ids: Vec<&str> = kept.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["running", "open-ended"]);
    }

    #[test]
    fn test_entry_classifies_and_labels() {
        let mut t = tournament("t", Some(now() + Duration::hours(3)));
        t.scheduled_start = Some(now() + Duration::hours(1));

        let entry = TournamentEntry::new(t, now());

        assert_eq!(entry.window, TimeWindow::Upcoming);
        let line = entry.schedule.unwrap();
        assert_eq!(line.label, "Starts");
        assert_eq!(line.relative, "in 1 hour");
    }
}
