//! League administration: creation, first-season bootstrap, settings and
//! registration changes. Every change is followed by a fresh read of the
//! league and its seasons.

use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::consistency::{RefetchOutcome, ViewState, mutate_then_refetch};
use crate::data_fetcher::api::{
    NewLeague, ReadMode, bootstrap_season, create_league, fetch_all_seasons, fetch_league,
    open_registration, register_for_season, unregister_from_season, update_league_metadata,
    update_league_settings,
};
use crate::data_fetcher::models::{League, LeagueSettings, Season, SeasonStatus};
use crate::error::AppError;

/// Statuses a first season may be created with.
pub fn bootstrap_status_allowed(status: SeasonStatus) -> bool {
    matches!(
        status,
        SeasonStatus::Scheduled | SeasonStatus::RegistrationOpen | SeasonStatus::Active
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeagueSnapshot {
    pub league: League,
    /// Newest first.
    pub seasons: Vec<Season>,
}

impl LeagueSnapshot {
    pub fn current_season(&self) -> Option<&Season> {
        self.seasons.first()
    }

    /// The newest season still waiting to open registration.
    pub fn scheduled_season(&self) -> Option<&Season> {
        self.seasons
            .iter()
            .find(|s| s.status == SeasonStatus::Scheduled)
    }
}

pub struct LeagueAdmin<'a> {
    client: &'a Client,
    config: &'a Config,
    league_id: String,
    state: ViewState<LeagueSnapshot>,
}

impl<'a> LeagueAdmin<'a> {
    /// Loads a league by UUID or slug.
    pub async fn load(
        client: &'a Client,
        config: &'a Config,
        league_id: &str,
    ) -> Result<Self, AppError> {
        let snapshot = load_snapshot(client, config, league_id, ReadMode::Cached).await?;
        Ok(Self {
            client,
            config,
            league_id: league_id.to_string(),
            state: ViewState::loaded(snapshot),
        })
    }

    /// Creates a league and returns an admin handle holding its fresh state.
    #[instrument(skip(client, config, new_league), fields(slug = %new_league.slug))]
    pub async fn create(
        client: &'a Client,
        config: &'a Config,
        new_league: &NewLeague,
    ) -> Result<(League, Self), AppError> {
        let created = create_league(client, config, new_league).await?;
        let mut admin = Self {
            client,
            config,
            league_id: created.uuid.clone(),
            state: ViewState::new(),
        };
        admin.refresh().await;
        Ok((created, admin))
    }

    pub fn snapshot(&self) -> Option<&LeagueSnapshot> {
        self.state.get()
    }

    /// Re-reads the league without mutating anything. Failures are logged.
    pub async fn refresh(&mut self) -> RefetchOutcome {
        match load_snapshot(self.client, self.config, &self.league_id, ReadMode::Fresh).await {
            Ok(snapshot) => {
                self.state.replace(snapshot);
                RefetchOutcome::Refreshed
            }
            Err(e) => {
                warn!("Failed to refresh league {}: {e}", self.league_id);
                RefetchOutcome::Stale
            }
        }
    }

    /// Creates the league's first season.
    #[instrument(skip(self))]
    pub async fn bootstrap_season(
        &mut self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        status: SeasonStatus,
    ) -> Result<(Season, RefetchOutcome), AppError> {
        if !bootstrap_status_allowed(status) {
            return Err(AppError::bootstrap_status_not_allowed(status));
        }
        if end_date <= start_date {
            return Err(AppError::invalid_season_dates(
                start_date.to_rfc3339(),
                end_date.to_rfc3339(),
            ));
        }

        let (client, config, id) = (self.client, self.config, self.league_id.as_str());
        let (season, outcome) = mutate_then_refetch(
            "bootstrap season",
            &mut self.state,
            bootstrap_season(client, config, id, start_date, end_date, status),
            || load_snapshot(client, config, id, ReadMode::Fresh),
        )
        .await?;

        info!(
            "Bootstrapped season {} of {} with status {}",
            season.season_number, id, season.status
        );
        Ok((season, outcome))
    }

    #[instrument(skip(self, settings))]
    pub async fn update_settings(
        &mut self,
        settings: &LeagueSettings,
    ) -> Result<RefetchOutcome, AppError> {
        let (client, config) = (self.client, self.config);
        let id = self.resolved_league_id();
        let ((), outcome) = mutate_then_refetch(
            "update league settings",
            &mut self.state,
            update_league_settings(client, config, &id, settings),
            || load_snapshot(client, config, &id, ReadMode::Fresh),
        )
        .await?;
        Ok(outcome)
    }

    #[instrument(skip(self))]
    pub async fn update_metadata(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<RefetchOutcome, AppError> {
        let (client, config) = (self.client, self.config);
        let id = self.resolved_league_id();
        let ((), outcome) = mutate_then_refetch(
            "update league metadata",
            &mut self.state,
            update_league_metadata(client, config, &id, name, description),
            || load_snapshot(client, config, &id, ReadMode::Fresh),
        )
        .await?;
        Ok(outcome)
    }

    /// Opens registration for `season_id`, or for the newest scheduled season.
    #[instrument(skip(self))]
    pub async fn open_registration(
        &mut self,
        season_id: Option<&str>,
    ) -> Result<RefetchOutcome, AppError> {
        let season_id = self.season_or(season_id, LeagueSnapshot::scheduled_season)?;
        let (client, config, id) = (self.client, self.config, self.league_id.as_str());
        let ((), outcome) = mutate_then_refetch(
            "open registration",
            &mut self.state,
            open_registration(client, config, id, &season_id),
            || load_snapshot(client, config, id, ReadMode::Fresh),
        )
        .await?;
        Ok(outcome)
    }

    /// Registers `user_id` for `season_id`, or for the current season.
    #[instrument(skip(self))]
    pub async fn register(
        &mut self,
        user_id: &str,
        season_id: Option<&str>,
    ) -> Result<RefetchOutcome, AppError> {
        let season_id = self.season_or(season_id, LeagueSnapshot::current_season)?;
        let (client, config, id) = (self.client, self.config, self.league_id.as_str());
        let ((), outcome) = mutate_then_refetch(
            "register for season",
            &mut self.state,
            register_for_season(client, config, id, &season_id, user_id),
            || load_snapshot(client, config, id, ReadMode::Fresh),
        )
        .await?;
        Ok(outcome)
    }

    #[instrument(skip(self))]
    pub async fn unregister(
        &mut self,
        user_id: &str,
        season_id: Option<&str>,
    ) -> Result<RefetchOutcome, AppError> {
        let season_id = self.season_or(season_id, LeagueSnapshot::current_season)?;
        let (client, config, id) = (self.client, self.config, self.league_id.as_str());
        let ((), outcome) = mutate_then_refetch(
            "unregister from season",
            &mut self.state,
            unregister_from_season(client, config, &season_id, user_id),
            || load_snapshot(client, config, id, ReadMode::Fresh),
        )
        .await?;
        Ok(outcome)
    }

    /// Settings and metadata updates need the league UUID, not a slug.
    fn resolved_league_id(&self) -> String {
        self.snapshot()
            .map(|s| s.league.uuid.clone())
            .filter(|uuid| !uuid.is_empty())
            .unwrap_or_else(|| self.league_id.clone())
    }

    fn season_or(
        &self,
        season_id: Option<&str>,
        fallback: fn(&LeagueSnapshot) -> Option<&Season>,
    ) -> Result<String, AppError> {
        if let Some(id) = season_id {
            return Ok(id.to_string());
        }
        self.snapshot()
            .and_then(fallback)
            .map(|s| s.uuid.clone())
            .ok_or_else(|| AppError::no_seasons(&self.league_id))
    }
}

async fn load_snapshot(
    client: &Client,
    config: &Config,
    league_id: &str,
    mode: ReadMode,
) -> Result<LeagueSnapshot, AppError> {
    let (league, seasons) = tokio::try_join!(
        fetch_league(client, config, league_id, mode),
        fetch_all_seasons(client, config, league_id, mode),
    )?;
    Ok(LeagueSnapshot { league, seasons })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_statuses() {
        assert!(bootstrap_status_allowed(SeasonStatus::Scheduled));
        assert!(bootstrap_status_allowed(SeasonStatus::RegistrationOpen));
        assert!(bootstrap_status_allowed(SeasonStatus::Active));
        assert!(!bootstrap_status_allowed(SeasonStatus::Completed));
        assert!(!bootstrap_status_allowed(SeasonStatus::Unrecognized(3)));
    }

    #[test]
    fn test_snapshot_season_lookups() {
        let snapshot = LeagueSnapshot {
            league: League::default(),
            seasons: vec![
                Season {
                    uuid: "s3".to_string(),
                    season_number: 3,
                    status: SeasonStatus::Scheduled,
                    ..Season::default()
                },
                Season {
                    uuid: "s2".to_string(),
                    season_number: 2,
                    status: SeasonStatus::Active,
                    ..Season::default()
                },
            ],
        };

        assert_eq!(snapshot.current_season().map(|s| s.uuid.as_str()), Some("s3"));
        assert_eq!(snapshot.scheduled_season().map(|s| s.uuid.as_str()), Some("s3"));
    }
}
