//! Division membership changes for a league season.
//!
//! Players may only be moved between divisions while their season is still
//! scheduled. The gate functions enforce that locally before any request is
//! sent; [`MovePlayerFlow`] drives selection, the move itself and the re-read
//! of registrations and standings.

use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::consistency::{
    RefetchOutcome, RequestSequencer, RequestToken, ViewState, mutate_then_refetch,
};
use crate::data_fetcher::api::{
    MovePlayerRequest, ReadMode, fetch_all_seasons, fetch_division_standings,
    fetch_season_registrations, move_player_to_division,
};
use crate::data_fetcher::models::{Division, Registration, Season, SeasonStatus};
use crate::error::AppError;

/// True only while the season is scheduled. Every other status, including
/// unrecognized ones, closes the gate.
pub fn can_move_players(season: &Season) -> bool {
    season.status == SeasonStatus::Scheduled
}

/// Divisions a player could be moved to: every division but their own.
pub fn candidate_targets<'d>(
    divisions: &'d [Division],
    current_division_id: &str,
) -> Vec<&'d Division> {
    divisions
        .iter()
        .filter(|d| d.uuid != current_division_id)
        .collect()
}

/// Checks a proposed move against the season and its divisions.
pub fn check_move(
    season: &Season,
    divisions: &[Division],
    from_division_id: &str,
    to_division_id: &str,
) -> Result<(), AppError> {
    if !can_move_players(season) {
        return Err(AppError::season_not_scheduled(&season.uuid, season.status));
    }
    if from_division_id == to_division_id {
        return Err(AppError::same_division(to_division_id));
    }
    if !divisions.iter().any(|d| d.uuid == to_division_id) {
        return Err(AppError::unknown_division(to_division_id, &season.uuid));
    }
    Ok(())
}

/// Registrations and division standings of one season.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonRoster {
    pub registrations: Vec<Registration>,
    pub divisions: Vec<Division>,
}

impl SeasonRoster {
    pub fn registration(&self, user_id: &str) -> Option<&Registration> {
        self.registrations.iter().find(|r| r.user_id == user_id)
    }

    /// The division a registered player is in: the registration's own
    /// division, else the division whose standings list the player.
    pub fn current_division(&self, user_id: &str) -> Option<&str> {
        let registration = self.registration(user_id)?;
        if let Some(division_id) = registration.division_id.as_deref() {
            return Some(division_id);
        }
        self.divisions
            .iter()
            .find(|d| d.standings.iter().any(|s| s.username == registration.username))
            .map(|d| d.uuid.as_str())
    }
}

/// Seasons of a league plus the roster of the season being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueRosterSnapshot {
    pub league_id: String,
    pub seasons: Vec<Season>,
    pub season_id: String,
    pub roster: SeasonRoster,
}

impl LeagueRosterSnapshot {
    pub fn season(&self) -> Option<&Season> {
        self.seasons.iter().find(|s| s.uuid == self.season_id)
    }
}

/// Player and target division picked but not yet submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSelection {
    pub user_id: Option<String>,
    pub to_division_id: Option<String>,
}

const LEAGUE_SELECTION: &str = "league";

pub struct MovePlayerFlow<'a> {
    client: &'a Client,
    config: &'a Config,
    sequencer: RequestSequencer<&'static str>,
    snapshot: ViewState<LeagueRosterSnapshot>,
    selection: MoveSelection,
}

impl<'a> MovePlayerFlow<'a> {
    pub fn new(client: &'a Client, config: &'a Config) -> Self {
        Self {
            client,
            config,
            sequencer: RequestSequencer::new(),
            snapshot: ViewState::new(),
            selection: MoveSelection::default(),
        }
    }

    pub fn snapshot(&self) -> Option<&LeagueRosterSnapshot> {
        self.snapshot.get()
    }

    pub fn selection(&self) -> &MoveSelection {
        &self.selection
    }

    /// Starts a league selection. Any fetch started for an earlier selection
    /// is superseded and its result will be dropped by [`Self::apply_league`].
    pub fn begin_league_selection(&mut self) -> RequestToken<&'static str> {
        self.selection = MoveSelection::default();
        self.sequencer.issue(LEAGUE_SELECTION)
    }

    /// Reads a league's seasons and the roster of `season_id`, or of the
    /// newest season when none is given. Touches no local state.
    pub async fn load_league(
        client: &Client,
        config: &Config,
        league_id: &str,
        season_id: Option<&str>,
        mode: ReadMode,
    ) -> Result<LeagueRosterSnapshot, AppError> {
        let seasons = fetch_all_seasons(client, config, league_id, mode).await?;
        let season_id = match season_id {
            Some(id) => seasons
                .iter()
                .find(|s| s.uuid == id)
                .map(|s| s.uuid.clone())
                .ok_or_else(|| AppError::season_not_found(id))?,
            None => seasons
                .first()
                .map(|s| s.uuid.clone())
                .ok_or_else(|| AppError::no_seasons(league_id))?,
        };

        let roster = load_roster(client, config, &season_id, mode).await?;
        Ok(LeagueRosterSnapshot {
            league_id: league_id.to_string(),
            seasons,
            season_id,
            roster,
        })
    }

    /// Applies a loaded snapshot if `token` is still the latest selection.
    /// Returns whether it was applied.
    pub fn apply_league(
        &mut self,
        token: &RequestToken<&'static str>,
        snapshot: LeagueRosterSnapshot,
    ) -> bool {
        match self.sequencer.accept(token, snapshot) {
            Some(snapshot) => {
                self.snapshot.replace(snapshot);
                true
            }
            None => false,
        }
    }

    /// Selects a league and loads it in one step.
    pub async fn select_league(
        &mut self,
        league_id: &str,
        season_id: Option<&str>,
    ) -> Result<bool, AppError> {
        let token = self.begin_league_selection();
        let snapshot =
            Self::load_league(self.client, self.config, league_id, season_id, ReadMode::Cached)
                .await?;
        Ok(self.apply_league(&token, snapshot))
    }

    pub fn select_player(&mut self, user_id: &str) {
        self.selection.user_id = Some(user_id.to_string());
        self.selection.to_division_id = None;
    }

    pub fn select_target(&mut self, division_id: &str) {
        self.selection.to_division_id = Some(division_id.to_string());
    }

    /// Targets offered for the selected player.
    pub fn candidate_targets(&self) -> Vec<&Division> {
        let (Some(snapshot), Some(user_id)) = (self.snapshot.get(), &self.selection.user_id)
        else {
            return Vec::new();
        };
        let current = snapshot.roster.current_division(user_id).unwrap_or_default();
        candidate_targets(&snapshot.roster.divisions, current)
    }

    /// Submits the pending selection.
    pub async fn move_selected(&mut self) -> Result<RefetchOutcome, AppError> {
        let user_id = self
            .selection
            .user_id
            .clone()
            .ok_or_else(|| AppError::config_error("No player selected"))?;
        let to_division_id = self
            .selection
            .to_division_id
            .clone()
            .ok_or_else(|| AppError::config_error("No target division selected"))?;
        self.move_player(&user_id, &to_division_id).await
    }

    /// Moves `user_id` into `to_division_id` within the loaded season, then
    /// re-reads that season's registrations and standings and clears the
    /// selection.
    #[instrument(skip(self))]
    pub async fn move_player(
        &mut self,
        user_id: &str,
        to_division_id: &str,
    ) -> Result<RefetchOutcome, AppError> {
        let snapshot = self
            .snapshot
            .get()
            .ok_or_else(|| AppError::config_error("No league selected"))?;
        let season = snapshot
            .season()
            .ok_or_else(|| AppError::season_not_found(&snapshot.season_id))?;
        let from_division_id = snapshot
            .roster
            .current_division(user_id)
            .ok_or_else(|| AppError::player_not_registered(user_id, &season.uuid))?;

        check_move(season, &snapshot.roster.divisions, from_division_id, to_division_id)?;

        let request = MovePlayerRequest {
            user_id: user_id.to_string(),
            season_id: season.uuid.clone(),
            from_division_id: from_division_id.to_string(),
            to_division_id: to_division_id.to_string(),
        };
        let previous = snapshot.clone();
        let (client, config) = (self.client, self.config);

        let (response, outcome) = mutate_then_refetch(
            "move player",
            &mut self.snapshot,
            move_player_to_division(client, config, &request),
            || async move {
                let roster =
                    load_roster(client, config, &previous.season_id, ReadMode::Fresh).await?;
                Ok(LeagueRosterSnapshot { roster, ..previous })
            },
        )
        .await?;

        if !response.message.is_empty() {
            info!("{}", response.message);
        }
        self.selection = MoveSelection::default();
        Ok(outcome)
    }
}

async fn load_roster(
    client: &Client,
    config: &Config,
    season_id: &str,
    mode: ReadMode,
) -> Result<SeasonRoster, AppError> {
    let (registrations, divisions) = tokio::try_join!(
        fetch_season_registrations(client, config, season_id, mode),
        fetch_division_standings(client, config, season_id, mode),
    )?;
    debug!(
        "Season {season_id}: {} registrations in {} divisions",
        registrations.len(),
        divisions.len()
    );
    Ok(SeasonRoster {
        registrations,
        divisions,
    })
}
