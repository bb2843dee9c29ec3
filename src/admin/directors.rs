//! Tournament director roster management.

use reqwest::Client;
use tracing::{info, instrument};

use crate::config::Config;
use crate::consistency::{RefetchOutcome, ViewState, mutate_then_refetch};
use crate::data_fetcher::api::{add_director, fetch_tournament_metadata, remove_director};
use crate::data_fetcher::models::{TournamentInstance, TournamentMetadataResponse};
use crate::data_fetcher::processors::{
    DirectorRecord, DirectorTier, decode_roster, is_full_director,
};
use crate::error::AppError;

/// A tournament and its decoded director roster, as last read from the server.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorRoster {
    pub tournament: TournamentInstance,
    pub directors: Vec<DirectorRecord>,
    raw: Vec<String>,
}

impl DirectorRoster {
    fn from_response(response: TournamentMetadataResponse) -> Self {
        Self {
            tournament: response.metadata.unwrap_or_default(),
            directors: decode_roster(&response.directors),
            raw: response.directors,
        }
    }

    /// Full rights need the bare username in the stored roster.
    pub fn is_full_director(&self, username: &str) -> bool {
        is_full_director(&self.raw, username)
    }
}

pub struct DirectorPanel<'a> {
    client: &'a Client,
    config: &'a Config,
    tournament_id: String,
    state: ViewState<DirectorRoster>,
}

impl<'a> DirectorPanel<'a> {
    /// Loads the roster for `tournament_id`.
    pub async fn load(
        client: &'a Client,
        config: &'a Config,
        tournament_id: &str,
    ) -> Result<Self, AppError> {
        let response = fetch_tournament_metadata(client, config, tournament_id, false).await?;
        Ok(Self {
            client,
            config,
            tournament_id: tournament_id.to_string(),
            state: ViewState::loaded(DirectorRoster::from_response(response)),
        })
    }

    pub fn roster(&self) -> Option<&DirectorRoster> {
        self.state.get()
    }

    pub fn is_full_director(&self, username: &str) -> bool {
        self.roster()
            .is_some_and(|roster| roster.is_full_director(username))
    }

    /// Adds a director and re-reads the roster.
    #[instrument(skip(self))]
    pub async fn add(
        &mut self,
        username: &str,
        tier: DirectorTier,
    ) -> Result<RefetchOutcome, AppError> {
        let username = validated_username(username)?;
        let (client, config, id) = (self.client, self.config, self.tournament_id.as_str());

        let ((), outcome) = mutate_then_refetch(
            "add director",
            &mut self.state,
            add_director(client, config, id, username, tier),
            || refetch_roster(client, config, id),
        )
        .await?;

        info!("{username} is now a {tier:?} director");
        Ok(outcome)
    }

    /// Removes a director by display name and re-reads the roster.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, display_name: &str) -> Result<RefetchOutcome, AppError> {
        let username = validated_username(display_name)?;
        let (client, config, id) = (self.client, self.config, self.tournament_id.as_str());

        let ((), outcome) = mutate_then_refetch(
            "remove director",
            &mut self.state,
            remove_director(client, config, id, username),
            || refetch_roster(client, config, id),
        )
        .await?;

        Ok(outcome)
    }
}

fn validated_username(username: &str) -> Result<&str, AppError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyDirectorName);
    }
    Ok(trimmed)
}

async fn refetch_roster(
    client: &Client,
    config: &Config,
    tournament_id: &str,
) -> Result<DirectorRoster, AppError> {
    fetch_tournament_metadata(client, config, tournament_id, true)
        .await
        .map(DirectorRoster::from_response)
}
