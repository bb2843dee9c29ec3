//! League service calls: leagues, seasons, registrations, standings and the
//! admin mutations.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::fetch_utils::{fetch, fetch_fresh, mutate};
use super::urls::build_league_url;
use crate::config::Config;
use crate::constants::cache_ttl::LEAGUE_SECONDS;
use crate::data_fetcher::models::{
    Division, DivisionStandingsResponse, League, LeagueResponse, LeagueSettings, LeaguesResponse,
    Registration, RegistrationsResponse, Season, SeasonResponse, SeasonStatus, SeasonsResponse,
};
use crate::error::AppError;

/// How a read should treat the response cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    Cached,
    Fresh,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AllLeaguesRequest {
    active_only: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeagueIdRequest<'a> {
    league_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecentSeasonsRequest<'a> {
    league_id: &'a str,
    limit: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeasonIdRequest<'a> {
    season_id: &'a str,
}

/// Moves a registered player between divisions of one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovePlayerRequest {
    pub user_id: String,
    pub season_id: String,
    pub from_division_id: String,
    pub to_division_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovePlayerResponse {
    pub success: bool,
    pub message: String,
}

/// Parameters for a new league.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeague {
    pub name: String,
    pub description: String,
    pub slug: String,
    pub settings: LeagueSettings,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BootstrapSeasonRequest<'a> {
    league_id: &'a str,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    status: SeasonStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateSettingsRequest<'a> {
    league_id: &'a str,
    settings: &'a LeagueSettings,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateMetadataRequest<'a> {
    league_id: &'a str,
    name: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeasonActionRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    league_id: Option<&'a str>,
    season_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
}

#[derive(Deserialize, Default)]
struct EmptyResponse {}

async fn read<B, T>(client: &Client, url: &str, body: &B, mode: ReadMode) -> Result<T, AppError>
where
    B: Serialize,
    T: serde::de::DeserializeOwned,
{
    match mode {
        ReadMode::Cached => fetch(client, url, body, LEAGUE_SECONDS).await,
        ReadMode::Fresh => fetch_fresh(client, url, body, LEAGUE_SECONDS).await,
    }
}

/// Orders seasons newest first. The server makes no ordering promise.
pub fn sort_newest_first(seasons: &mut [Season]) {
    seasons.sort_by(|a, b| b.season_number.cmp(&a.season_number));
}

#[instrument(skip(client, config))]
pub async fn fetch_all_leagues(
    client: &Client,
    config: &Config,
    active_only: bool,
) -> Result<Vec<League>, AppError> {
    let url = build_league_url(&config.api_domain, "GetAllLeagues");
    let response: LeaguesResponse = fetch(
        client,
        &url,
        &AllLeaguesRequest { active_only },
        LEAGUE_SECONDS,
    )
    .await?;
    debug!("Received {} leagues", response.leagues.len());
    Ok(response.leagues)
}

/// Looks a league up by UUID or slug.
#[instrument(skip(client, config))]
pub async fn fetch_league(
    client: &Client,
    config: &Config,
    league_id: &str,
    mode: ReadMode,
) -> Result<League, AppError> {
    let url = build_league_url(&config.api_domain, "GetLeague");
    let response: LeagueResponse = read(client, &url, &LeagueIdRequest { league_id }, mode).await?;
    response
        .league
        .ok_or_else(|| AppError::api_no_data(format!("No league {league_id}"), url))
}

/// Every season of a league, newest first.
#[instrument(skip(client, config))]
pub async fn fetch_all_seasons(
    client: &Client,
    config: &Config,
    league_id: &str,
    mode: ReadMode,
) -> Result<Vec<Season>, AppError> {
    let url = build_league_url(&config.api_domain, "GetAllSeasons");
    let response: SeasonsResponse = read(client, &url, &LeagueIdRequest { league_id }, mode).await?;
    let mut seasons = response.seasons;
    sort_newest_first(&mut seasons);
    Ok(seasons)
}

/// The `limit` most recent seasons of a league, newest first.
#[instrument(skip(client, config))]
pub async fn fetch_recent_seasons(
    client: &Client,
    config: &Config,
    league_id: &str,
    limit: u32,
) -> Result<Vec<Season>, AppError> {
    let url = build_league_url(&config.api_domain, "GetRecentSeasons");
    let response: SeasonsResponse = fetch(
        client,
        &url,
        &RecentSeasonsRequest { league_id, limit },
        LEAGUE_SECONDS,
    )
    .await?;
    let mut seasons = response.seasons;
    sort_newest_first(&mut seasons);
    Ok(seasons)
}

#[instrument(skip(client, config))]
pub async fn fetch_season_registrations(
    client: &Client,
    config: &Config,
    season_id: &str,
    mode: ReadMode,
) -> Result<Vec<Registration>, AppError> {
    let url = build_league_url(&config.api_domain, "GetSeasonRegistrations");
    let response: RegistrationsResponse =
        read(client, &url, &SeasonIdRequest { season_id }, mode).await?;
    Ok(response.registrations)
}

#[instrument(skip(client, config))]
pub async fn fetch_division_standings(
    client: &Client,
    config: &Config,
    season_id: &str,
    mode: ReadMode,
) -> Result<Vec<Division>, AppError> {
    let url = build_league_url(&config.api_domain, "GetAllDivisionStandings");
    let response: DivisionStandingsResponse =
        read(client, &url, &SeasonIdRequest { season_id }, mode).await?;
    Ok(response.divisions)
}

#[instrument(skip(client, config))]
pub async fn move_player_to_division(
    client: &Client,
    config: &Config,
    request: &MovePlayerRequest,
) -> Result<MovePlayerResponse, AppError> {
    let url = build_league_url(&config.api_domain, "MovePlayerToDivision");
    let response: MovePlayerResponse = mutate(client, &url, request).await?;
    info!(
        "Moved {} from {} to {} in season {}",
        request.user_id, request.from_division_id, request.to_division_id, request.season_id
    );
    Ok(response)
}

#[instrument(skip(client, config))]
pub async fn create_league(
    client: &Client,
    config: &Config,
    league: &NewLeague,
) -> Result<League, AppError> {
    let url = build_league_url(&config.api_domain, "CreateLeague");
    let response: LeagueResponse = mutate(client, &url, league).await?;
    let created = response
        .league
        .ok_or_else(|| AppError::api_no_data("CreateLeague returned no league", &url))?;
    info!("Created league {} ({})", created.name, created.slug);
    Ok(created)
}

#[instrument(skip(client, config))]
pub async fn bootstrap_season(
    client: &Client,
    config: &Config,
    league_id: &str,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    status: SeasonStatus,
) -> Result<Season, AppError> {
    let url = build_league_url(&config.api_domain, "BootstrapSeason");
    let request = BootstrapSeasonRequest {
        league_id,
        start_date,
        end_date,
        status,
    };
    let response: SeasonResponse = mutate(client, &url, &request).await?;
    response
        .season
        .ok_or_else(|| AppError::api_no_data("BootstrapSeason returned no season", url))
}

#[instrument(skip(client, config, settings))]
pub async fn update_league_settings(
    client: &Client,
    config: &Config,
    league_id: &str,
    settings: &LeagueSettings,
) -> Result<(), AppError> {
    let url = build_league_url(&config.api_domain, "UpdateLeagueSettings");
    let _: EmptyResponse = mutate(
        client,
        &url,
        &UpdateSettingsRequest {
            league_id,
            settings,
        },
    )
    .await?;
    Ok(())
}

#[instrument(skip(client, config))]
pub async fn update_league_metadata(
    client: &Client,
    config: &Config,
    league_id: &str,
    name: &str,
    description: &str,
) -> Result<(), AppError> {
    let url = build_league_url(&config.api_domain, "UpdateLeagueMetadata");
    let _: EmptyResponse = mutate(
        client,
        &url,
        &UpdateMetadataRequest {
            league_id,
            name,
            description,
        },
    )
    .await?;
    Ok(())
}

#[instrument(skip(client, config))]
pub async fn open_registration(
    client: &Client,
    config: &Config,
    league_id: &str,
    season_id: &str,
) -> Result<(), AppError> {
    let url = build_league_url(&config.api_domain, "OpenRegistration");
    let request = SeasonActionRequest {
        league_id: Some(league_id),
        season_id,
        user_id: None,
    };
    let _: EmptyResponse = mutate(client, &url, &request).await?;
    info!("Opened registration for season {season_id}");
    Ok(())
}

#[instrument(skip(client, config))]
pub async fn register_for_season(
    client: &Client,
    config: &Config,
    league_id: &str,
    season_id: &str,
    user_id: &str,
) -> Result<(), AppError> {
    let url = build_league_url(&config.api_domain, "RegisterForSeason");
    let request = SeasonActionRequest {
        league_id: Some(league_id),
        season_id,
        user_id: Some(user_id),
    };
    let _: EmptyResponse = mutate(client, &url, &request).await?;
    Ok(())
}

#[instrument(skip(client, config))]
pub async fn unregister_from_season(
    client: &Client,
    config: &Config,
    season_id: &str,
    user_id: &str,
) -> Result<(), AppError> {
    let url = build_league_url(&config.api_domain, "UnregisterFromSeason");
    let request = SeasonActionRequest {
        league_id: None,
        season_id,
        user_id: Some(user_id),
    };
    let _: EmptyResponse = mutate(client, &url, &request).await?;
    Ok(())
}
