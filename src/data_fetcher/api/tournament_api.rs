//! Tournament service calls: listings, metadata and the director roster.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::fetch_utils::{fetch, fetch_fresh, mutate};
use super::urls::build_tournament_url;
use crate::config::Config;
use crate::constants::cache_ttl::TOURNAMENT_SECONDS;
use crate::data_fetcher::models::{
    TournamentInstance, TournamentListResponse, TournamentMetadataResponse, TournamentPerson,
    TournamentPersons,
};
use crate::data_fetcher::processors::DirectorTier;
use crate::error::AppError;

#[derive(Serialize)]
struct EmptyRequest {}

#[derive(Serialize)]
struct PastTournamentsRequest {
    limit: u32,
}

#[derive(Serialize)]
struct TournamentIdRequest<'a> {
    id: &'a str,
}

/// Mutation responses carry nothing the client needs.
#[derive(Deserialize, Default)]
struct EmptyResponse {}

/// Fetches the recent and upcoming tournaments, in server order.
#[instrument(skip(client, config))]
pub async fn fetch_recent_and_upcoming_tournaments(
    client: &Client,
    config: &Config,
) -> Result<Vec<TournamentInstance>, AppError> {
    let url = build_tournament_url(&config.api_domain, "GetRecentAndUpcomingTournaments");
    let response: TournamentListResponse =
        fetch(client, &url, &EmptyRequest {}, TOURNAMENT_SECONDS).await?;
    debug!("Received {} recent/upcoming tournaments", response.tournaments.len());
    Ok(response.tournaments)
}

/// Fetches up to `limit` finished tournaments, most recent first.
#[instrument(skip(client, config))]
pub async fn fetch_past_tournaments(
    client: &Client,
    config: &Config,
    limit: u32,
) -> Result<Vec<TournamentInstance>, AppError> {
    let url = build_tournament_url(&config.api_domain, "GetPastTournaments");
    let response: TournamentListResponse =
        fetch(client, &url, &PastTournamentsRequest { limit }, TOURNAMENT_SECONDS).await?;
    Ok(response.tournaments)
}

/// Fetches tournament metadata and its raw director roster.
///
/// With `fresh` set the response cache is skipped; used right after a roster
/// change so the caller sees the server's post-write state.
#[instrument(skip(client, config))]
pub async fn fetch_tournament_metadata(
    client: &Client,
    config: &Config,
    tournament_id: &str,
    fresh: bool,
) -> Result<TournamentMetadataResponse, AppError> {
    let url = build_tournament_url(&config.api_domain, "GetTournamentMetadata");
    let request = TournamentIdRequest { id: tournament_id };
    let response: TournamentMetadataResponse = if fresh {
        fetch_fresh(client, &url, &request, TOURNAMENT_SECONDS).await?
    } else {
        fetch(client, &url, &request, TOURNAMENT_SECONDS).await?
    };

    if response.metadata.is_none() {
        return Err(AppError::api_no_data(
            format!("No metadata for tournament {tournament_id}"),
            url,
        ));
    }
    Ok(response)
}

/// Adds one director. The server stores the tier by suffixing the roster
/// entry; the client only sends the bare username and the tier's rating.
#[instrument(skip(client, config))]
pub async fn add_director(
    client: &Client,
    config: &Config,
    tournament_id: &str,
    username: &str,
    tier: DirectorTier,
) -> Result<(), AppError> {
    let url = build_tournament_url(&config.api_domain, "AddDirectors");
    let request = director_request(tournament_id, username, tier.wire_rating());
    let _: EmptyResponse = mutate(client, &url, &request).await?;
    info!("Added {username} as {tier:?} director of {tournament_id}");
    Ok(())
}

/// Removes one director by display name. The rating is ignored on removal.
#[instrument(skip(client, config))]
pub async fn remove_director(
    client: &Client,
    config: &Config,
    tournament_id: &str,
    username: &str,
) -> Result<(), AppError> {
    let url = build_tournament_url(&config.api_domain, "RemoveDirectors");
    let request = director_request(tournament_id, username, 0);
    let _: EmptyResponse = mutate(client, &url, &request).await?;
    info!("Removed {username} as director of {tournament_id}");
    Ok(())
}

fn director_request(tournament_id: &str, username: &str, rating: i32) -> TournamentPersons {
    TournamentPersons {
        id: tournament_id.to_string(),
        division: String::new(),
        persons: vec![TournamentPerson {
            id: username.to_string(),
            rating,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::cache::clear_http_response_cache;
    use serde_json::json;
    use serial_test::serial;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SERVICE_PATH: &str = "/api/tournament_service.TournamentService";

    #[tokio::test]
    #[serial]
    async fn test_fetch_past_tournaments_sends_limit() {
        clear_http_response_cache().await;
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("{SERVICE_PATH}/GetPastTournaments")))
            .and(body_json(json!({"limit": 50})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tournaments": [{"id": "t1", "name": "Old Cup"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config::with_api_domain(mock_server.uri());
        let tournaments = fetch_past_tournaments(&create_test_http_client(), &config, 50)
            .await
            .unwrap();

        assert_eq!(tournaments.len(), 1);
        assert_eq!(tournaments[0].name, "Old Cup");
        clear_http_response_cache().await;
    }

    #[tokio::test]
    #[serial]
    async fn test_add_readonly_director_sends_negative_rating() {
        clear_http_response_cache().await;
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("{SERVICE_PATH}/AddDirectors")))
            .and(body_json(json!({
                "id": "t1",
                "division": "",
                "persons": [{"id": "bob", "rating": -1}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config::with_api_domain(mock_server.uri());
        add_director(
            &create_test_http_client(),
            &config,
            "t1",
            "bob",
            DirectorTier::ReadOnly,
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_remove_director_sends_zero_rating() {
        clear_http_response_cache().await;
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("{SERVICE_PATH}/RemoveDirectors")))
            .and(body_json(json!({
                "id": "t1",
                "division": "",
                "persons": [{"id": "bob", "rating": 0}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config::with_api_domain(mock_server.uri());
        remove_director(&create_test_http_client(), &config, "t1", "bob")
            .await
            .unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_metadata_without_body_is_no_data() {
        clear_http_response_cache().await;
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("{SERVICE_PATH}/GetTournamentMetadata")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"directors": []})))
            .mount(&mock_server)
            .await;

        let config = Config::with_api_domain(mock_server.uri());
        let result =
            fetch_tournament_metadata(&create_test_http_client(), &config, "t1", false).await;

        assert!(matches!(result, Err(AppError::ApiNoData { .. })));
        clear_http_response_cache().await;
    }
}
