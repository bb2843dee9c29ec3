use chrono::{Duration, TimeZone, Utc};
use league_watch::AppError;
use league_watch::admin::{DirectorPanel, LeagueAdmin, MovePlayerFlow};
use league_watch::clear_http_response_cache;
use league_watch::config::Config;
use league_watch::consistency::RefetchOutcome;
use league_watch::data_fetcher::api::ReadMode;
use league_watch::data_fetcher::create_http_client_with_timeout;
use league_watch::data_fetcher::models::SeasonStatus;
use league_watch::data_fetcher::processors::DirectorTier;
use league_watch::ui::{build_directors_page, build_season_roster_page};
use serde_json::{Value, json};
use serial_test::serial;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOURNAMENTS: &str = "/api/tournament_service.TournamentService";
const LEAGUES: &str = "/api/league_service.LeagueService";

async fn mount_once(server: &MockServer, route: String, body: Value) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .up_to_n_times(1)
        .mount(server)
        .await;
}

async fn mount(server: &MockServer, route: String, body: Value) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn divisions() -> Value {
    json!({"divisions": [
        {"uuid": "d1", "divisionNumber": 1, "standings": [{"username": "alice", "result": 0}]},
        {"uuid": "d2", "divisionNumber": 2, "standings": []}
    ]})
}

async fn mount_season(server: &MockServer, status: i32) {
    mount(
        server,
        format!("{LEAGUES}/GetAllSeasons"),
        json!({"seasons": [{"uuid": "s3", "leagueId": "l1", "seasonNumber": 3, "status": status}]}),
    )
    .await;
    mount(server, format!("{LEAGUES}/GetAllDivisionStandings"), divisions()).await;
}

#[tokio::test]
#[serial]
async fn test_add_director_refetches_roster() {
    clear_http_response_cache().await;
    let server = MockServer::start().await;

    mount_once(
        &server,
        format!("{TOURNAMENTS}/GetTournamentMetadata"),
        json!({"metadata": {"id": "t1", "name": "Friday Open"}, "directors": ["alice"]}),
    )
    .await;
    mount(
        &server,
        format!("{TOURNAMENTS}/GetTournamentMetadata"),
        json!({
            "metadata": {"id": "t1", "name": "Friday Open"},
            "directors": ["alice", "bob:readonly"]
        }),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(format!("{TOURNAMENTS}/AddDirectors")))
        .and(body_json(json!({
            "id": "t1",
            "division": "",
            "persons": [{"id": "bob", "rating": -1}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::with_api_domain(server.uri());
    let client = create_http_client_with_timeout(5).unwrap();
    let mut panel = DirectorPanel::load(&client, &config, "t1").await.unwrap();
    assert_eq!(panel.roster().unwrap().directors.len(), 1);

    let outcome = panel.add(" bob ", DirectorTier::ReadOnly).await.unwrap();

    assert_eq!(outcome, RefetchOutcome::Refreshed);
    let roster = panel.roster().unwrap();
    assert_eq!(roster.directors.len(), 2);
    assert!(panel.is_full_director("alice"));
    assert!(!panel.is_full_director("bob"));

    let text = build_directors_page(roster).plain_text();
    assert!(text.contains("Read-only"));

    clear_http_response_cache().await;
}

#[tokio::test]
#[serial]
async fn test_blank_director_name_sends_nothing() {
    clear_http_response_cache().await;
    let server = MockServer::start().await;

    mount(
        &server,
        format!("{TOURNAMENTS}/GetTournamentMetadata"),
        json!({"metadata": {"id": "t1"}, "directors": []}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(format!("{TOURNAMENTS}/AddDirectors")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let config = Config::with_api_domain(server.uri());
    let client = create_http_client_with_timeout(5).unwrap();
    let mut panel = DirectorPanel::load(&client, &config, "t1").await.unwrap();

    let result = panel.add("  ", DirectorTier::Full).await;

    assert!(matches!(result, Err(AppError::EmptyDirectorName)));
    clear_http_response_cache().await;
}

#[tokio::test]
#[serial]
async fn test_move_player_in_scheduled_season() {
    clear_http_response_cache().await;
    let server = MockServer::start().await;

    mount_season(&server, 0).await;
    mount_once(
        &server,
        format!("{LEAGUES}/GetSeasonRegistrations"),
        json!({"registrations": [{"userId": "u1", "username": "alice", "divisionId": "d1"}]}),
    )
    .await;
    mount(
        &server,
        format!("{LEAGUES}/GetSeasonRegistrations"),
        json!({"registrations": [{"userId": "u1", "username": "alice", "divisionId": "d2"}]}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(format!("{LEAGUES}/MovePlayerToDivision")))
        .and(body_json(json!({
            "userId": "u1",
            "seasonId": "s3",
            "fromDivisionId": "d1",
            "toDivisionId": "d2"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "message": "moved"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::with_api_domain(server.uri());
    let client = create_http_client_with_timeout(5).unwrap();
    let mut flow = MovePlayerFlow::new(&client, &config);
    assert!(flow.select_league("csw", None).await.unwrap());

    flow.select_player("u1");
    let targets: Vec<&str> = flow
        .candidate_targets()
        .iter()
        .map(|d| d.uuid.as_str())
        .collect();
    assert_eq!(targets, vec!["d2"]);
    flow.select_target("d2");

    let outcome = flow.move_selected().await.unwrap();

    assert_eq!(outcome, RefetchOutcome::Refreshed);
    let snapshot = flow.snapshot().unwrap();
    assert_eq!(snapshot.roster.current_division("u1"), Some("d2"));
    assert_eq!(flow.selection().user_id, None);

    let text = build_season_roster_page(snapshot).plain_text();
    assert!(!text.contains("Division moves are closed"));

    clear_http_response_cache().await;
}

#[tokio::test]
#[serial]
async fn test_move_player_rejected_once_season_started() {
    clear_http_response_cache().await;
    let server = MockServer::start().await;

    mount_season(&server, 1).await;
    mount(
        &server,
        format!("{LEAGUES}/GetSeasonRegistrations"),
        json!({"registrations": [{"userId": "u1", "username": "alice", "divisionId": "d1"}]}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(format!("{LEAGUES}/MovePlayerToDivision")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&server)
        .await;

    let config = Config::with_api_domain(server.uri());
    let client = create_http_client_with_timeout(5).unwrap();
    let mut flow = MovePlayerFlow::new(&client, &config);
    flow.select_league("csw", None).await.unwrap();

    let result = flow.move_player("u1", "d2").await;

    assert!(matches!(
        result,
        Err(AppError::SeasonNotScheduled {
            status: SeasonStatus::Active,
            ..
        })
    ));
    clear_http_response_cache().await;
}

#[tokio::test]
#[serial]
async fn test_superseded_league_selection_is_dropped() {
    clear_http_response_cache().await;
    let server = MockServer::start().await;

    mount_season(&server, 0).await;
    mount(
        &server,
        format!("{LEAGUES}/GetSeasonRegistrations"),
        json!({"registrations": []}),
    )
    .await;

    let config = Config::with_api_domain(server.uri());
    let client = create_http_client_with_timeout(5).unwrap();
    let mut flow = MovePlayerFlow::new(&client, &config);

    let first = flow.begin_league_selection();
    let second = flow.begin_league_selection();

    let loaded = MovePlayerFlow::load_league(&client, &config, "first", None, ReadMode::Cached)
        .await
        .unwrap();
    assert!(!flow.apply_league(&first, loaded));
    assert!(flow.snapshot().is_none());

    let loaded = MovePlayerFlow::load_league(&client, &config, "second", None, ReadMode::Cached)
        .await
        .unwrap();
    assert!(flow.apply_league(&second, loaded));
    assert_eq!(flow.snapshot().unwrap().league_id, "second");

    clear_http_response_cache().await;
}

async fn mount_league(server: &MockServer) {
    mount(
        server,
        format!("{LEAGUES}/GetAllSeasons"),
        json!({"seasons": [
            {"uuid": "s1", "seasonNumber": 1, "status": 2},
            {"uuid": "s2", "seasonNumber": 2, "status": 0}
        ]}),
    )
    .await;
}

#[tokio::test]
#[serial]
async fn test_bootstrap_rejects_completed_status_locally() {
    clear_http_response_cache().await;
    let server = MockServer::start().await;

    mount(
        &server,
        format!("{LEAGUES}/GetLeague"),
        json!({"league": {"uuid": "l1", "slug": "csw", "name": "CSW League"}}),
    )
    .await;
    mount_league(&server).await;
    Mock::given(method("POST"))
        .and(path(format!("{LEAGUES}/BootstrapSeason")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let config = Config::with_api_domain(server.uri());
    let client = create_http_client_with_timeout(5).unwrap();
    let mut admin = LeagueAdmin::load(&client, &config, "csw").await.unwrap();

    let start = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
    let completed = admin
        .bootstrap_season(start, start + Duration::days(28), SeasonStatus::Completed)
        .await;
    assert!(matches!(
        completed,
        Err(AppError::BootstrapStatusNotAllowed { .. })
    ));

    let backwards = admin
        .bootstrap_season(start, start, SeasonStatus::Scheduled)
        .await;
    assert!(matches!(backwards, Err(AppError::InvalidSeasonDates { .. })));

    clear_http_response_cache().await;
}

#[tokio::test]
#[serial]
async fn test_open_registration_defaults_to_scheduled_season() {
    clear_http_response_cache().await;
    let server = MockServer::start().await;

    mount(
        &server,
        format!("{LEAGUES}/GetLeague"),
        json!({"league": {"uuid": "l1", "slug": "csw", "name": "CSW League"}}),
    )
    .await;
    mount_league(&server).await;
    Mock::given(method("POST"))
        .and(path(format!("{LEAGUES}/OpenRegistration")))
        .and(body_json(json!({"leagueId": "csw", "seasonId": "s2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"season": {"uuid": "s2"}})))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::with_api_domain(server.uri());
    let client = create_http_client_with_timeout(5).unwrap();
    let mut admin = LeagueAdmin::load(&client, &config, "csw").await.unwrap();

    let outcome = admin.open_registration(None).await.unwrap();

    assert_eq!(outcome, RefetchOutcome::Refreshed);
    clear_http_response_cache().await;
}

#[tokio::test]
#[serial]
async fn test_failed_refetch_keeps_previous_state() {
    clear_http_response_cache().await;
    let server = MockServer::start().await;

    mount_once(
        &server,
        format!("{LEAGUES}/GetLeague"),
        json!({"league": {"uuid": "l1", "slug": "csw", "name": "CSW League"}}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(format!("{LEAGUES}/GetLeague")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    mount_league(&server).await;
    Mock::given(method("POST"))
        .and(path(format!("{LEAGUES}/RegisterForSeason")))
        .and(body_json(json!({"leagueId": "csw", "userId": "u9", "seasonId": "s2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::with_api_domain(server.uri());
    let client = create_http_client_with_timeout(5).unwrap();
    let mut admin = LeagueAdmin::load(&client, &config, "csw").await.unwrap();

    let outcome = admin.register("u9", None).await.unwrap();

    assert_eq!(outcome, RefetchOutcome::Stale);
    assert_eq!(admin.snapshot().unwrap().league.name, "CSW League");
    clear_http_response_cache().await;
}
