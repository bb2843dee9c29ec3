use crate::cli::{Args, SettingsArgs};
use chrono::{DateTime, Utc};
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use crossterm::terminal::SetTitle;
use crossterm::{execute, queue};
use league_watch::admin::{DirectorPanel, LeagueAdmin, MovePlayerFlow};
use league_watch::config::Config;
use league_watch::config::user_prompts::prompt_for_api_domain;
use league_watch::consistency::RefetchOutcome;
use league_watch::data_fetcher::api::NewLeague;
use league_watch::data_fetcher::models::{LeagueSettings, SeasonStatus};
use league_watch::data_fetcher::processors::DirectorTier;
use league_watch::error::AppError;
use league_watch::events::build_events_view;
use league_watch::ui::colors::{error_fg, highlight_fg};
use league_watch::ui::{
    Page, build_directors_page, build_events_page, build_league_page, build_season_roster_page,
};
use reqwest::Client;
use std::io::{Write, stdout};
use tracing::info;

const WINDOW_TITLE: &str = "LEAGUE WATCH";

fn print_page(page: &Page) -> Result<(), AppError> {
    let mut out = stdout();
    execute!(out, SetTitle(WINDOW_TITLE))?;
    page.render(&mut out)?;
    out.flush()?;
    Ok(())
}

fn print_notice(message: &str, error: bool) -> Result<(), AppError> {
    let color = if error { error_fg() } else { highlight_fg() };
    let mut out = stdout();
    queue!(out, SetForegroundColor(color), Print(message), ResetColor, Print("\n"))?;
    out.flush()?;
    Ok(())
}

/// Tells the user when a saved change could not be read back.
fn report_outcome(outcome: RefetchOutcome) -> Result<(), AppError> {
    if outcome == RefetchOutcome::Stale {
        print_notice("Saved, but the refreshed view could not be loaded", true)?;
    }
    Ok(())
}

/// Prints an error in the error colour, saying whether anything reached the
/// service and whether trying again could help.
pub fn print_error(error: &AppError) -> Result<(), AppError> {
    let message = if error.is_rejected_locally() {
        format!("Not sent: {error}")
    } else if error.is_retryable() {
        format!("Error: {error} (try again later)")
    } else if error.is_not_found() {
        format!("Not found: {error}")
    } else {
        format!("Error: {error}")
    };
    print_notice(&message, true)
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(WINDOW_TITLE))?;
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// An empty `--config` value prompts for the domain.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_from_path(&Config::get_config_path())
        .await
        .unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = if new_domain.is_empty() {
            prompt_for_api_domain().await?
        } else {
            new_domain.clone()
        };
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

pub async fn handle_events_command(client: &Client, config: &Config) -> Result<(), AppError> {
    let view = build_events_view(client, config, Utc::now()).await;
    print_page(&build_events_page(&view))
}

pub async fn handle_directors_command(
    client: &Client,
    config: &Config,
    tournament_id: &str,
    add: Option<&str>,
    read_only: bool,
    remove: Option<&str>,
    check: Option<&str>,
) -> Result<(), AppError> {
    let mut panel = DirectorPanel::load(client, config, tournament_id).await?;

    if let Some(username) = add {
        let tier = if read_only {
            DirectorTier::ReadOnly
        } else {
            DirectorTier::Full
        };
        report_outcome(panel.add(username, tier).await?)?;
    }
    if let Some(display_name) = remove {
        report_outcome(panel.remove(display_name).await?)?;
    }

    if let Some(roster) = panel.roster() {
        print_page(&build_directors_page(roster))?;
    }
    if let Some(username) = check {
        let full = panel.is_full_director(username);
        print_notice(&director_check_message(username, full), false)?;
    }
    Ok(())
}

/// Read-only directors are reported as lacking full rights.
fn director_check_message(username: &str, full: bool) -> String {
    if full {
        format!("{username} has full director rights")
    } else {
        format!("{username} does not have full director rights")
    }
}

pub async fn handle_roster_command(
    client: &Client,
    config: &Config,
    league_id: &str,
    season_id: Option<&str>,
) -> Result<(), AppError> {
    let mut flow = MovePlayerFlow::new(client, config);
    flow.select_league(league_id, season_id).await?;
    if let Some(snapshot) = flow.snapshot() {
        print_page(&build_season_roster_page(snapshot))?;
    }
    Ok(())
}

pub async fn handle_move_player_command(
    client: &Client,
    config: &Config,
    league_id: &str,
    user_id: &str,
    to_division_id: &str,
    season_id: Option<&str>,
) -> Result<(), AppError> {
    let mut flow = MovePlayerFlow::new(client, config);
    flow.select_league(league_id, season_id).await?;
    flow.select_player(user_id);
    flow.select_target(to_division_id);

    let outcome = flow.move_selected().await?;
    info!("Moved {user_id} to division {to_division_id}");
    report_outcome(outcome)?;

    if let Some(snapshot) = flow.snapshot() {
        print_page(&build_season_roster_page(snapshot))?;
    }
    Ok(())
}

pub async fn handle_create_league_command(
    client: &Client,
    config: &Config,
    name: &str,
    slug: &str,
    description: &str,
    settings: &SettingsArgs,
) -> Result<(), AppError> {
    let mut league_settings = LeagueSettings::default();
    settings.apply_to(&mut league_settings);

    let new_league = NewLeague {
        name: name.to_string(),
        description: description.to_string(),
        slug: slug.to_string(),
        settings: league_settings,
    };
    let (created, admin) = LeagueAdmin::create(client, config, &new_league).await?;
    print_notice(&format!("Created league {} ({})", created.name, created.uuid), false)?;

    if let Some(snapshot) = admin.snapshot() {
        print_page(&build_league_page(snapshot))?;
    }
    Ok(())
}

pub async fn handle_bootstrap_season_command(
    client: &Client,
    config: &Config,
    league_id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: SeasonStatus,
) -> Result<(), AppError> {
    let mut admin = LeagueAdmin::load(client, config, league_id).await?;
    let (season, outcome) = admin.bootstrap_season(start, end, status).await?;
    print_notice(
        &format!("Created season {} ({})", season.season_number, season.status),
        false,
    )?;
    report_outcome(outcome)?;

    if let Some(snapshot) = admin.snapshot() {
        print_page(&build_league_page(snapshot))?;
    }
    Ok(())
}

pub async fn handle_update_league_command(
    client: &Client,
    config: &Config,
    league_id: &str,
    name: Option<&str>,
    description: Option<&str>,
    settings: &SettingsArgs,
) -> Result<(), AppError> {
    if name.is_none() && description.is_none() && settings.is_empty() {
        return Err(AppError::config_error(
            "Nothing to update: give --name, --description or a league setting",
        ));
    }

    let mut admin = LeagueAdmin::load(client, config, league_id).await?;
    let current = admin
        .snapshot()
        .map(|s| s.league.clone())
        .unwrap_or_default();

    if name.is_some() || description.is_some() {
        let outcome = admin
            .update_metadata(
                name.unwrap_or(&current.name),
                description.unwrap_or(&current.description),
            )
            .await?;
        report_outcome(outcome)?;
    }

    if !settings.is_empty() {
        let mut updated = current.settings.clone();
        settings.apply_to(&mut updated);
        report_outcome(admin.update_settings(&updated).await?)?;
    }

    if let Some(snapshot) = admin.snapshot() {
        print_page(&build_league_page(snapshot))?;
    }
    Ok(())
}

/// Which season registration change to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationAction<'a> {
    Open,
    Register(&'a str),
    Unregister(&'a str),
}

pub async fn handle_registration_command(
    client: &Client,
    config: &Config,
    league_id: &str,
    season_id: Option<&str>,
    action: RegistrationAction<'_>,
) -> Result<(), AppError> {
    let mut admin = LeagueAdmin::load(client, config, league_id).await?;

    let outcome = match action {
        RegistrationAction::Open => admin.open_registration(season_id).await?,
        RegistrationAction::Register(user_id) => admin.register(user_id, season_id).await?,
        RegistrationAction::Unregister(user_id) => admin.unregister(user_id, season_id).await?,
    };
    report_outcome(outcome)?;

    if let Some(snapshot) = admin.snapshot() {
        print_page(&build_league_page(snapshot))?;
    }
    Ok(())
}
