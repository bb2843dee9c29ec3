use crate::cli::{Args, Command};
use crate::commands::{
    RegistrationAction, handle_bootstrap_season_command, handle_create_league_command,
    handle_directors_command, handle_events_command, handle_move_player_command,
    handle_registration_command, handle_roster_command, handle_update_league_command,
};
use league_watch::config::Config;
use league_watch::data_fetcher::create_http_client_with_timeout;
use league_watch::error::AppError;

/// Runs the selected subcommand. No subcommand shows the events view.
pub async fn run(args: &Args) -> Result<(), AppError> {
    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let command = args.command.clone().unwrap_or(Command::Events);

    match command {
        Command::Events => handle_events_command(&client, &config).await,
        Command::Directors {
            tournament_id,
            add,
            read_only,
            remove,
            check,
        } => {
            handle_directors_command(
                &client,
                &config,
                &tournament_id,
                add.as_deref(),
                read_only,
                remove.as_deref(),
                check.as_deref(),
            )
            .await
        }
        Command::Roster { league, season } => {
            handle_roster_command(&client, &config, &league, season.as_deref()).await
        }
        Command::MovePlayer {
            league,
            user,
            to,
            season,
        } => {
            handle_move_player_command(&client, &config, &league, &user, &to, season.as_deref())
                .await
        }
        Command::CreateLeague {
            name,
            slug,
            description,
            settings,
        } => {
            handle_create_league_command(&client, &config, &name, &slug, &description, &settings)
                .await
        }
        Command::BootstrapSeason {
            league,
            start,
            end,
            status,
        } => {
            handle_bootstrap_season_command(&client, &config, &league, start, end, status.into())
                .await
        }
        Command::UpdateLeague {
            league,
            name,
            description,
            settings,
        } => {
            handle_update_league_command(
                &client,
                &config,
                &league,
                name.as_deref(),
                description.as_deref(),
                &settings,
            )
            .await
        }
        Command::OpenRegistration { league, season } => {
            handle_registration_command(
                &client,
                &config,
                &league,
                season.as_deref(),
                RegistrationAction::Open,
            )
            .await
        }
        Command::Register {
            league,
            user,
            season,
        } => {
            handle_registration_command(
                &client,
                &config,
                &league,
                season.as_deref(),
                RegistrationAction::Register(&user),
            )
            .await
        }
        Command::Unregister {
            league,
            user,
            season,
        } => {
            handle_registration_command(
                &client,
                &config,
                &league,
                season.as_deref(),
                RegistrationAction::Unregister(&user),
            )
            .await
        }
    }
}
