// src/main.rs
mod app;
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use commands::{handle_config_update_command, handle_list_config_command, print_error};
use league_watch::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration operations don't need logging or a client
    if args.list_config {
        return handle_list_config_command().await;
    }
    if args.is_config_update() {
        return handle_config_update_command(&args).await;
    }

    // The guard must live until exit so buffered logs are flushed
    let (log_file_path, guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if let Err(e) = app::run(&args).await {
        tracing::error!("{e}");
        print_error(&e)?;
        drop(guard);
        std::process::exit(1);
    }
    Ok(())
}
