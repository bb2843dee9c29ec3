//! Tournament and league watcher library
//!
//! Reads tournaments and league seasons from the tournament and league
//! services, classifies them for display, and drives the admin workflows for
//! tournament directors, division placement and league seasons.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use league_watch::config::Config;
//! use league_watch::data_fetcher::create_http_client_with_timeout;
//! use league_watch::error::AppError;
//! use league_watch::events::build_events_view;
//! use league_watch::ui::build_events_page;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let view = build_events_view(&client, &config, Utc::now()).await;
//!     let page = build_events_page(&view);
//!
//!     let mut stdout = std::io::stdout();
//!     page.render(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod admin;
pub mod config;
pub mod consistency;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod events;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{League, Season, SeasonStatus, TournamentInstance};
pub use error::AppError;
pub use events::{EventsView, build_events_view};

pub use data_fetcher::cache::{clear_http_response_cache, get_http_response_cache_size};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
