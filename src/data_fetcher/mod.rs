pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::create_http_client_with_timeout;
pub use models::{League, Season, SeasonStatus, TournamentInstance};
