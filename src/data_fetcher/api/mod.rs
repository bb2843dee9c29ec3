pub mod fetch_utils;
pub mod http_client;
pub mod league_api;
pub mod tournament_api;
pub mod urls;

pub use http_client::create_http_client_with_timeout;
pub use league_api::*;
pub use tournament_api::*;
pub use urls::*;
