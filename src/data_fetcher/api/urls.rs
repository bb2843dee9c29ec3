//! URL building utilities for RPC endpoints

use crate::constants::wire::{LEAGUE_SERVICE, TOURNAMENT_SERVICE};

/// Builds the endpoint for one RPC method.
///
/// Every call is a JSON POST to `{api_domain}/api/{service}/{method}`.
/// A trailing slash on the domain is ignored.
///
/// # Example
/// ```
/// use league_watch::data_fetcher::api::build_rpc_url;
///
/// let url = build_rpc_url(
///     "https://woogles.example.com/",
///     "league_service.LeagueService",
///     "GetAllLeagues",
/// );
/// assert_eq!(url, "https://woogles.example.com/api/league_service.LeagueService/GetAllLeagues");
/// ```
pub fn build_rpc_url(api_domain: &str, service: &str, method: &str) -> String {
    format!("{}/api/{service}/{method}", api_domain.trim_end_matches('/'))
}

/// Builds the endpoint for a tournament service method.
pub fn build_tournament_url(api_domain: &str, method: &str) -> String {
    build_rpc_url(api_domain, TOURNAMENT_SERVICE, method)
}

/// Builds the endpoint for a league service method.
pub fn build_league_url(api_domain: &str, method: &str) -> String {
    build_rpc_url(api_domain, LEAGUE_SERVICE, method)
}
