//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and wire conventions so that the
//! processors and API layers agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Default number of past tournaments requested for the events view
pub const DEFAULT_PAST_TOURNAMENTS_LIMIT: u32 = 50;

/// Number of most recent seasons needed to resolve a league's status
pub const RECENT_SEASONS_FOR_STATUS: u32 = 2;

/// Wire conventions shared with the tournament and league services
pub mod wire {
    /// Suffix marking a read-only director in the stored roster
    pub const READONLY_DIRECTOR_SUFFIX: &str = ":readonly";

    /// `rating` sentinel sent with a full director
    pub const FULL_DIRECTOR_RATING: i32 = 0;

    /// `rating` sentinel sent with a read-only director
    pub const READONLY_DIRECTOR_RATING: i32 = -1;

    /// Standing result code for a championship placement
    pub const CHAMPION_RESULT: i32 = 4;

    /// Enum name the league service may send in place of the champion code
    pub const CHAMPION_RESULT_NAME: &str = "RESULT_CHAMPION";

    /// Division number of the top bracket
    pub const TOP_DIVISION_NUMBER: i32 = 1;

    pub const TOURNAMENT_SERVICE: &str = "tournament_service.TournamentService";
    pub const LEAGUE_SERVICE: &str = "league_service.LeagueService";
}

/// Time thresholds used by the classifiers
pub mod time_window {
    pub const MINUTE_SECONDS: i64 = 60;
    pub const HOUR_SECONDS: i64 = 3_600;
    pub const DAY_SECONDS: i64 = 86_400;

    /// How long after a new season starts the previous champion is still shown
    pub const PREVIOUS_CHAMPION_WINDOW_SECONDS: i64 = 7 * DAY_SECONDS;
}

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// Tournament listings and metadata
    pub const TOURNAMENT_SECONDS: u64 = 60;

    /// League, season and standings reads
    pub const LEAGUE_SECONDS: u64 = 30;

    /// Capacity of the read-through response cache
    pub const RESPONSE_CACHE_CAPACITY: usize = 100;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "LEAGUE_WATCH_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "LEAGUE_WATCH_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "LEAGUE_WATCH_HTTP_TIMEOUT";
}

/// Retry configuration for reads. Mutations are never retried.
pub mod retry {
    /// Maximum number of retry attempts for API reads
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;

    /// Jitter range applied to each backoff step (fraction of the delay)
    pub const JITTER_FRACTION: f64 = 0.2;
}
