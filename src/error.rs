use thiserror::Error;

use crate::data_fetcher::models::SeasonStatus;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to reach league service: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while calling: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // League and roster business rules
    #[error("League has no seasons: {league_id}")]
    NoSeasons { league_id: String },

    #[error("Season not found: {season_id}")]
    SeasonNotFound { season_id: String },

    #[error("Players can only be moved while season {season_id} is scheduled (status: {status})")]
    SeasonNotScheduled {
        season_id: String,
        status: SeasonStatus,
    },

    #[error("Player is already in division {division_id}")]
    SameDivision { division_id: String },

    #[error("Division {division_id} does not belong to season {season_id}")]
    UnknownDivision {
        division_id: String,
        season_id: String,
    },

    #[error("User {user_id} is not registered for season {season_id}")]
    PlayerNotRegistered { user_id: String, season_id: String },

    #[error("Director username cannot be empty")]
    EmptyDirectorName,

    #[error("A season cannot be bootstrapped with status {status}")]
    BootstrapStatusNotAllowed { status: SeasonStatus },

    #[error("Season end {end} is not after its start {start}")]
    InvalidSeasonDates { start: String, end: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn no_seasons(league_id: impl Into<String>) -> Self {
        Self::NoSeasons {
            league_id: league_id.into(),
        }
    }

    pub fn season_not_found(season_id: impl Into<String>) -> Self {
        Self::SeasonNotFound {
            season_id: season_id.into(),
        }
    }

    pub fn season_not_scheduled(season_id: impl Into<String>, status: SeasonStatus) -> Self {
        Self::SeasonNotScheduled {
            season_id: season_id.into(),
            status,
        }
    }

    pub fn same_division(division_id: impl Into<String>) -> Self {
        Self::SameDivision {
            division_id: division_id.into(),
        }
    }

    pub fn unknown_division(division_id: impl Into<String>, season_id: impl Into<String>) -> Self {
        Self::UnknownDivision {
            division_id: division_id.into(),
            season_id: season_id.into(),
        }
    }

    pub fn player_not_registered(user_id: impl Into<String>, season_id: impl Into<String>) -> Self {
        Self::PlayerNotRegistered {
            user_id: user_id.into(),
            season_id: season_id.into(),
        }
    }

    pub fn bootstrap_status_not_allowed(status: SeasonStatus) -> Self {
        Self::BootstrapStatusNotAllowed { status }
    }

    pub fn invalid_season_dates(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::InvalidSeasonDates {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Check if error is retryable (network issues, server errors, rate limits)
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiServiceUnavailable { .. }
                | AppError::ApiRateLimit { .. }
        )
    }

    /// Check if error indicates data not found (business logic, not technical error)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::ApiNotFound { .. }
                | AppError::NoSeasons { .. }
                | AppError::SeasonNotFound { .. }
                | AppError::ApiNoData { .. }
        )
    }

    /// Errors raised locally before any request was sent.
    pub fn is_rejected_locally(&self) -> bool {
        matches!(
            self,
            AppError::SeasonNotScheduled { .. }
                | AppError::SameDivision { .. }
                | AppError::UnknownDivision { .. }
                | AppError::PlayerNotRegistered { .. }
                | AppError::EmptyDirectorName
                | AppError::BootstrapStatusNotAllowed { .. }
                | AppError::InvalidSeasonDates { .. }
        )
    }
}
