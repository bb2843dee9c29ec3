use chrono::{DateTime, Utc};
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use league_watch::data_fetcher::models::{LeagueSettings, SeasonStatus};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Tournament and league watcher
///
/// Shows upcoming and ongoing tournaments, recently finished ones and the
/// status of every active league. Admin subcommands manage tournament
/// directors, division placement and league seasons.
///
/// Running without a subcommand shows the events view.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Update API domain in config. Will prompt for new domain if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path.
    /// If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    pub fn is_config_update(&self) -> bool {
        self.new_api_domain.is_some()
            || self.new_log_file_path.is_some()
            || self.clear_log_file_path
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Upcoming and ongoing tournaments, past tournaments and league statuses
    Events,

    /// List a tournament's directors, optionally adding or removing one
    Directors {
        tournament_id: String,

        /// Username to add as a director
        #[arg(long, conflicts_with = "remove")]
        add: Option<String>,

        /// Add the director with read-only rights
        #[arg(long, requires = "add")]
        read_only: bool,

        /// Director to remove, as shown in the roster
        #[arg(long)]
        remove: Option<String>,

        /// Report whether this user has full director rights
        #[arg(long)]
        check: Option<String>,
    },

    /// Move a player to another division of a scheduled season
    MovePlayer {
        /// League UUID or slug
        #[arg(long)]
        league: String,

        /// User ID of the player
        #[arg(long)]
        user: String,

        /// Target division ID
        #[arg(long)]
        to: String,

        /// Season ID. Defaults to the newest season.
        #[arg(long)]
        season: Option<String>,
    },

    /// Show a season's divisions and the players in them
    Roster {
        /// League UUID or slug
        #[arg(long)]
        league: String,

        /// Season ID. Defaults to the newest season.
        #[arg(long)]
        season: Option<String>,
    },

    /// Create a league
    CreateLeague {
        #[arg(long)]
        name: String,

        #[arg(long)]
        slug: String,

        #[arg(long, default_value = "")]
        description: String,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Create a league's first season
    BootstrapSeason {
        /// League UUID or slug
        #[arg(long)]
        league: String,

        /// Season start, RFC 3339
        #[arg(long)]
        start: DateTime<Utc>,

        /// Season end, RFC 3339
        #[arg(long)]
        end: DateTime<Utc>,

        #[arg(long, value_enum, default_value_t = StatusArg::Scheduled)]
        status: StatusArg,
    },

    /// Update a league's name, description or settings
    UpdateLeague {
        /// League UUID or slug
        #[arg(long)]
        league: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Open registration for a scheduled season
    OpenRegistration {
        /// League UUID or slug
        #[arg(long)]
        league: String,

        /// Season ID. Defaults to the newest scheduled season.
        #[arg(long)]
        season: Option<String>,
    },

    /// Register a user for a season
    Register {
        /// League UUID or slug
        #[arg(long)]
        league: String,

        #[arg(long)]
        user: String,

        /// Season ID. Defaults to the newest season.
        #[arg(long)]
        season: Option<String>,
    },

    /// Remove a user's registration from a season
    Unregister {
        /// League UUID or slug
        #[arg(long)]
        league: String,

        #[arg(long)]
        user: String,

        /// Season ID. Defaults to the newest season.
        #[arg(long)]
        season: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusArg {
    Scheduled,
    RegistrationOpen,
    Active,
    Completed,
}

impl From<StatusArg> for SeasonStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Scheduled => SeasonStatus::Scheduled,
            StatusArg::RegistrationOpen => SeasonStatus::RegistrationOpen,
            StatusArg::Active => SeasonStatus::Active,
            StatusArg::Completed => SeasonStatus::Completed,
        }
    }
}

/// League settings given on the command line. Unset fields keep their
/// current value.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct SettingsArgs {
    #[arg(long, help_heading = "League settings")]
    pub season_length_days: Option<i32>,

    #[arg(long, help_heading = "League settings")]
    pub lexicon: Option<String>,

    #[arg(long, help_heading = "League settings")]
    pub variant: Option<String>,

    #[arg(long, help_heading = "League settings")]
    pub division_size: Option<i32>,

    /// Increment per move in seconds
    #[arg(long, help_heading = "League settings")]
    pub increment: Option<i32>,

    /// Time bank in minutes
    #[arg(long, help_heading = "League settings")]
    pub time_bank: Option<i32>,

    #[arg(long, help_heading = "League settings")]
    pub challenge_rule: Option<i32>,
}

impl SettingsArgs {
    pub fn is_empty(&self) -> bool {
        self.season_length_days.is_none()
            && self.lexicon.is_none()
            && self.variant.is_none()
            && self.division_size.is_none()
            && self.increment.is_none()
            && self.time_bank.is_none()
            && self.challenge_rule.is_none()
    }

    pub fn apply_to(&self, settings: &mut LeagueSettings) {
        if let Some(days) = self.season_length_days {
            settings.season_length_days = days;
        }
        if let Some(lexicon) = &self.lexicon {
            settings.lexicon = lexicon.clone();
        }
        if let Some(variant) = &self.variant {
            settings.variant = variant.clone();
        }
        if let Some(size) = self.division_size {
            settings.ideal_division_size = size;
        }
        if let Some(increment) = self.increment {
            settings.time_control.increment_seconds = increment;
        }
        if let Some(bank) = self.time_bank {
            settings.time_control.time_bank_minutes = bank;
        }
        if let Some(rule) = self.challenge_rule {
            settings.challenge_rule = rule;
        }
    }
}
