pub mod champion;
pub mod director_permissions;
pub mod season_status;
pub mod time_window;

pub use champion::extract_champion;
pub use director_permissions::{
    DirectorRecord, DirectorTier, decode, decode_roster, encode, is_full_director,
};
pub use season_status::{LeagueStatus, LeagueStatusView, resolve_league, resolve_league_status};
pub use time_window::{
    ScheduleLine, TimeWindow, classify, format_local_time, format_relative, schedule_line,
};
