//! Mutating workflows. Each one checks what it can locally, calls the service
//! once, then replaces its held state with a fresh read.

pub mod directors;
pub mod divisions;
pub mod leagues;

pub use directors::{DirectorPanel, DirectorRoster};
pub use divisions::{
    LeagueRosterSnapshot, MovePlayerFlow, MoveSelection, SeasonRoster, can_move_players,
    candidate_targets, check_move,
};
pub use leagues::{LeagueAdmin, LeagueSnapshot, bootstrap_status_allowed};
