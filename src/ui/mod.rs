pub mod admin_pages;
pub mod colors;
pub mod events_page;
pub mod page;

pub use admin_pages::{build_directors_page, build_league_page, build_season_roster_page};
pub use events_page::{build_events_page, league_line, registration_badge};
pub use page::{Page, PageLine};
