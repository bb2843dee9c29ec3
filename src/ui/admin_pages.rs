use super::colors::{detail_fg, highlight_fg, text_fg};
use super::page::Page;
use crate::admin::{DirectorRoster, LeagueRosterSnapshot, LeagueSnapshot, can_move_players};
use crate::data_fetcher::processors::DirectorTier;

pub fn build_directors_page(roster: &DirectorRoster) -> Page {
    let mut page = Page::new(format!("DIRECTORS  {}", roster.tournament.name));

    if roster.directors.is_empty() {
        page.text("No directors");
    }
    for record in &roster.directors {
        let (tier, color) = match record.tier {
            DirectorTier::Full => ("Full", text_fg()),
            DirectorTier::ReadOnly => ("Read-only", detail_fg()),
        };
        page.push(format!("{:<30}{tier}", record.display_name), color);
    }
    page
}

pub fn build_season_roster_page(snapshot: &LeagueRosterSnapshot) -> Page {
    let season = snapshot.season();
    let title = match season {
        Some(season) => format!("SEASON {}  {}", season.season_number, season.status),
        None => format!("SEASON {}", snapshot.season_id),
    };
    let mut page = Page::new(title);

    if let Some(season) = season
        && !can_move_players(season)
    {
        page.push("Division moves are closed for this season", highlight_fg());
    }

    let mut divisions: Vec<_> = snapshot.roster.divisions.iter().collect();
    divisions.sort_by_key(|d| d.division_number);

    for division in divisions {
        page.section(&format!("Division {}", division.division_number));
        page.push(format!("  id {}", division.uuid), detail_fg());
        for registration in snapshot
            .roster
            .registrations
            .iter()
            .filter(|r| {
                snapshot.roster.current_division(&r.user_id) == Some(division.uuid.as_str())
            })
        {
            page.text(format!("  {:<24}{}", registration.username, registration.user_id));
        }
    }

    let unplaced: Vec<_> = snapshot
        .roster
        .registrations
        .iter()
        .filter(|r| snapshot.roster.current_division(&r.user_id).is_none())
        .collect();
    if !unplaced.is_empty() {
        page.section("Not placed");
        for registration in unplaced {
            page.text(format!("  {:<24}{}", registration.username, registration.user_id));
        }
    }
    page
}

pub fn build_league_page(snapshot: &LeagueSnapshot) -> Page {
    let league = &snapshot.league;
    let mut page = Page::new(format!("LEAGUE  {}", league.name));

    page.push(format!("slug {}  id {}", league.slug, league.uuid), detail_fg());
    if !league.description.is_empty() {
        page.text(league.description.clone());
    }
    let settings = &league.settings;
    page.push(
        format!(
            "{} days, {} {}, divisions of {}",
            settings.season_length_days,
            settings.lexicon,
            settings.variant,
            settings.ideal_division_size
        ),
        detail_fg(),
    );

    page.section("Seasons");
    if snapshot.seasons.is_empty() {
        page.text("No seasons");
    }
    for season in &snapshot.seasons {
        page.text(format!(
            "Season {:<4}{:<20}{}",
            season.season_number,
            season.status.to_string(),
            season.uuid
        ));
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::SeasonRoster;
    use crate::data_fetcher::models::{Division, Registration, Season, SeasonStatus};

    #[test]
    fn test_season_roster_page_groups_by_division() {
        let snapshot = LeagueRosterSnapshot {
            league_id: "l1".to_string(),
            seasons: vec![Season {
                uuid: "s1".to_string(),
                season_number: 2,
                status: SeasonStatus::Active,
                ..Season::default()
            }],
            season_id: "s1".to_string(),
            roster: SeasonRoster {
                registrations: vec![
                    Registration {
                        user_id: "u1".to_string(),
                        username: "alice".to_string(),
                        division_id: Some("d2".to_string()),
                    },
                    Registration {
                        user_id: "u2".to_string(),
                        username: "bob".to_string(),
                        division_id: None,
                    },
                ],
                divisions: vec![
                    Division {
                        uuid: "d2".to_string(),
                        division_number: 2,
                        standings: Vec::new(),
                    },
                    Division {
                        uuid: "d1".to_string(),
                        division_number: 1,
                        standings: Vec::new(),
                    },
                ],
            },
        };

        let text = build_season_roster_page(&snapshot).plain_text();

        assert!(text.starts_with("SEASON 2  Active"));
        assert!(text.contains("Division moves are closed"));
        assert!(text.find("DIVISION 1") < text.find("DIVISION 2"));
        assert!(text.contains("NOT PLACED"));
    }
}
