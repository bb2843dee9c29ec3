use chrono::{DateTime, Utc};

use super::colors::{detail_fg, highlight_fg, live_fg, text_fg};
use super::page::Page;
use crate::data_fetcher::processors::{
    LeagueStatus, LeagueStatusView, TimeWindow, format_local_time, format_relative,
};
use crate::events::{EventsView, TournamentEntry};

/// Registration badge, shown only before a tournament starts.
pub fn registration_badge(entry: &TournamentEntry) -> Option<&'static str> {
    match entry.window {
        TimeWindow::Upcoming if entry.tournament.registration_open => Some("Open"),
        TimeWindow::Upcoming => Some("Closed"),
        _ => None,
    }
}

fn tournament_heading(entry: &TournamentEntry) -> String {
    let t = &entry.tournament;
    let mut heading = t.name.clone();
    if t.irl_mode {
        heading.push_str(" [IRL]");
    }
    if t.monitored {
        heading.push_str(" [Monitored]");
    }
    if let Some(director) = t.first_director.as_deref().filter(|d| !d.is_empty()) {
        heading.push_str(&format!("  ({director})"));
    }
    heading
}

fn tournament_meta(entry: &TournamentEntry) -> String {
    let mut meta = format!("  {} registered", entry.tournament.registrant_count);
    if let Some(badge) = registration_badge(entry).or(entry.window.badge()) {
        meta.push_str(&format!("  [{badge}]"));
    }
    if let Some(line) = &entry.schedule {
        meta.push_str(&format!(
            "  {}: {} ({})",
            line.label,
            line.relative,
            format_local_time(line.at)
        ));
    }
    meta
}

fn push_tournament(page: &mut Page, entry: &TournamentEntry) {
    let heading_color = if entry.window == TimeWindow::Ongoing {
        live_fg()
    } else {
        text_fg()
    };
    page.push(tournament_heading(entry), heading_color);
    page.push(tournament_meta(entry), detail_fg());
}

/// One-line summary of a league's resolved status.
pub fn league_line(view: &LeagueStatusView, now: DateTime<Utc>) -> String {
    let mut line = format!("{}  Season {}", view.league.name, view.season_number);

    match &view.status {
        LeagueStatus::RegistrationOpen { .. } => line.push_str("  Registration open"),
        LeagueStatus::Live { .. } => line.push_str("  Live"),
        LeagueStatus::Completed { champion } => {
            line.push_str(&format!("  Completed  Champion: {champion}"));
        }
    }

    if let (Some(label), Some(date)) = (view.status.date_label(), view.status.shown_date()) {
        line.push_str(&format!("  {label} {}", format_relative(date, now)));
    }

    if let LeagueStatus::Live {
        previous_champion: Some(champion),
        ..
    } = &view.status
    {
        line.push_str(&format!("  Last champion: {champion}"));
    }
    line
}

pub fn build_events_page(view: &EventsView) -> Page {
    let mut page = Page::new("EVENTS");

    page.section("Tournaments");
    if view.upcoming.is_empty() {
        page.text("No upcoming tournaments");
    }
    for entry in &view.upcoming {
        push_tournament(&mut page, entry);
    }

    page.section("Past tournaments");
    if view.past.is_empty() {
        page.text("No past tournaments");
    }
    for entry in &view.past {
        push_tournament(&mut page, entry);
    }

    page.section("Leagues");
    if view.leagues.is_empty() {
        page.text("No active leagues");
    }
    for league in &view.leagues {
        let color = match league.status {
            LeagueStatus::Live { .. } => live_fg(),
            LeagueStatus::RegistrationOpen { .. } => highlight_fg(),
            LeagueStatus::Completed { .. } => text_fg(),
        };
        page.push(league_line(league, view.generated_at), color);
    }

    page
}
