use chrono::{DateTime, Local, TimeDelta, Utc};

use crate::constants::time_window::{DAY_SECONDS, HOUR_SECONDS, MINUTE_SECONDS};

/// Where an instant falls relative to a scheduled window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Upcoming,
    Ongoing,
    Past,
    Unknown,
}

impl TimeWindow {
    /// Short badge shown next to a tournament.
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            TimeWindow::Ongoing => Some("Live"),
            _ => None,
        }
    }
}

/// Classifies `now` against an optional `[start, end]` window.
///
/// Ongoing needs both bounds with `start <= now <= end`. Upcoming needs a start
/// in the future. Past needs an end in the past. Anything else is Unknown.
///
/// ```
/// use chrono::{Duration, Utc};
/// use league_watch::data_fetcher::processors::{TimeWindow, classify};
///
/// let now = Utc::now();
/// let start = now - Duration::hours(1);
/// let end = now + Duration::hours(1);
/// assert_eq!(classify(now, Some(start), Some(end)), TimeWindow::Ongoing);
/// assert_eq!(classify(now, None, None), TimeWindow::Unknown);
/// ```
pub fn classify(
    now: DateTime<Utc>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> TimeWindow {
    match (start, end) {
        (Some(start), Some(end)) if start <= now && now <= end => TimeWindow::Ongoing,
        (Some(start), _) if now < start => TimeWindow::Upcoming,
        (_, Some(end)) if now > end => TimeWindow::Past,
        _ => TimeWindow::Unknown,
    }
}

fn plural(count: i64) -> &'static str {
    if count > 1 { "s" } else { "" }
}

/// Formats `target` relative to `now` ("in 5 min", "2 hours ago", ...).
///
/// A negative difference reads as past, zero or positive as future. Units are
/// truncated, so 61 seconds is "1 min" and 3599 seconds is "59 min".
pub fn format_relative(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = target.signed_duration_since(now);
    let magnitude = delta.num_seconds().abs();
    let is_past = delta < TimeDelta::zero();

    if magnitude < MINUTE_SECONDS {
        return if is_past { "just now" } else { "starting soon" }.to_string();
    }

    let phrase = if magnitude < HOUR_SECONDS {
        format!("{} min", magnitude / MINUTE_SECONDS)
    } else if magnitude < DAY_SECONDS {
        let hours = magnitude / HOUR_SECONDS;
        format!("{hours} hour{}", plural(hours))
    } else {
        let days = magnitude / DAY_SECONDS;
        format!("{days} day{}", plural(days))
    };

    if is_past {
        format!("{phrase} ago")
    } else {
        format!("in {phrase}")
    }
}

/// Formats an instant in the machine's local timezone, e.g. "Apr 1, 17:00 +02:00".
pub fn format_local_time(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%b %-d, %H:%M %:z")
        .to_string()
}

/// Label plus relative phrase describing when a tournament starts or ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleLine {
    pub label: &'static str,
    pub relative: String,
    pub at: DateTime<Utc>,
}

/// Picks the instant worth showing for a window: the start while ongoing or
/// upcoming, otherwise the end when one is known.
pub fn schedule_line(
    window: TimeWindow,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<ScheduleLine> {
    let (label, at) = match window {
        TimeWindow::Ongoing => ("Started", start?),
        TimeWindow::Upcoming => ("Starts", start?),
        TimeWindow::Past | TimeWindow::Unknown => ("Ended", end?),
    };

    Some(ScheduleLine {
        label,
        relative: format_relative(at, now),
        at,
    })
}
