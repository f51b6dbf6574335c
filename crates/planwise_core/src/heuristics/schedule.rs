//! Conflict-aware time-slot suggestion.
//!
//! # Responsibility
//! - Pick a start time inside the user's productivity-peak hours that does
//!   not collide with existing calendar events.
//! - Estimate how long a task needs from its ratings and text length.
//!
//! # Invariants
//! - Candidate slots are 60 minutes; overlap uses half-open event windows,
//!   so a slot may begin exactly when an event ends.
//! - Events with malformed times are skipped, never fatal.
//! - Estimated durations never drop below 15 minutes.

use crate::dates::parse_datetime;
use crate::model::event::CalendarEvent;
use crate::model::profile::UserProfile;
use crate::model::task::Task;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use std::ops::Range;

/// Hours assumed when no productivity peak is declared.
const DEFAULT_HOURS: Range<u32> = 9..17;
/// Days scanned past tomorrow before giving up on a conflict-free slot.
const SEARCH_DAYS: i64 = 7;
/// Candidate slot length during conflict search.
const SLOT_MINUTES: u32 = 60;
/// Floor for estimated durations.
const MIN_DURATION_MINUTES: i64 = 15;

/// Suggested start time and duration for working on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSuggestion {
    pub start: NaiveDateTime,
    pub duration_minutes: u32,
}

/// Suggests a slot relative to the current local time.
pub fn suggest_slot(
    task: &Task,
    profile: Option<&UserProfile>,
    events: &[CalendarEvent],
) -> SlotSuggestion {
    suggest_slot_at(task, profile, events, Local::now().naive_local())
}

/// Suggests a slot relative to an explicit clock reading.
///
/// With events present: starting tomorrow, up to [`SEARCH_DAYS`] days of
/// preferred hours are scanned for the first 60-minute slot free of
/// conflicts; if none exists the fallback is tomorrow at the first
/// preferred hour regardless of conflicts. With no events: today at the
/// first preferred hour (tomorrow once that hour has passed), with the
/// duration from [`estimate_duration`].
pub fn suggest_slot_at(
    task: &Task,
    profile: Option<&UserProfile>,
    events: &[CalendarEvent],
    now: NaiveDateTime,
) -> SlotSuggestion {
    let hours = preferred_hours(profile);

    if !events.is_empty() {
        let windows: Vec<(NaiveDateTime, NaiveDateTime)> =
            events.iter().filter_map(event_window).collect();

        for day_offset in 1..=SEARCH_DAYS {
            let date = now.date() + Duration::days(day_offset);
            for hour in hours.clone() {
                let start = at_hour(date, hour);
                let end = start + Duration::minutes(i64::from(SLOT_MINUTES));
                let conflict = windows
                    .iter()
                    .any(|&(event_start, event_end)| overlaps(event_start, event_end, start, end));
                if !conflict {
                    return SlotSuggestion {
                        start,
                        duration_minutes: SLOT_MINUTES,
                    };
                }
            }
        }

        return SlotSuggestion {
            start: at_hour(now.date() + Duration::days(1), hours.start),
            duration_minutes: SLOT_MINUTES,
        };
    }

    let first_hour = hours.start;
    let date = if now.hour() >= first_hour {
        now.date() + Duration::days(1)
    } else {
        now.date()
    };
    SlotSuggestion {
        start: at_hour(date, first_hour),
        duration_minutes: estimate_duration(task),
    }
}

/// Resolves the hour-of-day range favored by a profile.
pub fn preferred_hours(profile: Option<&UserProfile>) -> Range<u32> {
    profile
        .and_then(|p| p.productivity_peak)
        .map(|peak| peak.peak_hours())
        .unwrap_or(DEFAULT_HOURS)
}

/// Estimates a working duration in minutes for a task.
///
/// Base 60; 90 for high importance or urgency, 30 when both are low; long
/// titles and descriptions add time, short titles shave it; floor 15.
pub fn estimate_duration(task: &Task) -> u32 {
    let mut duration: i64 = 60;

    if task.importance >= 4 || task.urgency >= 4 {
        duration = 90;
    } else if task.importance <= 2 && task.urgency <= 2 {
        duration = 30;
    }

    let title_chars = task.title.chars().count();
    if title_chars > 50 {
        duration += 30;
    } else if title_chars < 20 {
        duration -= 15;
    }

    if task.description.chars().count() > 200 {
        duration += 30;
    }

    duration.max(MIN_DURATION_MINUTES) as u32
}

/// Half-open overlap test between an event window and a candidate slot.
fn overlaps(
    event_start: NaiveDateTime,
    event_end: NaiveDateTime,
    slot_start: NaiveDateTime,
    slot_end: NaiveDateTime,
) -> bool {
    (event_start <= slot_start && slot_start < event_end)
        || (event_start < slot_end && slot_end <= event_end)
}

fn event_window(event: &CalendarEvent) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = parse_datetime(&event.start_time)?;
    let end = parse_datetime(&event.end_time)?;
    Some((start, end))
}

fn at_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    // Peak tables keep hours within 0..24, so this cannot fail.
    date.and_hms_opt(hour, 0, 0)
        .expect("peak hours stay within 0..24")
}
