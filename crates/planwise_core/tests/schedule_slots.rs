use chrono::{NaiveDate, NaiveDateTime, Timelike};
use planwise_core::{
    estimate_duration, preferred_hours, suggest_slot_at, CalendarEvent, ProductivityPeak, Task,
    UserProfile,
};

fn clock(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 7, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn morning_profile() -> UserProfile {
    let mut profile = UserProfile::new("sam");
    profile.productivity_peak = Some(ProductivityPeak::Morning);
    profile
}

fn event(day: u32, start_hour: u32, end_hour: u32) -> CalendarEvent {
    CalendarEvent::new(
        "busy",
        format!("2026-07-{day:02}T{start_hour:02}:00:00"),
        format!("2026-07-{day:02}T{end_hour:02}:00:00"),
    )
}

#[test]
fn morning_peak_without_events_starts_in_the_morning_window() {
    let task = Task::new("review pull requests");
    let suggestion = suggest_slot_at(&task, Some(&morning_profile()), &[], clock(6, 6));

    assert_eq!(suggestion.start, clock(6, 8));
    assert!((8..12).contains(&suggestion.start.hour()));
}

#[test]
fn passed_peak_hour_moves_to_tomorrow() {
    let task = Task::new("review pull requests");
    let suggestion = suggest_slot_at(&task, Some(&morning_profile()), &[], clock(6, 9));

    assert_eq!(suggestion.start, clock(7, 8));
}

#[test]
fn missing_profile_defaults_to_work_hours() {
    assert_eq!(preferred_hours(None), 9..17);

    let task = Task::new("plan sprint");
    let suggestion = suggest_slot_at(&task, None, &[], clock(6, 6));
    assert_eq!(suggestion.start.hour(), 9);
}

#[test]
fn conflicting_events_push_the_slot_later() {
    let task = Task::new("deep work block");
    // Tomorrow (the 7th) is blocked from 8 to 10; 10:00 is the first free
    // candidate under the half-open rule.
    let events = vec![event(7, 8, 10)];
    let suggestion = suggest_slot_at(&task, Some(&morning_profile()), &events, clock(6, 6));

    assert_eq!(suggestion.start, clock(7, 10));
    assert_eq!(suggestion.duration_minutes, 60);
}

#[test]
fn fully_booked_week_falls_back_to_tomorrow_first_hour() {
    let task = Task::new("deep work block");
    let events: Vec<CalendarEvent> = (7..=13).map(|day| event(day, 8, 12)).collect();
    let suggestion = suggest_slot_at(&task, Some(&morning_profile()), &events, clock(6, 6));

    assert_eq!(suggestion.start, clock(7, 8));
    assert_eq!(suggestion.duration_minutes, 60);
}

#[test]
fn malformed_event_times_are_skipped() {
    let task = Task::new("deep work block");
    let events = vec![CalendarEvent::new("broken", "whenever", "later")];
    let suggestion = suggest_slot_at(&task, Some(&morning_profile()), &events, clock(6, 6));

    // The unparseable event cannot conflict, so the first candidate slot
    // tomorrow wins.
    assert_eq!(suggestion.start, clock(7, 8));
}

#[test]
fn event_search_starts_tomorrow_even_if_today_is_free() {
    let task = Task::new("deep work block");
    let events = vec![event(20, 8, 9)];
    let suggestion = suggest_slot_at(&task, Some(&morning_profile()), &events, clock(6, 6));

    assert_eq!(suggestion.start.date(), clock(7, 8).date());
}

#[test]
fn duration_grows_with_stakes_and_text_length() {
    let mut task = Task::new("short");
    task.importance = 5;
    task.urgency = 5;
    // High stakes 90, short title -15.
    assert_eq!(estimate_duration(&task), 75);

    let mut task = Task::new("a".repeat(60));
    task.importance = 3;
    task.urgency = 3;
    task.description = "d".repeat(250);
    // Base 60, long title +30, long description +30.
    assert_eq!(estimate_duration(&task), 120);
}

#[test]
fn duration_never_drops_below_fifteen_minutes() {
    let mut task = Task::new("tidy");
    task.importance = 1;
    task.urgency = 1;
    // Low stakes 30, short title -15.
    assert_eq!(estimate_duration(&task), 15);

    let mut long_low = Task::new("x".repeat(80));
    long_low.importance = 1;
    long_low.urgency = 1;
    assert!(estimate_duration(&long_low) >= 15);
}

#[test]
fn no_event_path_uses_the_estimated_duration() {
    let mut task = Task::new("prep");
    task.importance = 5;
    task.urgency = 5;
    let suggestion = suggest_slot_at(&task, Some(&morning_profile()), &[], clock(6, 6));

    // High stakes 90, short title -15.
    assert_eq!(suggestion.duration_minutes, 75);
}
