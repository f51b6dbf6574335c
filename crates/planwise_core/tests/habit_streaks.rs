use chrono::NaiveDate;
use planwise_core::heuristics::streak::check_in;
use planwise_core::{Habit, HabitFrequency};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, d).unwrap()
}

fn habit() -> Habit {
    Habit::new("evening walk", HabitFrequency::Daily)
}

#[test]
fn first_check_in_starts_streak_at_one() {
    let mut habit = habit();
    assert!(check_in(&mut habit, day(10)));

    assert_eq!(habit.check_ins, vec!["2026-06-10".to_string()]);
    assert_eq!(habit.current_streak, 1);
    assert_eq!(habit.best_streak, 1);
}

#[test]
fn consecutive_days_build_a_streak_in_any_insertion_order() {
    for order in [[10, 11, 12], [11, 10, 12], [10, 12, 11], [12, 11, 10]] {
        let mut habit = habit();
        for d in order {
            assert!(check_in(&mut habit, day(d)), "order {order:?}");
        }
        assert_eq!(habit.current_streak, 3, "order {order:?}");
        assert_eq!(habit.best_streak, 3, "order {order:?}");
    }
}

#[test]
fn duplicate_check_in_is_rejected_without_mutation() {
    let mut habit = habit();
    assert!(check_in(&mut habit, day(5)));

    let before = habit.clone();
    assert!(!check_in(&mut habit, day(5)));
    assert_eq!(habit, before);
}

#[test]
fn gap_resets_current_streak() {
    let mut habit = habit();
    assert!(check_in(&mut habit, day(1)));
    assert!(check_in(&mut habit, day(3)));

    assert_eq!(habit.current_streak, 1);
    assert_eq!(habit.best_streak, 1);
}

#[test]
fn best_streak_survives_a_broken_run() {
    let mut habit = habit();
    for d in [1, 2, 3] {
        assert!(check_in(&mut habit, day(d)));
    }
    assert_eq!(habit.best_streak, 3);

    assert!(check_in(&mut habit, day(20)));
    assert_eq!(habit.current_streak, 1);
    assert_eq!(habit.best_streak, 3);
}

#[test]
fn check_in_behind_a_gap_keeps_the_recent_run() {
    let mut habit = habit();
    assert!(check_in(&mut habit, day(8)));
    assert!(check_in(&mut habit, day(9)));

    // The run always ends at the most recent date; a late back-fill that
    // does not touch it leaves the counter on the day-8/day-9 run.
    assert!(check_in(&mut habit, day(2)));
    assert_eq!(habit.current_streak, 2);
    assert_eq!(habit.best_streak, 2);
}

#[test]
fn prior_best_streak_is_retained_on_a_fresh_start() {
    let mut habit = habit();
    habit.best_streak = 5;

    assert!(check_in(&mut habit, day(15)));
    assert_eq!(habit.current_streak, 1);
    assert_eq!(habit.best_streak, 5);
}

#[test]
fn malformed_stored_dates_are_skipped() {
    let mut habit = habit();
    habit.check_ins.push("not-a-date".to_string());

    assert!(check_in(&mut habit, day(7)));
    assert_eq!(habit.current_streak, 1);

    assert!(check_in(&mut habit, day(8)));
    assert_eq!(habit.current_streak, 2);
}
