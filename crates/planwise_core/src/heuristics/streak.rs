//! Habit check-in recording and streak computation.
//!
//! # Responsibility
//! - Record one check-in per calendar day and keep streak counters current.
//!
//! # Invariants
//! - A duplicate check-in mutates nothing and reports failure.
//! - `current_streak` is the consecutive-day run ending at the most recent
//!   recorded date, so it is insertion-order independent.
//! - `current_streak <= best_streak` holds after every successful check-in.
//! - Malformed stored dates are skipped, never fatal.

use crate::dates::{format_date, parse_date, today};
use crate::model::habit::Habit;
use chrono::NaiveDate;

/// Records a check-in for `date`.
///
/// Returns `false` without mutating the habit when the date is already
/// recorded. On success the check-in is appended and both streak counters
/// are recomputed from the full (defensively parsed) history.
pub fn check_in(habit: &mut Habit, date: NaiveDate) -> bool {
    let stamp = format_date(date);
    if habit.has_check_in(&stamp) {
        return false;
    }

    habit.check_ins.push(stamp);
    let run = consecutive_run(&habit.check_ins);
    habit.current_streak = run;
    habit.best_streak = habit.best_streak.max(run);
    true
}

/// Records a check-in for the current local date.
pub fn check_in_today(habit: &mut Habit) -> bool {
    check_in(habit, today())
}

/// Counts the consecutive-day run ending at the most recent check-in.
///
/// Check-ins are parsed defensively (malformed entries skipped), sorted
/// ascending, and walked backward from the most recent date; the run grows
/// while each earlier date is exactly one day before the next.
fn consecutive_run(check_ins: &[String]) -> u32 {
    let mut dates: Vec<NaiveDate> = check_ins
        .iter()
        .filter_map(|entry| parse_date(entry))
        .collect();
    dates.sort_unstable();
    dates.dedup();

    // Callers invoke this right after appending a well-formed date, so the
    // parsed history is never empty.
    if dates.is_empty() {
        return 1;
    }

    let mut run = 1;
    for pair in dates.windows(2).rev() {
        if pair[1].signed_duration_since(pair[0]).num_days() == 1 {
            run += 1;
        } else {
            break;
        }
    }
    run
}
