//! Planning heuristics.
//!
//! # Responsibility
//! - Provide the pure decision helpers behind the planner: categorization,
//!   rating estimation, streaks, slot suggestion and priority ranking.
//!
//! # Invariants
//! - Every function is total over caller-supplied collections; malformed
//!   dates and empty inputs degrade to defaults or sentinels.
//! - Only [`streak::check_in`] mutates its input, and only the single habit
//!   passed to it.

pub mod classify;
pub mod estimate;
pub mod rank;
pub mod schedule;
pub mod streak;
