//! Habit domain model.
//!
//! # Responsibility
//! - Define the habit record with its check-in history and streak counters.
//!
//! # Invariants
//! - `check_ins` holds wire-format dates (`YYYY-MM-DD`) with no duplicates.
//! - `current_streak <= best_streak` holds after any check-in.

use crate::dates::iso_timestamp_now;
use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for habits.
pub type HabitId = Uuid;

/// Validation error for habit records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitValidationError {
    /// Title is blank after trim.
    BlankTitle,
}

impl Display for HabitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "habit title must not be blank"),
        }
    }
}

impl Error for HabitValidationError {}

/// Cadence at which a habit is meant to recur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitFrequency {
    Daily,
    Weekdays,
    Weekends,
    Weekly,
}

/// Recurring habit with check-in history and streak counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub title: String,
    pub description: String,
    pub category_id: Option<CategoryId>,
    pub created_at: String,
    pub frequency: HabitFrequency,
    /// Wire-format dates the habit was performed on, one entry per day.
    pub check_ins: Vec<String>,
    /// Consecutive-day run ending at the most recent check-in.
    pub current_streak: u32,
    /// Longest consecutive-day run ever recorded.
    pub best_streak: u32,
}

impl Habit {
    /// Creates a habit with a generated stable ID and zeroed streaks.
    pub fn new(title: impl Into<String>, frequency: HabitFrequency) -> Self {
        Self::with_id(Uuid::new_v4(), title, frequency)
    }

    /// Creates a habit with a caller-provided stable ID.
    pub fn with_id(id: HabitId, title: impl Into<String>, frequency: HabitFrequency) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            category_id: None,
            created_at: iso_timestamp_now(),
            frequency,
            check_ins: Vec::new(),
            current_streak: 0,
            best_streak: 0,
        }
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), HabitValidationError> {
        if self.title.trim().is_empty() {
            return Err(HabitValidationError::BlankTitle);
        }
        Ok(())
    }

    /// Returns whether a wire-format date is already recorded.
    pub fn has_check_in(&self, date: &str) -> bool {
        self.check_ins.iter().any(|entry| entry == date)
    }
}
