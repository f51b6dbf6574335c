//! Task domain model and priority banding.
//!
//! # Responsibility
//! - Define the canonical task record consumed by heuristics and services.
//! - Derive the Eisenhower-style priority score and band from ratings.
//!
//! # Invariants
//! - `importance` and `urgency` stay within [1, 5] for validated tasks.
//! - `completed_at` is only meaningful while `completed` is true.

use crate::dates::iso_timestamp_now;
use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for tasks.
pub type TaskId = Uuid;

/// Lowest accepted importance/urgency rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted importance/urgency rating.
pub const MAX_RATING: u8 = 5;
/// Rating assumed when the caller supplies none.
pub const DEFAULT_RATING: u8 = 3;

/// Validation error for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is blank after trim.
    BlankTitle,
    /// Importance or urgency outside [1, 5].
    RatingOutOfRange { field: &'static str, value: u8 },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "task title must not be blank"),
            Self::RatingOutOfRange { field, value } => write!(
                f,
                "task {field} must be within {MIN_RATING}..={MAX_RATING}, got {value}"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// Priority band derived from `importance * urgency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityBand {
    Critical,
    High,
    Medium,
    Low,
}

impl PriorityBand {
    /// Maps a priority score to its band.
    ///
    /// Thresholds: Critical >= 20, High >= 12, Medium >= 6, Low below.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 20 => Self::Critical,
            s if s >= 12 => Self::High,
            s if s >= 6 => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for linking and auditing.
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// Referenced category; never owned by the task.
    pub category_id: Option<CategoryId>,
    /// Wire-format creation timestamp.
    pub created_at: String,
    /// Optional wire-format due date.
    pub due_date: Option<String>,
    pub completed: bool,
    pub completed_at: Option<String>,
    /// 1..=5 rating of how much the task matters.
    pub importance: u8,
    /// 1..=5 rating of how soon the task has to happen.
    pub urgency: u8,
}

impl Task {
    /// Creates a task with a generated stable ID and default medium ratings.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            category_id: None,
            created_at: iso_timestamp_now(),
            due_date: None,
            completed: false,
            completed_at: None,
            importance: DEFAULT_RATING,
            urgency: DEFAULT_RATING,
        }
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `BlankTitle` when the title is empty after trim.
    /// - `RatingOutOfRange` when importance or urgency leaves [1, 5].
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }
        validate_rating("importance", self.importance)?;
        validate_rating("urgency", self.urgency)?;
        Ok(())
    }

    /// Returns `importance * urgency`.
    pub fn priority_score(&self) -> u8 {
        self.importance.saturating_mul(self.urgency)
    }

    /// Returns the band the priority score falls into.
    pub fn priority_band(&self) -> PriorityBand {
        PriorityBand::from_score(self.priority_score())
    }

    /// Marks the task completed at the given timestamp.
    pub fn complete(&mut self, at: impl Into<String>) {
        self.completed = true;
        self.completed_at = Some(at.into());
    }
}

fn validate_rating(field: &'static str, value: u8) -> Result<(), TaskValidationError> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(TaskValidationError::RatingOutOfRange { field, value });
    }
    Ok(())
}
