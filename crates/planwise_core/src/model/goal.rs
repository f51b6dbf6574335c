//! Goal domain model with milestone-driven progress.
//!
//! # Invariants
//! - `progress` stays within [0, 100] and is derived from milestone state.
//! - A goal with milestones is complete exactly when every milestone is.

use crate::dates::iso_timestamp_now;
use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for goals.
pub type GoalId = Uuid;

/// Validation error for goal records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    /// Title is blank after trim.
    BlankTitle,
    /// Progress above 100.
    ProgressOutOfRange(u8),
}

impl Display for GoalValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "goal title must not be blank"),
            Self::ProgressOutOfRange(value) => {
                write!(f, "goal progress must be within 0..=100, got {value}")
            }
        }
    }
}

impl Error for GoalValidationError {}

/// Sub-step toward a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Milestone {
    /// Creates an open milestone.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            completed: false,
        }
    }
}

/// Long-term objective broken into milestones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    pub description: String,
    pub category_id: Option<CategoryId>,
    pub created_at: String,
    /// Optional wire-format target date.
    pub target_date: Option<String>,
    pub completed: bool,
    pub completed_at: Option<String>,
    pub milestones: Vec<Milestone>,
    /// Percentage of milestones completed, 0..=100.
    pub progress: u8,
}

impl Goal {
    /// Creates a goal with a generated stable ID and no milestones.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a goal with a caller-provided stable ID.
    pub fn with_id(id: GoalId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            category_id: None,
            created_at: iso_timestamp_now(),
            target_date: None,
            completed: false,
            completed_at: None,
            milestones: Vec::new(),
            progress: 0,
        }
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.title.trim().is_empty() {
            return Err(GoalValidationError::BlankTitle);
        }
        if self.progress > 100 {
            return Err(GoalValidationError::ProgressOutOfRange(self.progress));
        }
        Ok(())
    }

    /// Recomputes `progress` from milestone completion state.
    ///
    /// A goal without milestones keeps its current progress untouched.
    pub fn recompute_progress(&mut self) {
        let total = self.milestones.len();
        if total == 0 {
            return;
        }
        let done = self
            .milestones
            .iter()
            .filter(|milestone| milestone.completed)
            .count();
        self.progress = (done * 100 / total) as u8;
    }

    /// Returns whether the goal has milestones and all of them are complete.
    pub fn all_milestones_complete(&self) -> bool {
        !self.milestones.is_empty()
            && self.milestones.iter().all(|milestone| milestone.completed)
    }

    /// Marks the goal completed at the given timestamp.
    pub fn complete(&mut self, at: impl Into<String>) {
        self.completed = true;
        self.completed_at = Some(at.into());
    }
}
