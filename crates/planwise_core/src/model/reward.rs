//! Reward domain model and point values.
//!
//! Completing planner work earns points; rewards unlock automatically once
//! affordable and can be redeemed by spending points.

use crate::dates::iso_timestamp_now;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for rewards.
pub type RewardId = Uuid;

/// Points granted for completing a task.
pub const TASK_COMPLETION_POINTS: u32 = 10;
/// Points granted for completing a goal.
pub const GOAL_COMPLETION_POINTS: u32 = 50;
/// Points granted for a habit check-in.
pub const HABIT_CHECK_IN_POINTS: u32 = 5;

/// Validation error for reward records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardValidationError {
    /// Title is blank after trim.
    BlankTitle,
}

impl Display for RewardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "reward title must not be blank"),
        }
    }
}

impl Error for RewardValidationError {}

/// Redeemable incentive with a point cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: RewardId,
    pub title: String,
    pub description: String,
    pub point_cost: u32,
    pub created_at: String,
}

impl Reward {
    /// Creates a reward with a generated stable ID.
    pub fn new(title: impl Into<String>, point_cost: u32) -> Self {
        Self::with_id(Uuid::new_v4(), title, point_cost)
    }

    /// Creates a reward with a caller-provided stable ID.
    pub fn with_id(id: RewardId, title: impl Into<String>, point_cost: u32) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            point_cost,
            created_at: iso_timestamp_now(),
        }
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), RewardValidationError> {
        if self.title.trim().is_empty() {
            return Err(RewardValidationError::BlankTitle);
        }
        Ok(())
    }
}

/// Unlock/redemption record for one reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedReward {
    pub reward_id: RewardId,
    pub unlocked_at: String,
    pub redeemed_at: Option<String>,
}

impl UnlockedReward {
    /// Records a reward as unlocked now.
    pub fn new(reward_id: RewardId) -> Self {
        Self {
            reward_id,
            unlocked_at: iso_timestamp_now(),
            redeemed_at: None,
        }
    }
}
