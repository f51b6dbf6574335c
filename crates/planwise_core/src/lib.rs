//! Core domain logic for Planwise.
//! This crate is the single source of truth for planning heuristics and
//! business invariants.

pub mod dates;
pub mod heuristics;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use heuristics::classify::{classify, MIN_TRAINING_TASKS};
pub use heuristics::estimate::estimate;
pub use heuristics::rank::{next_tasks, DEFAULT_TOP_N};
pub use heuristics::schedule::{
    estimate_duration, preferred_hours, suggest_slot, suggest_slot_at, SlotSuggestion,
};
pub use heuristics::streak::{check_in, check_in_today};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId};
pub use model::event::{CalendarEvent, EventId};
pub use model::goal::{Goal, GoalId, Milestone};
pub use model::habit::{Habit, HabitFrequency, HabitId};
pub use model::profile::{ProductivityPeak, UserProfile};
pub use model::reward::{Reward, RewardId, UnlockedReward};
pub use model::task::{PriorityBand, Task, TaskId};
pub use service::planner_service::{NewTaskRequest, PlannerService, ServiceError, ServiceResult};
pub use store::planner_store::{PlannerStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
