//! Planner use-case service.
//!
//! # Responsibility
//! - Orchestrate store lifecycle operations with the heuristic engine:
//!   auto-categorization and rating estimation on task creation, streak
//!   updates on habit check-ins, milestone-driven goal progress, points and
//!   reward redemption.
//!
//! # Invariants
//! - Completion points are awarded once per record, never on re-completion.
//! - A duplicate habit check-in reports `Ok(false)` and changes nothing.

use crate::dates::{iso_timestamp_now, today};
use crate::heuristics::rank::next_tasks;
use crate::heuristics::schedule::{suggest_slot_at, SlotSuggestion};
use crate::heuristics::streak::check_in;
use crate::heuristics::{classify::classify, estimate::estimate};
use crate::model::category::CategoryId;
use crate::model::goal::{Goal, GoalId};
use crate::model::habit::HabitId;
use crate::model::reward::{
    RewardId, UnlockedReward, GOAL_COMPLETION_POINTS, HABIT_CHECK_IN_POINTS,
    TASK_COMPLETION_POINTS,
};
use crate::model::task::{Task, TaskId};
use crate::store::planner_store::{PlannerStore, StoreError};
use chrono::{Local, NaiveDate};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from planner use-case operations.
#[derive(Debug)]
pub enum ServiceError {
    /// Target task does not exist.
    TaskNotFound(TaskId),
    /// Target goal does not exist.
    GoalNotFound(GoalId),
    /// Target habit does not exist.
    HabitNotFound(HabitId),
    /// Target reward does not exist.
    RewardNotFound(RewardId),
    /// Milestone index past the goal's milestone list.
    MilestoneOutOfRange {
        goal: GoalId,
        index: usize,
        len: usize,
    },
    /// Point balance cannot cover a redemption.
    InsufficientPoints { required: u32, available: u32 },
    /// Store-level failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::GoalNotFound(id) => write!(f, "goal not found: {id}"),
            Self::HabitNotFound(id) => write!(f, "habit not found: {id}"),
            Self::RewardNotFound(id) => write!(f, "reward not found: {id}"),
            Self::MilestoneOutOfRange { goal, index, len } => write!(
                f,
                "milestone index {index} out of range for goal {goal} with {len} milestones"
            ),
            Self::InsufficientPoints {
                required,
                available,
            } => write!(f, "need {required} points, only {available} available"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::InsufficientPoints {
                required,
                available,
            } => Self::InsufficientPoints {
                required,
                available,
            },
            other => Self::Store(other),
        }
    }
}

/// Request model for creating a task with heuristic assistance.
///
/// Omitted fields are filled in by the heuristics: a missing category via
/// [`classify`], missing ratings via [`estimate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTaskRequest {
    pub title: String,
    pub description: String,
    pub category_id: Option<CategoryId>,
    /// Optional wire-format due date.
    pub due_date: Option<String>,
    pub importance: Option<u8>,
    pub urgency: Option<u8>,
}

impl NewTaskRequest {
    /// Creates a request with only a title; everything else is estimated.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Use-case facade over the planner store and heuristics.
pub struct PlannerService {
    store: PlannerStore,
}

impl PlannerService {
    /// Creates a service over the given store.
    pub fn new(store: PlannerStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &PlannerStore {
        &self.store
    }

    /// Direct store access for plain lifecycle operations.
    pub fn store_mut(&mut self) -> &mut PlannerStore {
        &mut self.store
    }

    /// Hands the store back, consuming the service.
    pub fn into_store(self) -> PlannerStore {
        self.store
    }

    /// Creates a task, filling missing fields from the heuristics.
    pub fn add_task(&mut self, request: NewTaskRequest) -> ServiceResult<Task> {
        let mut task = Task::new(request.title);
        task.description = request.description;
        task.due_date = request.due_date;

        match (request.importance, request.urgency) {
            (Some(importance), Some(urgency)) => {
                task.importance = importance;
                task.urgency = urgency;
            }
            (importance, urgency) => {
                let (estimated_importance, estimated_urgency) =
                    estimate(&task.title, &task.description);
                task.importance = importance.unwrap_or(estimated_importance);
                task.urgency = urgency.unwrap_or(estimated_urgency);
            }
        }

        task.category_id = match request.category_id {
            Some(category_id) => Some(category_id),
            None => classify(&task.title, self.store.categories(), self.store.tasks()),
        };

        self.store.add_task(task.clone())?;
        info!(
            "event=task_added module=service status=ok id={} importance={} urgency={}",
            task.id, task.importance, task.urgency
        );
        Ok(task)
    }

    /// Completes a task and awards completion points once.
    pub fn complete_task(&mut self, id: TaskId) -> ServiceResult<()> {
        let already_completed = self
            .store
            .get_task(id)
            .ok_or(ServiceError::TaskNotFound(id))?
            .completed;

        self.store.complete_task(id)?;
        if !already_completed {
            self.store.add_points(TASK_COMPLETION_POINTS);
            self.unlock_eligible_rewards();
            info!(
                "event=task_completed module=service status=ok id={id} points_awarded={TASK_COMPLETION_POINTS}"
            );
        }
        Ok(())
    }

    /// Records a habit check-in for an explicit date.
    ///
    /// # Contract
    /// - `Ok(true)`: check-in recorded, streaks updated, points awarded.
    /// - `Ok(false)`: duplicate date, habit untouched.
    pub fn check_in_habit(&mut self, id: HabitId, date: NaiveDate) -> ServiceResult<bool> {
        let habit = self
            .store
            .habit_mut(id)
            .ok_or(ServiceError::HabitNotFound(id))?;

        if !check_in(habit, date) {
            return Ok(false);
        }
        let current_streak = habit.current_streak;

        self.store.add_points(HABIT_CHECK_IN_POINTS);
        self.unlock_eligible_rewards();
        info!(
            "event=habit_check_in module=service status=ok id={id} streak={current_streak}"
        );
        Ok(true)
    }

    /// Records a habit check-in for today.
    pub fn check_in_habit_today(&mut self, id: HabitId) -> ServiceResult<bool> {
        self.check_in_habit(id, today())
    }

    /// Toggles one milestone and recomputes goal progress.
    ///
    /// Completing the final open milestone auto-completes the goal and
    /// awards goal points. Returns the updated goal.
    pub fn set_milestone_completed(
        &mut self,
        goal_id: GoalId,
        index: usize,
        completed: bool,
    ) -> ServiceResult<Goal> {
        let goal = self
            .store
            .goal_mut(goal_id)
            .ok_or(ServiceError::GoalNotFound(goal_id))?;

        let len = goal.milestones.len();
        if index >= len {
            return Err(ServiceError::MilestoneOutOfRange {
                goal: goal_id,
                index,
                len,
            });
        }

        goal.milestones[index].completed = completed;
        goal.recompute_progress();

        let newly_finished = goal.all_milestones_complete() && !goal.completed;
        if newly_finished {
            goal.complete(iso_timestamp_now());
        }
        let snapshot = goal.clone();

        if newly_finished {
            self.award_goal_points(goal_id);
        }
        Ok(snapshot)
    }

    /// Completes a goal directly and awards goal points once.
    pub fn complete_goal(&mut self, id: GoalId) -> ServiceResult<()> {
        let goal = self
            .store
            .goal_mut(id)
            .ok_or(ServiceError::GoalNotFound(id))?;
        if goal.completed {
            return Ok(());
        }
        goal.complete(iso_timestamp_now());
        self.award_goal_points(id);
        Ok(())
    }

    /// Suggests a working slot for a stored task against the stored profile
    /// and calendar.
    pub fn suggest_slot_for(&self, id: TaskId) -> ServiceResult<SlotSuggestion> {
        self.suggest_slot_for_at(id, Local::now().naive_local())
    }

    /// Slot suggestion with an explicit clock reading.
    pub fn suggest_slot_for_at(
        &self,
        id: TaskId,
        now: chrono::NaiveDateTime,
    ) -> ServiceResult<SlotSuggestion> {
        let task = self
            .store
            .get_task(id)
            .ok_or(ServiceError::TaskNotFound(id))?;
        Ok(suggest_slot_at(
            task,
            self.store.profile(),
            self.store.events(),
            now,
        ))
    }

    /// Returns up to `top_n` incomplete tasks by priority.
    pub fn next_tasks(&self, top_n: usize) -> Vec<&Task> {
        next_tasks(self.store.tasks(), top_n)
    }

    /// Redeems a reward, spending its point cost.
    pub fn redeem_reward(&mut self, id: RewardId) -> ServiceResult<()> {
        let point_cost = self
            .store
            .get_reward(id)
            .ok_or(ServiceError::RewardNotFound(id))?
            .point_cost;

        self.store.spend_points(point_cost)?;

        let redeemed_at = iso_timestamp_now();
        let unlocked = self.store.unlocked_rewards_mut();
        match unlocked.iter_mut().find(|entry| entry.reward_id == id) {
            Some(entry) => entry.redeemed_at = Some(redeemed_at),
            None => {
                let mut entry = UnlockedReward::new(id);
                entry.redeemed_at = Some(redeemed_at);
                unlocked.push(entry);
            }
        }
        info!("event=reward_redeemed module=service status=ok id={id} cost={point_cost}");
        Ok(())
    }

    fn award_goal_points(&mut self, id: GoalId) {
        self.store.add_points(GOAL_COMPLETION_POINTS);
        self.unlock_eligible_rewards();
        info!(
            "event=goal_completed module=service status=ok id={id} points_awarded={GOAL_COMPLETION_POINTS}"
        );
    }

    /// Unlocks every affordable reward that is not unlocked yet.
    fn unlock_eligible_rewards(&mut self) {
        let points = self.store.points();
        let eligible: Vec<RewardId> = self
            .store
            .rewards()
            .iter()
            .filter(|reward| reward.point_cost <= points)
            .map(|reward| reward.id)
            .filter(|id| {
                !self
                    .store
                    .unlocked_rewards()
                    .iter()
                    .any(|entry| entry.reward_id == *id)
            })
            .collect();

        for id in eligible {
            self.store
                .unlocked_rewards_mut()
                .push(UnlockedReward::new(id));
            info!("event=reward_unlocked module=service status=ok id={id}");
        }
    }
}
