//! In-memory planner data store.
//!
//! # Responsibility
//! - Own the planner collections and their explicit lifecycle operations.
//! - Enforce record validation before every write and semantic errors for
//!   unknown ids.
//!
//! # Invariants
//! - Write paths validate records before mutating any collection.
//! - Category deletion is refused while any record references the category.
//! - The whole store serializes, so an external collaborator can snapshot
//!   and restore it without this crate owning a file format.

use crate::dates::iso_timestamp_now;
use crate::model::category::{Category, CategoryId, CategoryValidationError};
use crate::model::event::{CalendarEvent, EventId, EventValidationError};
use crate::model::goal::{Goal, GoalId, GoalValidationError};
use crate::model::habit::{Habit, HabitId, HabitValidationError};
use crate::model::profile::UserProfile;
use crate::model::reward::{Reward, RewardId, RewardValidationError, UnlockedReward};
use crate::model::task::{Task, TaskId, TaskValidationError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for lifecycle operations.
#[derive(Debug)]
pub enum StoreError {
    Task(TaskValidationError),
    Category(CategoryValidationError),
    Goal(GoalValidationError),
    Habit(HabitValidationError),
    Event(EventValidationError),
    Reward(RewardValidationError),
    /// No record of the named entity carries this id.
    NotFound { entity: &'static str, id: Uuid },
    /// Category is still referenced by at least one record.
    CategoryInUse(CategoryId),
    /// Point balance cannot cover the requested spend.
    InsufficientPoints { required: u32, available: u32 },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Task(err) => write!(f, "{err}"),
            Self::Category(err) => write!(f, "{err}"),
            Self::Goal(err) => write!(f, "{err}"),
            Self::Habit(err) => write!(f, "{err}"),
            Self::Event(err) => write!(f, "{err}"),
            Self::Reward(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::CategoryInUse(id) => write!(f, "category still in use: {id}"),
            Self::InsufficientPoints {
                required,
                available,
            } => write!(f, "need {required} points, only {available} available"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Task(err) => Some(err),
            Self::Category(err) => Some(err),
            Self::Goal(err) => Some(err),
            Self::Habit(err) => Some(err),
            Self::Event(err) => Some(err),
            Self::Reward(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Task(value)
    }
}

impl From<CategoryValidationError> for StoreError {
    fn from(value: CategoryValidationError) -> Self {
        Self::Category(value)
    }
}

impl From<GoalValidationError> for StoreError {
    fn from(value: GoalValidationError) -> Self {
        Self::Goal(value)
    }
}

impl From<HabitValidationError> for StoreError {
    fn from(value: HabitValidationError) -> Self {
        Self::Habit(value)
    }
}

impl From<EventValidationError> for StoreError {
    fn from(value: EventValidationError) -> Self {
        Self::Event(value)
    }
}

impl From<RewardValidationError> for StoreError {
    fn from(value: RewardValidationError) -> Self {
        Self::Reward(value)
    }
}

/// Explicit data-access object over the planner collections.
///
/// Single-threaded by design: the caller owns the store exclusively for the
/// duration of each call.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PlannerStore {
    profile: Option<UserProfile>,
    categories: Vec<Category>,
    tasks: Vec<Task>,
    goals: Vec<Goal>,
    habits: Vec<Habit>,
    events: Vec<CalendarEvent>,
    rewards: Vec<Reward>,
    unlocked_rewards: Vec<UnlockedReward>,
    points: u32,
}

impl PlannerStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- profile ----

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    // ---- categories ----

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Validates and inserts a category.
    pub fn add_category(&mut self, category: Category) -> StoreResult<CategoryId> {
        category.validate()?;
        let id = category.id;
        self.categories.push(category);
        Ok(id)
    }

    /// Replaces an existing category by id.
    pub fn update_category(&mut self, category: Category) -> StoreResult<()> {
        category.validate()?;
        let slot = self
            .categories
            .iter_mut()
            .find(|existing| existing.id == category.id)
            .ok_or(StoreError::NotFound {
                entity: "category",
                id: category.id,
            })?;
        *slot = category;
        Ok(())
    }

    /// Deletes a category unless any record still references it.
    pub fn delete_category(&mut self, id: CategoryId) -> StoreResult<()> {
        if self.get_category(id).is_none() {
            return Err(StoreError::NotFound {
                entity: "category",
                id,
            });
        }
        if self.category_in_use(id) {
            return Err(StoreError::CategoryInUse(id));
        }
        self.categories.retain(|category| category.id != id);
        Ok(())
    }

    fn category_in_use(&self, id: CategoryId) -> bool {
        self.tasks.iter().any(|task| task.category_id == Some(id))
            || self.goals.iter().any(|goal| goal.category_id == Some(id))
            || self
                .habits
                .iter()
                .any(|habit| habit.category_id == Some(id))
            || self
                .events
                .iter()
                .any(|event| event.category_id == Some(id))
    }

    // ---- tasks ----

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Validates and inserts a task.
    pub fn add_task(&mut self, task: Task) -> StoreResult<TaskId> {
        task.validate()?;
        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    /// Replaces an existing task by id.
    pub fn update_task(&mut self, task: Task) -> StoreResult<()> {
        task.validate()?;
        let slot = self
            .tasks
            .iter_mut()
            .find(|existing| existing.id == task.id)
            .ok_or(StoreError::NotFound {
                entity: "task",
                id: task.id,
            })?;
        *slot = task;
        Ok(())
    }

    /// Marks a task completed with a fresh timestamp.
    pub fn complete_task(&mut self, id: TaskId) -> StoreResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound { entity: "task", id })?;
        task.complete(iso_timestamp_now());
        Ok(())
    }

    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<()> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Err(StoreError::NotFound { entity: "task", id });
        }
        Ok(())
    }

    // ---- goals ----

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get_goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub(crate) fn goal_mut(&mut self, id: GoalId) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|goal| goal.id == id)
    }

    /// Validates and inserts a goal.
    pub fn add_goal(&mut self, goal: Goal) -> StoreResult<GoalId> {
        goal.validate()?;
        let id = goal.id;
        self.goals.push(goal);
        Ok(id)
    }

    /// Replaces an existing goal by id.
    pub fn update_goal(&mut self, goal: Goal) -> StoreResult<()> {
        goal.validate()?;
        let slot = self
            .goals
            .iter_mut()
            .find(|existing| existing.id == goal.id)
            .ok_or(StoreError::NotFound {
                entity: "goal",
                id: goal.id,
            })?;
        *slot = goal;
        Ok(())
    }

    pub fn delete_goal(&mut self, id: GoalId) -> StoreResult<()> {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != id);
        if self.goals.len() == before {
            return Err(StoreError::NotFound { entity: "goal", id });
        }
        Ok(())
    }

    // ---- habits ----

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get_habit(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    pub(crate) fn habit_mut(&mut self, id: HabitId) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|habit| habit.id == id)
    }

    /// Validates and inserts a habit.
    pub fn add_habit(&mut self, habit: Habit) -> StoreResult<HabitId> {
        habit.validate()?;
        let id = habit.id;
        self.habits.push(habit);
        Ok(id)
    }

    /// Replaces an existing habit by id.
    pub fn update_habit(&mut self, habit: Habit) -> StoreResult<()> {
        habit.validate()?;
        let slot = self
            .habits
            .iter_mut()
            .find(|existing| existing.id == habit.id)
            .ok_or(StoreError::NotFound {
                entity: "habit",
                id: habit.id,
            })?;
        *slot = habit;
        Ok(())
    }

    pub fn delete_habit(&mut self, id: HabitId) -> StoreResult<()> {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        if self.habits.len() == before {
            return Err(StoreError::NotFound { entity: "habit", id });
        }
        Ok(())
    }

    // ---- calendar events ----

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn get_event(&self, id: EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Validates and inserts an event.
    pub fn add_event(&mut self, event: CalendarEvent) -> StoreResult<EventId> {
        event.validate()?;
        let id = event.id;
        self.events.push(event);
        Ok(id)
    }

    /// Replaces an existing event by id.
    pub fn update_event(&mut self, event: CalendarEvent) -> StoreResult<()> {
        event.validate()?;
        let slot = self
            .events
            .iter_mut()
            .find(|existing| existing.id == event.id)
            .ok_or(StoreError::NotFound {
                entity: "event",
                id: event.id,
            })?;
        *slot = event;
        Ok(())
    }

    pub fn delete_event(&mut self, id: EventId) -> StoreResult<()> {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        if self.events.len() == before {
            return Err(StoreError::NotFound { entity: "event", id });
        }
        Ok(())
    }

    // ---- rewards and points ----

    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    pub fn get_reward(&self, id: RewardId) -> Option<&Reward> {
        self.rewards.iter().find(|reward| reward.id == id)
    }

    /// Validates and inserts a reward.
    pub fn add_reward(&mut self, reward: Reward) -> StoreResult<RewardId> {
        reward.validate()?;
        let id = reward.id;
        self.rewards.push(reward);
        Ok(id)
    }

    pub fn unlocked_rewards(&self) -> &[UnlockedReward] {
        &self.unlocked_rewards
    }

    pub(crate) fn unlocked_rewards_mut(&mut self) -> &mut Vec<UnlockedReward> {
        &mut self.unlocked_rewards
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub(crate) fn add_points(&mut self, amount: u32) {
        self.points = self.points.saturating_add(amount);
    }

    pub(crate) fn spend_points(&mut self, amount: u32) -> StoreResult<()> {
        if self.points < amount {
            return Err(StoreError::InsufficientPoints {
                required: amount,
                available: self.points,
            });
        }
        self.points -= amount;
        Ok(())
    }
}
