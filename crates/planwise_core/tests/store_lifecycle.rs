use planwise_core::{
    CalendarEvent, Category, Habit, HabitFrequency, PlannerStore, StoreError, Task,
};
use uuid::Uuid;

#[test]
fn add_and_get_task_roundtrip() {
    let mut store = PlannerStore::new();

    let task = Task::new("renew passport");
    let id = store.add_task(task.clone()).unwrap();

    let loaded = store.get_task(id).unwrap();
    assert_eq!(loaded, &task);
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn add_rejects_invalid_task() {
    let mut store = PlannerStore::new();

    let mut task = Task::new("broken rating");
    task.urgency = 9;

    let err = store.add_task(task).unwrap_err();
    assert!(matches!(err, StoreError::Task(_)));
    assert!(store.tasks().is_empty());
}

#[test]
fn update_replaces_existing_task() {
    let mut store = PlannerStore::new();

    let mut task = Task::new("draft blog post");
    store.add_task(task.clone()).unwrap();

    task.title = "publish blog post".to_string();
    task.importance = 5;
    store.update_task(task.clone()).unwrap();

    let loaded = store.get_task(task.id).unwrap();
    assert_eq!(loaded.title, "publish blog post");
    assert_eq!(loaded.importance, 5);
}

#[test]
fn update_unknown_task_reports_not_found() {
    let mut store = PlannerStore::new();

    let task = Task::new("never added");
    let err = store.update_task(task.clone()).unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound { entity: "task", id } if id == task.id
    ));
}

#[test]
fn complete_task_stamps_completion() {
    let mut store = PlannerStore::new();

    let id = store.add_task(Task::new("water plants")).unwrap();
    store.complete_task(id).unwrap();

    let loaded = store.get_task(id).unwrap();
    assert!(loaded.completed);
    assert!(loaded.completed_at.is_some());
}

#[test]
fn delete_task_removes_record() {
    let mut store = PlannerStore::new();

    let id = store.add_task(Task::new("one-off errand")).unwrap();
    store.delete_task(id).unwrap();

    assert!(store.get_task(id).is_none());
    assert!(matches!(
        store.delete_task(id),
        Err(StoreError::NotFound { entity: "task", .. })
    ));
}

#[test]
fn category_deletion_is_guarded_while_referenced() {
    let mut store = PlannerStore::new();

    let category_id = store.add_category(Category::new("Health")).unwrap();

    let mut habit = Habit::new("morning run", HabitFrequency::Daily);
    habit.category_id = Some(category_id);
    let habit_id = store.add_habit(habit).unwrap();

    let err = store.delete_category(category_id).unwrap_err();
    assert!(matches!(err, StoreError::CategoryInUse(id) if id == category_id));

    store.delete_habit(habit_id).unwrap();
    store.delete_category(category_id).unwrap();
    assert!(store.get_category(category_id).is_none());
}

#[test]
fn delete_unknown_category_reports_not_found() {
    let mut store = PlannerStore::new();
    assert!(matches!(
        store.delete_category(Uuid::new_v4()),
        Err(StoreError::NotFound {
            entity: "category",
            ..
        })
    ));
}

#[test]
fn add_event_rejects_reversed_window() {
    let mut store = PlannerStore::new();

    let event = CalendarEvent::new("retro", "2026-03-02T11:00:00", "2026-03-02T10:00:00");
    let err = store.add_event(event).unwrap_err();
    assert!(matches!(err, StoreError::Event(_)));
    assert!(store.events().is_empty());
}

#[test]
fn update_event_replaces_window() {
    let mut store = PlannerStore::new();

    let mut event = CalendarEvent::new("1:1", "2026-03-02T14:00:00", "2026-03-02T14:30:00");
    store.add_event(event.clone()).unwrap();

    event.end_time = "2026-03-02T15:00:00".to_string();
    store.update_event(event.clone()).unwrap();

    assert_eq!(
        store.get_event(event.id).unwrap().end_time,
        "2026-03-02T15:00:00"
    );
}

#[test]
fn goal_lifecycle_roundtrip() {
    use planwise_core::Goal;

    let mut store = PlannerStore::new();

    let mut goal = Goal::new("learn piano");
    let id = store.add_goal(goal.clone()).unwrap();

    goal.description = "thirty minutes a day".to_string();
    store.update_goal(goal).unwrap();
    assert_eq!(
        store.get_goal(id).unwrap().description,
        "thirty minutes a day"
    );

    store.delete_goal(id).unwrap();
    assert!(store.get_goal(id).is_none());
}

#[test]
fn update_habit_replaces_record() {
    let mut store = PlannerStore::new();

    let mut habit = Habit::new("journal", HabitFrequency::Daily);
    store.add_habit(habit.clone()).unwrap();

    habit.frequency = HabitFrequency::Weekly;
    store.update_habit(habit.clone()).unwrap();

    assert_eq!(
        store.get_habit(habit.id).unwrap().frequency,
        HabitFrequency::Weekly
    );
}

#[test]
fn blank_category_name_is_rejected() {
    let mut store = PlannerStore::new();
    let err = store.add_category(Category::new("  ")).unwrap_err();
    assert!(matches!(err, StoreError::Category(_)));
}

#[test]
fn store_snapshot_roundtrips_through_json() {
    let mut store = PlannerStore::new();
    store.add_category(Category::new("Work")).unwrap();
    store.add_task(Task::new("prepare slides")).unwrap();

    let json = serde_json::to_string(&store).unwrap();
    let restored: PlannerStore = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.tasks().len(), 1);
    assert_eq!(restored.categories().len(), 1);
    assert_eq!(restored.points(), store.points());
}
