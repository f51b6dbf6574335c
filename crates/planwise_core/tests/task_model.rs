use planwise_core::{PriorityBand, Task};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("write weekly report");

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "write weekly report");
    assert_eq!(task.description, "");
    assert_eq!(task.category_id, None);
    assert_eq!(task.due_date, None);
    assert!(!task.completed);
    assert_eq!(task.completed_at, None);
    assert_eq!(task.importance, 3);
    assert_eq!(task.urgency, 3);
    assert!(!task.created_at.is_empty());
}

#[test]
fn complete_sets_flag_and_timestamp() {
    let mut task = Task::new("inbox zero");
    task.complete("2026-05-01T10:00:00");

    assert!(task.completed);
    assert_eq!(task.completed_at.as_deref(), Some("2026-05-01T10:00:00"));
}

#[test]
fn priority_score_and_band_follow_ratings() {
    let mut task = Task::new("quarterly planning");
    task.importance = 5;
    task.urgency = 4;

    assert_eq!(task.priority_score(), 20);
    assert_eq!(task.priority_band(), PriorityBand::Critical);

    task.urgency = 1;
    assert_eq!(task.priority_score(), 5);
    assert_eq!(task.priority_band(), PriorityBand::Low);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(task_id, "book dentist appointment");
    task.due_date = Some("2026-06-15".to_string());
    task.importance = 4;
    task.urgency = 2;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["title"], "book dentist appointment");
    assert_eq!(json["category_id"], serde_json::Value::Null);
    assert_eq!(json["due_date"], "2026-06-15");
    assert_eq!(json["completed"], false);
    assert_eq!(json["importance"], 4);
    assert_eq!(json["urgency"], 2);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
