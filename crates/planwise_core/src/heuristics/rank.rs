//! Priority ranking for the "what's next" focus list.
//!
//! # Invariants
//! - Completed tasks never appear in the ranking.
//! - Ordering is importance × urgency descending; equal scores keep the
//!   caller's slice order (stable sort).

use crate::model::task::Task;

/// Focus-list size used by callers that do not specify one.
pub const DEFAULT_TOP_N: usize = 3;

/// Returns up to `top_n` incomplete tasks, highest priority score first.
pub fn next_tasks(tasks: &[Task], top_n: usize) -> Vec<&Task> {
    let mut ranked: Vec<&Task> = tasks.iter().filter(|task| !task.completed).collect();
    ranked.sort_by(|a, b| b.priority_score().cmp(&a.priority_score()));
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::next_tasks;
    use crate::model::task::Task;

    fn task(title: &str, importance: u8, urgency: u8, completed: bool) -> Task {
        let mut task = Task::new(title);
        task.importance = importance;
        task.urgency = urgency;
        task.completed = completed;
        task
    }

    #[test]
    fn completed_tasks_are_excluded() {
        let tasks = vec![task("done", 5, 5, true), task("open", 1, 1, false)];
        let ranked = next_tasks(&tasks, 3);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].title, "open");
    }

    #[test]
    fn ties_keep_insertion_order() {
        let tasks = vec![
            task("first", 2, 3, false),
            task("second", 3, 2, false),
            task("third", 1, 5, false),
        ];
        let ranked = next_tasks(&tasks, 3);
        let titles: Vec<&str> = ranked.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }
}
