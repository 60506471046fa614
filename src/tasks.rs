//! Task List Utilities
//!
//! Pure helpers for deriving new task lists and the rendered subsequence.
//! Every helper returns a fresh `Vec` and leaves its input untouched.

use crate::models::Task;

/// True when every task is completed (vacuously true for an empty list).
pub fn all_completed(tasks: &[Task]) -> bool {
    tasks.iter().all(|task| task.completed)
}

/// Copy of `tasks` with the completion of task `id` flipped.
/// Returns the new list and the task's new completion, or `None` if no task has that id.
pub fn with_toggled(tasks: &[Task], id: u32) -> Option<(Vec<Task>, bool)> {
    let mut new_completed = None;
    let next = tasks
        .iter()
        .map(|task| {
            if task.id == id && new_completed.is_none() {
                new_completed = Some(!task.completed);
                Task { completed: !task.completed, ..task.clone() }
            } else {
                task.clone()
            }
        })
        .collect();
    new_completed.map(|completed| (next, completed))
}

/// Copy of `tasks` with every task completed, plus the ids that changed (in list order).
pub fn with_all_completed(tasks: &[Task]) -> (Vec<Task>, Vec<u32>) {
    let mut changed = Vec::new();
    let next = tasks
        .iter()
        .map(|task| {
            if !task.completed {
                changed.push(task.id);
            }
            Task { completed: true, ..task.clone() }
        })
        .collect();
    (next, changed)
}

/// Tasks to render: titles containing `search` (case-insensitive),
/// incomplete before completed, fetch order kept within each group.
pub fn visible_tasks(tasks: &[Task], search: &str) -> Vec<Task> {
    let needle = search.to_lowercase();
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| task.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    // sort_by_key is stable, false < true
    visible.sort_by_key(|task| task.completed);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_task(id: u32, title: &str, completed: bool) -> Task {
        Task {
            id,
            user_id: 1,
            title: title.to_string(),
            completed,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_all_completed() {
        assert!(all_completed(&[]));
        assert!(all_completed(&[make_task(1, "a", true), make_task(2, "b", true)]));
        assert!(!all_completed(&[make_task(1, "a", true), make_task(2, "b", false)]));
    }

    #[test]
    fn test_with_toggled_flips_only_target() {
        let tasks = vec![make_task(7, "A", false), make_task(8, "B", true)];

        let (next, completed) = with_toggled(&tasks, 7).unwrap();

        assert!(completed);
        assert_eq!(next, vec![make_task(7, "A", true), make_task(8, "B", true)]);
        // input untouched
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_with_toggled_unknown_id() {
        let tasks = vec![make_task(1, "A", false)];
        assert!(with_toggled(&tasks, 99).is_none());
    }

    #[test]
    fn test_with_all_completed_reports_changed_ids() {
        let tasks = vec![
            make_task(1, "a", false),
            make_task(2, "b", true),
            make_task(3, "c", false),
        ];

        let (next, changed) = with_all_completed(&tasks);

        assert!(all_completed(&next));
        assert_eq!(changed, vec![1, 3]);
        assert_eq!(next[1], tasks[1]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let tasks = vec![
            make_task(1, "Buy milk", false),
            make_task(2, "Walk dog", false),
            make_task(3, "Mileage report", false),
        ];

        let visible = visible_tasks(&tasks, "MIL");
        let titles: Vec<&str> = visible.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Buy milk", "Mileage report"]);

        let visible = visible_tasks(&tasks, "mile");
        assert_eq!(ids(&visible), vec![3]);
    }

    #[test]
    fn test_incomplete_first_stable() {
        let tasks = vec![
            make_task(1, "one", true),
            make_task(2, "two", false),
            make_task(3, "three", false),
        ];

        assert_eq!(ids(&visible_tasks(&tasks, "")), vec![2, 3, 1]);
    }

    #[test]
    fn test_order_keeps_fetch_order_not_id() {
        let tasks = vec![
            make_task(9, "z", true),
            make_task(5, "y", false),
            make_task(4, "x", true),
            make_task(1, "w", false),
        ];

        assert_eq!(ids(&visible_tasks(&tasks, "")), vec![5, 1, 9, 4]);
    }

    #[test]
    fn test_search_without_match() {
        let tasks = vec![make_task(1, "Buy milk", false)];
        assert!(visible_tasks(&tasks, "zebra").is_empty());
    }
}
