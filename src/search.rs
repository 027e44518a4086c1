//! Case-insensitive title search.

use crate::task::Task;

/// Returns the tasks whose title contains `term`, ignoring case, in input order.
///
/// An empty term matches every task.
pub fn filter_tasks<'a>(tasks: &'a [Task], term: &str) -> Vec<&'a Task> {
    if term.is_empty() {
        return tasks.iter().collect();
    }

    let needle = term.to_lowercase();
    tasks
        .iter()
        .filter(|task| task.title().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;
    use chrono::Utc;

    fn tasks(titles: &[&str]) -> Vec<Task> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| Task::new(TaskId::new(i.to_string()), *title, Utc::now()))
            .collect()
    }

    fn matched<'a>(found: &[&'a Task]) -> Vec<&'a str> {
        found.iter().map(|t| t.title()).collect()
    }

    #[test]
    fn test_empty_term_is_identity() {
        let all = tasks(&["Buy milk", "Call mom", "Write report"]);
        let found = filter_tasks(&all, "");
        assert_eq!(found.len(), all.len());
        assert!(found.iter().zip(&all).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_substring_match_keeps_order() {
        let all = tasks(&["Buy milk", "Milkshake", "Call mom", "oat MILK"]);
        assert_eq!(
            matched(&filter_tasks(&all, "milk")),
            vec!["Buy milk", "Milkshake", "oat MILK"]
        );
    }

    #[test]
    fn test_case_insensitive() {
        let all = tasks(&["Task one", "another TASK", "nothing"]);
        assert_eq!(
            matched(&filter_tasks(&all, "TASK")),
            matched(&filter_tasks(&all, "task"))
        );
        assert_eq!(filter_tasks(&all, "tAsK").len(), 2);
    }

    #[test]
    fn test_no_match() {
        let all = tasks(&["Buy milk"]);
        assert!(filter_tasks(&all, "bread").is_empty());
    }

    #[test]
    fn test_whitespace_is_part_of_the_term() {
        let all = tasks(&["Buy milk", "Buymilk"]);
        assert_eq!(matched(&filter_tasks(&all, "y m")), vec!["Buy milk"]);
    }
}
