//! Canonical in-memory task collection.
//!
//! [`TaskStore`] is the only owner of the task list during a session. Every
//! mutating operation reports whether it changed anything so the caller can
//! persist and re-render exactly when a mutation happened.

use crate::task::{IdGenerator, Task, TaskId};
use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, warn};

/// Ordered task collection, most recently created first.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from a previously persisted collection, keeping its order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let ids = IdGenerator::seeded_from(&tasks);
        Self { tasks, ids }
    }

    // ===== Queries =====

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find_by_id(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Returns `(active, completed)` counts over the whole collection.
    pub fn counts(&self) -> (usize, usize) {
        let completed = self.tasks.iter().filter(|task| task.is_completed()).count();
        (self.tasks.len() - completed, completed)
    }

    // ===== Mutations =====

    /// Creates a task stamped with the current time.
    ///
    /// Returns `None` without touching the collection if the trimmed title is empty.
    pub fn create(&mut self, title: &str) -> Option<TaskId> {
        self.create_at(title, Utc::now().trunc_subsecs(3))
    }

    /// Creates a task stamped with `now` and prepends it.
    pub fn create_at(&mut self, title: &str, now: DateTime<Utc>) -> Option<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let id = self.fresh_id(now);
        debug!(task_id = %id, "creating task");
        self.tasks.insert(0, Task::new(id.clone(), title, now));
        Some(id)
    }

    /// Replaces the title of an existing task in place.
    ///
    /// Returns `false` for a blank title or an unknown id.
    pub fn update(&mut self, id: &TaskId, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }

        match self.find_mut(id) {
            Some(task) => {
                debug!(task_id = %id, "updating task title");
                task.set_title(title.to_string());
                true
            }
            None => false,
        }
    }

    /// Removes the task with `id`, returning it if it was present.
    pub fn remove(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id() == id)?;
        debug!(task_id = %id, "removing task");
        Some(self.tasks.remove(index))
    }

    /// Flips the completion flag, returning the new value if the task exists.
    pub fn toggle_completion(&mut self, id: &TaskId) -> Option<bool> {
        let completed = self.find_mut(id)?.toggle_completed();
        debug!(task_id = %id, completed, "toggled task completion");
        Some(completed)
    }

    fn find_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Picks an id no task holds yet.
    ///
    /// Numeric ids are tried at most once per stored task, since each issued
    /// value is larger than the last. Past the end of the numeric range, ids
    /// take the form `<millis>-<n>`.
    fn fresh_id(&mut self, now: DateTime<Utc>) -> TaskId {
        for _ in 0..=self.tasks.len() {
            match self.ids.next_id(now) {
                Some(id) if !self.contains(&id) => return id,
                Some(_) => {}
                None => break,
            }
        }

        warn!("numeric task ids exhausted, using a suffixed id");
        let millis = now.timestamp_millis();
        let mut suffix = 0usize;
        loop {
            let id = TaskId::new(format!("{millis}-{suffix}"));
            if !self.contains(&id) {
                return id;
            }
            suffix += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn titles(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.title()).collect()
    }

    #[test]
    fn test_blank_titles_are_rejected() {
        let mut store = TaskStore::new();
        for blank in ["", "   ", "\t\n "] {
            assert_eq!(store.create(blank), None);
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_trims_and_prepends() {
        let mut store = TaskStore::new();
        store.create_at("A", at(1_000));
        let id = store.create_at("  B  ", at(2_000)).unwrap();

        assert_eq!(titles(&store), vec!["B", "A"]);
        let first = &store.tasks()[0];
        assert_eq!(first.id(), &id);
        assert!(!first.is_completed());
        assert_eq!(first.created_at(), at(2_000));
    }

    #[test]
    fn test_ids_unique_within_same_instant() {
        let mut store = TaskStore::new();
        let ids: HashSet<TaskId> = (0..50)
            .map(|i| store.create_at(&format!("task {i}"), at(1_000)).unwrap())
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_ids_do_not_collide_with_loaded_tasks() {
        let loaded = vec![Task::new(TaskId::new("5000"), "old", at(5_000))];
        let mut store = TaskStore::from_tasks(loaded);
        let id = store.create_at("new", at(5_000)).unwrap();
        assert_ne!(id.as_str(), "5000");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_after_largest_numeric_id() {
        let loaded = vec![
            Task::new(TaskId::new(i64::MAX.to_string()), "old", at(1)),
            Task::new(TaskId::new("1-0"), "taken", at(1)),
        ];
        let mut store = TaskStore::from_tasks(loaded);

        let first = store.create_at("new", at(1)).unwrap();
        let second = store.create_at("newer", at(1)).unwrap();

        assert_eq!(first.as_str(), "1-1");
        assert_eq!(second.as_str(), "1-2");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_created_at_has_millisecond_precision() {
        let mut store = TaskStore::new();
        store.create("A").unwrap();
        let created = store.tasks()[0].created_at();
        assert_eq!(created.timestamp_subsec_nanos() % 1_000_000, 0);
        assert_eq!(store.tasks()[0].id().as_str(), created.timestamp_millis().to_string());
    }

    #[test]
    fn test_update_preserves_position() {
        let mut store = TaskStore::new();
        let a = store.create_at("A", at(1)).unwrap();
        store.create_at("B", at(2)).unwrap();
        store.create_at("C", at(3)).unwrap();

        assert!(store.update(&a, " A2 "));
        assert_eq!(titles(&store), vec!["C", "B", "A2"]);
    }

    #[test]
    fn test_update_blank_or_missing_is_noop() {
        let mut store = TaskStore::new();
        let a = store.create_at("A", at(1)).unwrap();

        assert!(!store.update(&a, "  "));
        assert!(!store.update(&TaskId::new("missing"), "B"));
        assert_eq!(titles(&store), vec!["A"]);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut store = TaskStore::new();
        let id = store.create_at("A", at(1)).unwrap();

        assert_eq!(store.toggle_completion(&id), Some(true));
        assert_eq!(store.toggle_completion(&id), Some(false));
        assert!(!store.find_by_id(&id).unwrap().is_completed());
        assert_eq!(store.toggle_completion(&TaskId::new("missing")), None);
    }

    #[test]
    fn test_remove() {
        let mut store = TaskStore::new();
        let a = store.create_at("A", at(1)).unwrap();
        let b = store.create_at("B", at(2)).unwrap();

        assert_eq!(store.remove(&a).map(|t| t.title().to_string()), Some("A".to_string()));
        assert!(store.remove(&a).is_none());
        assert!(store.contains(&b));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_counts() {
        let mut store = TaskStore::new();
        let a = store.create_at("A", at(1)).unwrap();
        store.create_at("B", at(2)).unwrap();
        store.create_at("C", at(3)).unwrap();
        store.toggle_completion(&a);
        assert_eq!(store.counts(), (2, 1));
    }
}
