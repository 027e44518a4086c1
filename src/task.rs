//! Task model and id generation.
//!
//! A [`Task`] is one to-do entry. Its id and creation instant are fixed when it is
//! created; only the title and completion flag change afterwards, and only through
//! [`TaskStore`](crate::store::TaskStore).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a task within its collection.
///
/// Newly created ids are decimal millisecond timestamps, but any string read
/// back from storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it is a decimal timestamp.
    fn as_millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single to-do entry.
///
/// Serialized with camelCase field names: `{id, title, completed, createdAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates an active task. The caller is responsible for trimming the title.
    pub fn new(id: TaskId, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            created_at,
        }
    }

    /// Builder-style setter for the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Flips the completion flag and returns the new value.
    pub(crate) fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

/// Issues strictly increasing millisecond-timestamp ids.
///
/// Two tasks created within the same millisecond (or after the wall clock steps
/// backwards) still get distinct ids: the generator never issues a value at or
/// below the last one it handed out.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last_issued: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator that will never reissue a numeric id already present in `tasks`.
    pub fn seeded_from<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let last_issued = tasks
            .into_iter()
            .filter_map(|task| task.id().as_millis())
            .max()
            .unwrap_or(0);
        Self { last_issued }
    }

    /// Returns the id for a task created at `now`, or `None` once the numeric
    /// range is exhausted.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> Option<TaskId> {
        let floor = self.last_issued.checked_add(1)?;
        let candidate = now.timestamp_millis().max(floor);
        self.last_issued = candidate;
        Some(TaskId(candidate.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_ids_follow_the_clock() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(at(1_700_000_000_000)).unwrap().as_str(), "1700000000000");
        assert_eq!(ids.next_id(at(1_700_000_000_500)).unwrap().as_str(), "1700000000500");
    }

    #[test]
    fn test_same_millisecond_yields_distinct_ids() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id(at(1_000)).unwrap();
        let second = ids.next_id(at(1_000)).unwrap();
        let third = ids.next_id(at(999)).unwrap();
        assert_eq!(first.as_str(), "1000");
        assert_eq!(second.as_str(), "1001");
        assert_eq!(third.as_str(), "1002");
    }

    #[test]
    fn test_seeding_skips_existing_ids() {
        let tasks = vec![
            Task::new(TaskId::new("5000"), "a", at(5_000)),
            Task::new(TaskId::new("not-a-number"), "b", at(1)),
            Task::new(TaskId::new("9000"), "c", at(9_000)),
        ];
        let mut ids = IdGenerator::seeded_from(&tasks);
        assert_eq!(ids.next_id(at(100)).unwrap().as_str(), "9001");
    }

    #[test]
    fn test_exhausted_range_yields_none() {
        let tasks = vec![Task::new(TaskId::new(i64::MAX.to_string()), "last", at(1))];
        let mut ids = IdGenerator::seeded_from(&tasks);
        assert_eq!(ids.next_id(at(1_000)), None);
        assert_eq!(ids.next_id(at(1_000)), None);
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task::new(TaskId::new("42"), "Buy milk", at(1_700_000_000_123));
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["completed"], false);
        assert_eq!(json["createdAt"], "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn test_missing_completed_defaults_to_false() {
        let task: Task = serde_json::from_str(
            r#"{"id":"1","title":"x","createdAt":"2024-01-01T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert!(!task.is_completed());
    }
}
