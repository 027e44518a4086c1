//! Persistence of the task collection and theme preference.
//!
//! State lives in a string key/value store behind the [`eframe::Storage`]
//! trait. Two keys are used:
//! - `tasks`: JSON array of `{id, title, completed, createdAt}` records, in collection order
//! - `theme`: the raw string `light` or `dark`
//!
//! Loading never fails: absent or malformed values fall back to an empty list
//! and the light theme.

use crate::error::PersistenceError;
use crate::task::{Task, TaskId};
use crate::theme::ThemeName;
use anyhow::Context;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub const TASKS_KEY: &str = "tasks";
pub const THEME_KEY: &str = "theme";

const APP_DIR: &str = "rtodo";
const STORAGE_FILE: &str = "storage.json";

/// Reads and writes application state through an [`eframe::Storage`].
pub struct PersistenceAdapter;

impl PersistenceAdapter {
    /// Loads the task collection, falling back to an empty list.
    pub fn load_tasks(storage: Option<&dyn eframe::Storage>) -> Vec<Task> {
        let Some(storage) = storage else {
            return Vec::new();
        };

        match Self::try_load_tasks(storage) {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(%err, "discarding persisted tasks");
                Vec::new()
            }
        }
    }

    /// Loads and validates the task collection.
    ///
    /// A missing key is an empty list; a value that is not a JSON array is an
    /// error. Records that do not decode, or that have a blank title or a
    /// repeated id, are dropped one by one.
    pub fn try_load_tasks(storage: &dyn eframe::Storage) -> Result<Vec<Task>, PersistenceError> {
        let Some(json) = storage.get_string(TASKS_KEY) else {
            return Ok(Vec::new());
        };

        let records: Vec<serde_json::Value> =
            serde_json::from_str(&json).map_err(|source| PersistenceError::MalformedValue {
                key: TASKS_KEY.to_string(),
                source,
            })?;

        Ok(validate_records(decode_records(records)))
    }

    /// Writes the whole collection and flushes the store.
    pub fn save_tasks(storage: &mut dyn eframe::Storage, tasks: &[Task]) {
        match serde_json::to_string(tasks) {
            Ok(json) => {
                storage.set_string(TASKS_KEY, json);
                storage.flush();
            }
            Err(err) => error!(%err, "failed to serialize tasks"),
        }
    }

    /// Loads the theme preference, defaulting to light.
    pub fn load_theme(storage: Option<&dyn eframe::Storage>) -> ThemeName {
        let Some(value) = storage.and_then(|s| s.get_string(THEME_KEY)) else {
            return ThemeName::default();
        };

        value.parse().unwrap_or_else(|err| {
            warn!(%err, "ignoring persisted theme");
            ThemeName::default()
        })
    }

    pub fn save_theme(storage: &mut dyn eframe::Storage, theme: ThemeName) {
        storage.set_string(THEME_KEY, theme.as_str().to_string());
        storage.flush();
    }
}

fn decode_records(records: Vec<serde_json::Value>) -> Vec<Task> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(task) => Some(task),
            Err(err) => {
                warn!(index, %err, "dropping undecodable persisted task");
                None
            }
        })
        .collect()
}

fn validate_records(records: Vec<Task>) -> Vec<Task> {
    let mut seen: HashSet<TaskId> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|task| {
            if task.title().trim().is_empty() {
                warn!(task_id = %task.id(), "dropping persisted task with blank title");
                return false;
            }
            if !seen.insert(task.id().clone()) {
                warn!(task_id = %task.id(), "dropping persisted task with duplicate id");
                return false;
            }
            true
        })
        .collect()
}

/// In-memory key/value store, used when no durable storage is available and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    data: HashMap<String, String>,
    flushes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times [`eframe::Storage::flush`] has been called.
    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

/// Key/value store backed by a single JSON object file.
///
/// Values are held in memory; `flush` rewrites the file through a temporary
/// sibling and a rename, so the file on disk is always a complete snapshot.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    dirty: bool,
}

impl JsonFileStorage {
    /// Opens the store at `path`, creating its parent directory.
    ///
    /// A missing file is an empty store. A file that is not a JSON object of
    /// strings is ignored with a warning and replaced on the next flush.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create storage directory {}", parent.display()))?;
        }

        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "storage file is malformed, starting empty");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read storage file {}", path.display()));
            }
        };

        info!(path = %path.display(), keys = entries.len(), "opened storage");
        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    /// `<data dir>/rtodo/storage.json`, or `./storage.json` if the platform has no data dir.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(STORAGE_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes all entries to disk.
    pub fn write_to_disk(&self) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        let tmp_path = self.path.with_extension("json.tmp");

        fs::write(&tmp_path, json).map_err(|source| PersistenceError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl eframe::Storage for JsonFileStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        if self.entries.get(key) != Some(&value) {
            self.entries.insert(key.to_string(), value);
            self.dirty = true;
        }
    }

    fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        match self.write_to_disk() {
            Ok(()) => self.dirty = false,
            Err(err) => error!(%err, "failed to persist storage"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use eframe::Storage;

    fn task(id: &str, title: &str, completed: bool) -> Task {
        let created_at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        Task::new(TaskId::new(id), title, created_at).with_completed(completed)
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let storage = MemoryStorage::new();
        assert!(PersistenceAdapter::load_tasks(Some(&storage)).is_empty());
        assert_eq!(PersistenceAdapter::load_theme(Some(&storage)), ThemeName::Light);
        assert!(PersistenceAdapter::load_tasks(None).is_empty());
        assert_eq!(PersistenceAdapter::load_theme(None), ThemeName::Light);
    }

    #[test]
    fn test_tasks_round_trip() {
        let mut storage = MemoryStorage::new();
        let tasks = vec![task("2", "B", true), task("1", "A", false)];

        PersistenceAdapter::save_tasks(&mut storage, &tasks);
        assert_eq!(storage.flush_count(), 1);
        assert_eq!(PersistenceAdapter::load_tasks(Some(&storage)), tasks);
    }

    #[test]
    fn test_malformed_tasks_fall_back_to_empty() {
        let mut storage = MemoryStorage::new();
        for bad in ["not json", "null", r#"{"id":"1"}"#, r#""tasks""#] {
            storage.set_string(TASKS_KEY, bad.to_string());
            assert!(PersistenceAdapter::try_load_tasks(&storage).is_err(), "{bad}");
            assert!(PersistenceAdapter::load_tasks(Some(&storage)).is_empty(), "{bad}");
        }
    }

    #[test]
    fn test_invalid_records_are_dropped() {
        let mut storage = MemoryStorage::new();
        storage.set_string(
            TASKS_KEY,
            r#"[
                {"id":"1","title":"keep","completed":false,"createdAt":"2024-01-01T00:00:00.000Z"},
                {"id":"2","title":"   ","completed":false,"createdAt":"2024-01-01T00:00:00.000Z"},
                {"id":"1","title":"dup","completed":true,"createdAt":"2024-01-01T00:00:00.000Z"},
                {"id":"3","title":"also keep","completed":true,"createdAt":"2024-01-02T00:00:00.000Z"}
            ]"#
            .to_string(),
        );

        let tasks = PersistenceAdapter::load_tasks(Some(&storage));
        let titles: Vec<_> = tasks.iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["keep", "also keep"]);
    }

    #[test]
    fn test_undecodable_records_do_not_discard_the_rest() {
        let mut storage = MemoryStorage::new();
        storage.set_string(
            TASKS_KEY,
            r#"[
                {"id":"1","title":"first","completed":false,"createdAt":"2024-01-01T00:00:00.000Z"},
                {"id":"2","title":"no timestamp","completed":false},
                {"id":3,"title":"numeric id","completed":false,"createdAt":"2024-01-01T00:00:00.000Z"},
                {"id":"4","title":"bad timestamp","completed":true,"createdAt":"yesterday"},
                "not a record",
                {"id":"5","title":"second","completed":true,"createdAt":"2024-01-02T00:00:00.000Z"}
            ]"#
            .to_string(),
        );

        let tasks = PersistenceAdapter::try_load_tasks(&storage).unwrap();
        let ids: Vec<_> = tasks.iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
        assert!(tasks[1].is_completed());
    }

    #[test]
    fn test_theme_stored_as_raw_string() {
        let mut storage = MemoryStorage::new();
        PersistenceAdapter::save_theme(&mut storage, ThemeName::Dark);
        assert_eq!(storage.get_string(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(PersistenceAdapter::load_theme(Some(&storage)), ThemeName::Dark);

        storage.set_string(THEME_KEY, "solarized".to_string());
        assert_eq!(PersistenceAdapter::load_theme(Some(&storage)), ThemeName::Light);
    }

    #[test]
    fn test_file_storage_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut storage = JsonFileStorage::open(&path).unwrap();
        PersistenceAdapter::save_tasks(&mut storage, &[task("1", "A", false)]);
        PersistenceAdapter::save_theme(&mut storage, ThemeName::Dark);
        assert!(path.exists());

        let reopened = JsonFileStorage::open(&path).unwrap();
        assert_eq!(reopened.path(), path.as_path());
        assert_eq!(PersistenceAdapter::load_tasks(Some(&reopened)), vec![task("1", "A", false)]);
        assert_eq!(PersistenceAdapter::load_theme(Some(&reopened)), ThemeName::Dark);
    }

    #[test]
    fn test_file_storage_skips_unchanged_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut storage = JsonFileStorage::open(&path).unwrap();
        storage.flush();
        assert!(!path.exists());

        storage.set_string(THEME_KEY, "dark".to_string());
        storage.flush();
        assert!(path.exists());
    }

    #[test]
    fn test_file_storage_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{ definitely not json").unwrap();

        let storage = JsonFileStorage::open(&path).unwrap();
        assert!(storage.get_string(TASKS_KEY).is_none());
        assert!(PersistenceAdapter::load_tasks(Some(&storage)).is_empty());
    }
}
