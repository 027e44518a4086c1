//! Centralized application state for the task manager.
//!
//! The state is composed of focused components, each owning one concern:
//! - `store`: the task collection (single source of truth during a session)
//! - `modal`: add/edit intent and edit target
//! - `search`: the search term narrowing the view
//! - `theme`: the active theme
//!
//! One `AppState` exists per session. Handlers receive it by `&mut` from the
//! event loop; nothing else holds it.

use crate::state::{ModalState, SearchState, ThemeState};
use rtodo::{PersistenceAdapter, TaskId, TaskStore};
use tracing::info;

/// Main application state composed of focused state components.
#[derive(Debug)]
pub struct AppState {
    /// Task collection
    pub store: TaskStore,

    /// Add/edit modal state
    pub modal: ModalState,

    /// Current search term
    pub search: SearchState,

    /// Active theme
    pub theme: ThemeState,
}

impl AppState {
    /// Creates the session state from persisted storage.
    ///
    /// Missing or malformed values fall back to an empty list and the light theme.
    pub fn hydrate(storage: Option<&dyn eframe::Storage>) -> Self {
        let tasks = PersistenceAdapter::load_tasks(storage);
        let theme = PersistenceAdapter::load_theme(storage);
        info!(tasks = tasks.len(), %theme, "loaded application state");

        Self {
            store: TaskStore::from_tasks(tasks),
            modal: ModalState::Closed,
            search: SearchState::new(),
            theme: ThemeState::with_theme(theme),
        }
    }

    /// Id of the task being edited, if the edit modal is open.
    pub fn current_task_id(&self) -> Option<&TaskId> {
        self.modal.current_task_id()
    }
}
