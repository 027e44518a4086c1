//! Event handling and workflow coordination.
//!
//! Every user interaction arrives as a [`UiEvent`] and is handled to completion
//! before the next one. A handler that mutates the task collection persists it
//! and re-renders the view in the same step, so storage never lags memory by
//! more than the mutation in flight.

use crate::app::{AppState, ThemeCoordinator};
use crate::presentation::{ConfirmDialog, PresentationSurface};
use rtodo::{render_view, ListRegion, PersistenceAdapter, TaskAction, TaskId};
use tracing::debug;

/// Question asked before a task is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

/// One user interaction with a control on the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// "Add task" control
    AddClicked,
    /// Modal cancel control (or Escape)
    CancelClicked,
    /// Click outside the modal surface
    ModalBackdropClicked,
    /// Modal form submitted with the input text
    Submitted(String),
    /// Search input changed
    SearchChanged(String),
    /// Theme toggle control
    ThemeToggleClicked,
    /// A control attached to a rendered task
    Task(TaskAction),
}

/// Collaborators a handler may touch besides the application state.
pub struct Environment<'a> {
    pub storage: &'a mut dyn eframe::Storage,
    pub surface: &'a mut dyn PresentationSurface,
    pub confirm: &'a mut dyn ConfirmDialog,
}

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Routing each control's events to its handler
/// - Driving the add/edit modal state machine
/// - Persisting and re-rendering after every task mutation
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies the loaded theme and renders the initial view.
    pub fn start(state: &AppState, env: &mut Environment<'_>) {
        ThemeCoordinator::apply_theme(env.surface, state.theme.current());
        Self::render(state, env.surface);
    }

    /// Routes an event to its handler.
    pub fn dispatch(state: &mut AppState, env: &mut Environment<'_>, event: UiEvent) {
        debug!(?event, "dispatching");
        match event {
            UiEvent::AddClicked => Self::open_add_modal(state, env.surface),
            UiEvent::CancelClicked | UiEvent::ModalBackdropClicked => {
                Self::close_modal(state, env.surface)
            }
            UiEvent::Submitted(text) => Self::submit(state, env, &text),
            UiEvent::SearchChanged(term) => Self::search(state, env.surface, term),
            UiEvent::ThemeToggleClicked => ThemeCoordinator::toggle_theme(state, env),
            UiEvent::Task(TaskAction::ToggleCompletion(id)) => Self::toggle_completion(state, env, &id),
            UiEvent::Task(TaskAction::Edit(id)) => Self::open_edit_modal(state, env.surface, id),
            UiEvent::Task(TaskAction::Delete(id)) => Self::delete(state, env, &id),
        }
    }

    /// Rebuilds both task regions from the collection and the current search term.
    pub fn render(state: &AppState, surface: &mut dyn PresentationSurface) {
        let view = render_view(state.store.tasks(), state.search.term());
        surface.replace_region(ListRegion::Active, view.active);
        surface.replace_region(ListRegion::Completed, view.completed);
    }

    // ===== Modal Flow =====

    fn open_add_modal(state: &mut AppState, surface: &mut dyn PresentationSurface) {
        state.modal.open_add();
        if let Some(title) = state.modal.title() {
            surface.open_modal(title, "");
        }
    }

    /// Opens the edit form pre-filled with the task's title; ignored if the task is gone.
    fn open_edit_modal(state: &mut AppState, surface: &mut dyn PresentationSurface, id: TaskId) {
        let Some(current_title) = state.store.find_by_id(&id).map(|task| task.title().to_string()) else {
            debug!(task_id = %id, "edit requested for missing task");
            return;
        };

        state.modal.open_edit(id);
        if let Some(title) = state.modal.title() {
            surface.open_modal(title, &current_title);
        }
    }

    fn close_modal(state: &mut AppState, surface: &mut dyn PresentationSurface) {
        state.modal.close();
        surface.close_modal();
    }

    /// Creates or edits a task depending on the modal mode, then closes the modal.
    ///
    /// A blank submission leaves the modal open and changes nothing.
    fn submit(state: &mut AppState, env: &mut Environment<'_>, text: &str) {
        if !state.modal.is_open() {
            debug!("submission with closed modal ignored");
            return;
        }
        if text.trim().is_empty() {
            debug!("blank submission ignored");
            return;
        }

        match state.current_task_id().cloned() {
            Some(id) => {
                if state.store.update(&id, text) {
                    Self::commit(state, env);
                } else {
                    debug!(task_id = %id, "edit target no longer exists");
                }
            }
            None => {
                if state.store.create(text).is_some() {
                    Self::commit(state, env);
                }
            }
        }

        Self::close_modal(state, env.surface);
    }

    // ===== Task Flow =====

    fn toggle_completion(state: &mut AppState, env: &mut Environment<'_>, id: &TaskId) {
        if state.store.toggle_completion(id).is_some() {
            Self::commit(state, env);
        }
    }

    /// Removes a task once the user confirms.
    fn delete(state: &mut AppState, env: &mut Environment<'_>, id: &TaskId) {
        if !state.store.contains(id) {
            return;
        }
        if !env.confirm.confirm(DELETE_PROMPT) {
            debug!(task_id = %id, "deletion declined");
            return;
        }
        if state.store.remove(id).is_some() {
            Self::commit(state, env);
        }
    }

    fn search(state: &mut AppState, surface: &mut dyn PresentationSurface, term: String) {
        state.search.set_term(term);
        Self::render(state, surface);
    }

    /// Persists the collection and re-renders; called right after every mutation.
    fn commit(state: &AppState, env: &mut Environment<'_>) {
        PersistenceAdapter::save_tasks(env.storage, state.store.tasks());
        Self::render(state, env.surface);
    }
}
