//! Add/edit modal state.
//!
//! This module encapsulates which form the modal is showing and, in edit
//! mode, which task it targets.

use rtodo::TaskId;

/// State of the task modal.
///
/// Responsibilities:
/// - Distinguishing create from edit intent for the next submission
/// - Holding a weak reference (by id) to the task being edited
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    AddMode,
    EditMode(TaskId),
}

impl ModalState {
    // ===== Modal Queries =====

    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// The task targeted by the edit form, if any.
    pub fn current_task_id(&self) -> Option<&TaskId> {
        match self {
            ModalState::EditMode(id) => Some(id),
            _ => None,
        }
    }

    /// Heading shown on the modal surface.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            ModalState::Closed => None,
            ModalState::AddMode => Some("Add task"),
            ModalState::EditMode(_) => Some("Edit task"),
        }
    }

    // ===== Modal Mutations =====

    pub fn open_add(&mut self) {
        *self = ModalState::AddMode;
    }

    pub fn open_edit(&mut self, id: TaskId) {
        *self = ModalState::EditMode(id);
    }

    /// Closes the modal, clearing the edit target and mode.
    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }
}
