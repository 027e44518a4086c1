//! Presentation surface contract.
//!
//! The controller never touches widgets directly. It pushes rendered entries,
//! the active theme and modal visibility through [`PresentationSurface`], and
//! asks the user yes/no questions through [`ConfirmDialog`].

use rtodo::{ListEntry, ListRegion, ThemeName};

/// Named regions and controls the controller writes to.
pub trait PresentationSurface {
    /// Replaces the entire contents of a task region.
    fn replace_region(&mut self, region: ListRegion, entries: Vec<ListEntry>);

    /// Marks `theme` as the active theme of the surface.
    fn apply_theme(&mut self, theme: ThemeName);

    /// Shows the modal with a heading and pre-filled input.
    fn open_modal(&mut self, title: &str, input: &str);

    fn close_modal(&mut self);
}

/// Blocking yes/no prompt.
pub trait ConfirmDialog {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Contents of the open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    /// Text input buffer, edited in place by the modal widget.
    pub input: String,
    /// Set on open so the widget grabs keyboard focus once.
    pub focus_requested: bool,
}

/// Retained copy of everything the controller has pushed to the surface.
///
/// The egui panels redraw from this every frame; tests inspect it directly.
#[derive(Debug, Clone)]
pub struct SurfaceSnapshot {
    active: Vec<ListEntry>,
    completed: Vec<ListEntry>,
    theme: ThemeName,
    theme_class: String,
    modal: Option<ModalView>,
    search_input: String,
}

impl Default for SurfaceSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceSnapshot {
    pub fn new() -> Self {
        let theme = ThemeName::default();
        Self {
            active: Vec::new(),
            completed: Vec::new(),
            theme,
            theme_class: theme.class_name(),
            modal: None,
            search_input: String::new(),
        }
    }

    // ===== Queries =====

    pub fn region(&self, region: ListRegion) -> &[ListEntry] {
        match region {
            ListRegion::Active => &self.active,
            ListRegion::Completed => &self.completed,
        }
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    /// Class naming the active theme, e.g. `light-theme`.
    pub fn theme_class(&self) -> &str {
        &self.theme_class
    }

    pub fn modal(&self) -> Option<&ModalView> {
        self.modal.as_ref()
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Number of task entries currently shown across both regions.
    pub fn shown_task_count(&self) -> usize {
        self.active
            .iter()
            .chain(&self.completed)
            .filter(|entry| entry.as_task().is_some())
            .count()
    }

    // ===== Widget Buffers =====

    pub fn modal_mut(&mut self) -> Option<&mut ModalView> {
        self.modal.as_mut()
    }

    pub fn search_input_mut(&mut self) -> &mut String {
        &mut self.search_input
    }
}

impl PresentationSurface for SurfaceSnapshot {
    fn replace_region(&mut self, region: ListRegion, entries: Vec<ListEntry>) {
        match region {
            ListRegion::Active => self.active = entries,
            ListRegion::Completed => self.completed = entries,
        }
    }

    fn apply_theme(&mut self, theme: ThemeName) {
        self.theme = theme;
        self.theme_class = theme.class_name();
    }

    fn open_modal(&mut self, title: &str, input: &str) {
        self.modal = Some(ModalView {
            title: title.to_string(),
            input: input.to_string(),
            focus_requested: true,
        });
    }

    fn close_modal(&mut self) {
        self.modal = None;
    }
}
