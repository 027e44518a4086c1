//! State management modules for the task manager.
//!
//! This module contains state-only logic (no UI concerns):
//! - Modal state (closed, adding, editing a task)
//! - Search state (current search term)
//! - Theme state (active theme)

mod modal_state;
mod search_state;
mod theme_state;

pub use modal_state::ModalState;
pub use search_state::SearchState;
pub use theme_state::ThemeState;
