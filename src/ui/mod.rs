//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the task manager:
//! - Header panel (add task, search, theme toggle)
//! - Task list panel (active and completed regions)
//! - Task modal (add/edit form)
//! - Status bar (task counts, active search)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod task_list_panel;
pub mod task_modal;
pub mod status_bar;
pub mod panel_manager;
