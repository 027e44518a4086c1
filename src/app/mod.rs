//! Application-level modules for the task manager.
//!
//! This module contains the event coordinator and centralized state management.

mod app_state;
mod application_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::{ApplicationCoordinator, Environment, UiEvent};
pub use theme_coordinator::ThemeCoordinator;
