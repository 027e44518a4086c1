//! Task Manager GUI Application
//!
//! A single-window to-do list built with the egui framework.
//! The application features:
//! - Active and completed task lists, newest first
//! - Add/edit modal, delete with confirmation, completion toggle
//! - Case-insensitive search across task titles

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Light and dark themes with a persistent preference
//! - Task list persisted to a local JSON store after every change
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and event coordination
//! - `state/` - State components (modal, search, theme)
//! - `presentation/` - Presentation surface contract and color lookup
//! - `ui/` - egui panel rendering

use eframe::egui;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod presentation;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, Environment, ThemeCoordinator};
use presentation::{NativeConfirmDialog, SurfaceSnapshot};
use rtodo::{JsonFileStorage, MemoryStorage};
use ui::panel_manager::PanelManager;

/// Main application entry point that initializes and launches the task manager GUI.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // Optional path to the storage file, otherwise the platform data directory
    let storage_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(JsonFileStorage::default_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([420.0, 360.0])
            .with_title("Tasks"),
        ..Default::default()
    };

    eframe::run_native(
        "Tasks",
        options,
        Box::new(move |_cc| Ok(Box::new(TodoApp::new(storage_path)))),
    )
}

/// The main task manager application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles every user interaction
/// - `ThemeCoordinator` applies the theme palette each frame
/// - `PanelManager` handles UI panel layout and rendering
struct TodoApp {
    /// Session state
    state: AppState,
    /// Durable key/value store
    storage: Box<dyn eframe::Storage>,
    /// Everything the coordinator has pushed for display
    surface: SurfaceSnapshot,
    /// Delete confirmation prompt
    confirm: NativeConfirmDialog,
}

impl TodoApp {
    /// Opens storage, hydrates state, and renders the initial view.
    ///
    /// If the storage file cannot be opened the session runs on in-memory storage.
    fn new(storage_path: PathBuf) -> Self {
        let storage: Box<dyn eframe::Storage> = match JsonFileStorage::open(&storage_path) {
            Ok(storage) => Box::new(storage),
            Err(err) => {
                error!("{:#}; changes will not be saved", err);
                Box::new(MemoryStorage::new())
            }
        };

        let state = AppState::hydrate(Some(storage.as_ref()));

        let mut app = Self {
            state,
            storage,
            surface: SurfaceSnapshot::new(),
            confirm: NativeConfirmDialog,
        };

        let mut env = Environment {
            storage: app.storage.as_mut(),
            surface: &mut app.surface,
            confirm: &mut app.confirm,
        };
        ApplicationCoordinator::start(&app.state, &mut env);
        info!(path = %storage_path.display(), "task manager ready");

        app
    }
}

impl eframe::App for TodoApp {
    /// Main update loop: apply theme, draw panels, handle at most one interaction.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, self.surface.theme());

        if let Some(event) = PanelManager::render_all_panels(ctx, &self.state, &mut self.surface) {
            let mut env = Environment {
                storage: self.storage.as_mut(),
                surface: &mut self.surface,
                confirm: &mut self.confirm,
            };
            ApplicationCoordinator::dispatch(&mut self.state, &mut env, event);
            ctx.request_repaint();
        }
    }
}
