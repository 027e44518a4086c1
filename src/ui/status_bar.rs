//! Status bar UI rendering
//!
//! Handles the bottom status bar with task counts and the active search.

use eframe::egui;
use egui::RichText;
use rtodo::ThemeColors;
use crate::app::AppState;
use crate::presentation::SurfaceSnapshot;

/// Renders the status panel at the bottom of the window
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, surface: &SurfaceSnapshot, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        let (active, completed) = state.store.counts();
        ui.label(RichText::new(format!("{} active · {} completed", active, completed)).strong());

        if state.search.is_active() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!(
                "Showing {} matching \"{}\"",
                surface.shown_task_count(),
                state.search.term()
            )).strong().color(colors.warning));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(surface.theme_class()).color(colors.text_dim));
        });
    });
}
