//! Header panel UI rendering
//!
//! Handles the top bar with the add-task control, search input, and theme toggle.

use eframe::egui;
use crate::app::UiEvent;
use crate::presentation::SurfaceSnapshot;

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `surface` - Surface snapshot holding the search input buffer and active theme
///
/// # Returns
/// * `Option<UiEvent>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, surface: &mut SurfaceSnapshot) -> Option<UiEvent> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("➕ Add task").clicked() {
            interaction = Some(UiEvent::AddClicked);
        }

        ui.separator();

        ui.label("🔍");
        let search = egui::TextEdit::singleline(surface.search_input_mut())
            .hint_text("Search tasks")
            .desired_width(240.0)
            .show(ui);

        if search.response.changed() {
            interaction = Some(UiEvent::SearchChanged(surface.search_input().to_string()));
        }

        // Push theme toggle to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(surface.theme().toggle_label()).clicked() {
                interaction = Some(UiEvent::ThemeToggleClicked);
            }
        });
    });

    interaction
}
