//! Task list UI rendering
//!
//! Draws one display region (active or completed) from its rendered entries.

use eframe::egui;
use egui::{Align, Layout, RichText};
use rtodo::{ListEntry, ListRegion, TaskAction, TaskEntry, ThemeColors};
use crate::app::UiEvent;
use crate::presentation::color_mapping;

/// Renders a region heading followed by its entries.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `region` - Which region is drawn
/// * `entries` - Entries last pushed to this region
/// * `colors` - Color palette for the current theme
pub fn render_task_list(
    ui: &mut egui::Ui,
    region: ListRegion,
    entries: &[ListEntry],
    colors: &ThemeColors,
) -> Option<UiEvent> {
    let mut interaction = None;

    ui.heading(region.heading());
    ui.separator();

    for entry in entries {
        match entry {
            ListEntry::Placeholder(label) => {
                ui.label(RichText::new(label.as_str()).italics().color(colors.text_dim));
            }
            ListEntry::Task(task) => {
                if let Some(action) = render_task_row(ui, task, colors) {
                    interaction = Some(UiEvent::Task(action));
                }
            }
        }
    }

    interaction
}

/// Draws the toggle, title, edit and delete controls of one task.
fn render_task_row(ui: &mut egui::Ui, task: &TaskEntry, colors: &ThemeColors) -> Option<TaskAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let mut checked = task.completed;
        if ui.checkbox(&mut checked, "").changed() {
            action = Some(task.hooks.toggle.clone());
        }

        let mut title = RichText::new(task.title.as_str())
            .color(color_mapping::entry_title_color(task, colors));
        if task.completed {
            title = title.strikethrough();
        }
        ui.label(title);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button(RichText::new("🗑 Delete").color(colors.danger)).clicked() {
                action = Some(task.hooks.delete.clone());
            }
            if ui.button("✏ Edit").clicked() {
                action = Some(task.hooks.edit.clone());
            }
        });
    });

    action
}
