//! Panel orchestration and layout management.
//!
//! Lays out the header, task regions, status bar and modal, and returns the
//! interaction (if any) the user produced this frame.

use crate::app::{AppState, UiEvent};
use crate::presentation::{color_mapping, SurfaceSnapshot};
use crate::ui::{header, status_bar, task_list_panel, task_modal};
use egui::ScrollArea;
use rtodo::ListRegion;

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &AppState,
        surface: &mut SurfaceSnapshot,
    ) -> Option<UiEvent> {
        let mut interaction: Option<UiEvent> = None;

        let theme_colors = color_mapping::theme_colors(surface.theme());
        let modal_open = surface.modal().is_some();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                if let Some(header_interaction) = header::render_header(ui, surface) {
                    interaction = Some(header_interaction);
                }
            });
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, surface, &theme_colors);
        });

        // Task regions
        let task_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(task_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("task_scroll_area")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_enabled_ui(!modal_open, |ui| {
                            for region in [ListRegion::Active, ListRegion::Completed] {
                                if let Some(list_interaction) = task_list_panel::render_task_list(
                                    ui,
                                    region,
                                    surface.region(region),
                                    &theme_colors,
                                ) {
                                    interaction = Some(list_interaction);
                                }
                                ui.add_space(16.0);
                            }
                        });
                    });
            });

        // Modal on top of everything
        if let Some(modal) = surface.modal_mut() {
            if let Some(modal_interaction) = task_modal::render_task_modal(ctx, modal) {
                interaction = Some(modal_interaction);
            }
        }

        interaction
    }
}
