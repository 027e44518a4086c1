//! Add/edit modal UI rendering

use eframe::egui;
use crate::app::UiEvent;
use crate::presentation::ModalView;

/// Renders the task modal over the rest of the window.
///
/// Enter in the input submits; Escape cancels; a click on the backdrop is
/// reported separately from the cancel button.
pub fn render_task_modal(ctx: &egui::Context, modal: &mut ModalView) -> Option<UiEvent> {
    let mut interaction = None;

    let response = egui::Modal::new(egui::Id::new("task_modal")).show(ctx, |ui| {
        ui.set_width(360.0);
        ui.heading(modal.title.as_str());
        ui.add_space(8.0);

        let input = ui.add(
            egui::TextEdit::singleline(&mut modal.input)
                .hint_text("What needs to be done?")
                .desired_width(f32::INFINITY),
        );
        if modal.focus_requested {
            input.request_focus();
            modal.focus_requested = false;
        }
        let enter_pressed = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() || enter_pressed {
                interaction = Some(UiEvent::Submitted(modal.input.clone()));
            }
            if ui.button("Cancel").clicked() {
                interaction = Some(UiEvent::CancelClicked);
            }
        });
    });

    if interaction.is_none() {
        if response.backdrop_response.clicked() {
            interaction = Some(UiEvent::ModalBackdropClicked);
        } else if response.should_close() {
            interaction = Some(UiEvent::CancelClicked);
        }
    }

    interaction
}
