//! Native yes/no confirmation dialog.

use crate::presentation::ConfirmDialog;

/// Confirms through a blocking native message box.
pub struct NativeConfirmDialog;

impl ConfirmDialog for NativeConfirmDialog {
    fn confirm(&mut self, message: &str) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Delete task")
            .set_description(message)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();

        matches!(answer, rfd::MessageDialogResult::Yes)
    }
}
