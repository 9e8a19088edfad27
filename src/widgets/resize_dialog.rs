use egui::{Color32, Key};

use crate::resize::{ResizeRequest, ResizeValidation};

/// What the user did with the dialog this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Submitted(usize),
    Cancelled,
}

/// Non-modal window asking for a new grid size.
#[derive(Debug, Default)]
pub struct ResizeDialog {
    request: Option<ResizeRequest>,
    needs_focus: bool,
}

impl ResizeDialog {
    pub fn open(&mut self, min: usize, max: usize) {
        if self.request.is_none() {
            self.request = Some(ResizeRequest::new(min, max));
            self.needs_focus = true;
        }
    }

    pub fn close(&mut self) {
        self.request = None;
    }

    pub fn is_open(&self) -> bool {
        self.request.is_some()
    }

    pub fn request(&self) -> Option<&ResizeRequest> {
        self.request.as_ref()
    }

    pub fn request_mut(&mut self) -> Option<&mut ResizeRequest> {
        self.request.as_mut()
    }

    /// Draw the window if open. Closes itself on submit or cancel.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogOutcome> {
        let request = self.request.as_mut()?;
        let needs_focus = std::mem::take(&mut self.needs_focus);
        let mut outcome = None;

        egui::Window::new("Change grid size")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(request.prompt());

                let response = ui.text_edit_singleline(request.input_mut());
                if response.changed() {
                    request.revalidate();
                }
                if needs_focus {
                    response.request_focus();
                }
                // The dialog owns the keyboard while open
                let enter = ui.input(|i| i.key_pressed(Key::Enter));

                match request.validation() {
                    ResizeValidation::Pending => {}
                    ResizeValidation::Valid(size) => {
                        ui.label(format!("New grid: {size} x {size}"));
                    }
                    ResizeValidation::Invalid(err) => {
                        ui.colored_label(Color32::from_rgb(220, 80, 80), err.to_string());
                    }
                }

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || enter {
                        if let Some(size) = request.submit() {
                            outcome = Some(DialogOutcome::Submitted(size));
                        }
                    }
                    if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(Key::Escape)) {
                        outcome = Some(DialogOutcome::Cancelled);
                    }
                });
            });

        if outcome.is_some() {
            self.close();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_keeps_existing_input() {
        let mut dialog = ResizeDialog::default();
        dialog.open(1, 100);
        dialog.request_mut().unwrap().set_input("12");
        dialog.open(1, 100);
        assert_eq!(dialog.request().unwrap().input(), "12");
        dialog.close();
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_closed_dialog_shows_nothing() {
        let ctx = egui::Context::default();
        let mut dialog = ResizeDialog::default();
        let mut outcome = Some(DialogOutcome::Cancelled);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            outcome = dialog.show(ctx);
        });
        assert_eq!(outcome, None);
    }
}
