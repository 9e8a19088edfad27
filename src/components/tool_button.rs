use eframe::egui;

use crate::tools::ToolButton;

/// A tool panel button that draws the selected marker.
pub struct ToolButtonWidget {
    pub button: ToolButton,
    pub selected: bool,
}

impl ToolButtonWidget {
    pub fn new(button: ToolButton, selected: bool) -> Self {
        Self { button, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(ui.available_width().max(120.0), 28.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(70)
            } else {
                egui::Color32::from_gray(50)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };

            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.button.label(),
                egui::FontId::proportional(16.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}
