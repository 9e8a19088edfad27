use egui::Color32;
use egui::color_picker::{self, Alpha};

use crate::board::SketchBoard;
use crate::color;
use crate::components::ToolButtonWidget;
use crate::tools::ToolButton;

/// Left side panel with the tool buttons and the color picker.
///
/// Returns the button the user activated this frame. Changing the picker
/// value counts as activating [`ToolButton::CustomColor`].
pub fn tools_panel(ctx: &egui::Context, board: &SketchBoard, picked_color: &mut Color32) -> Option<ToolButton> {
    let mut activated = None;

    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            let selection = board.selection();
            for button in [ToolButton::Pen, ToolButton::Eraser, ToolButton::Rainbow] {
                if ToolButtonWidget::new(button, selection.is_marked(button)).show(ui).clicked() {
                    activated = Some(button);
                }
            }

            ui.horizontal(|ui| {
                let label = ToolButtonWidget::new(
                    ToolButton::CustomColor,
                    selection.is_marked(ToolButton::CustomColor),
                );
                if label.show(ui).clicked() {
                    activated = Some(ToolButton::CustomColor);
                }
            });
            ui.horizontal(|ui| {
                if color_picker::color_edit_button_srgba(ui, picked_color, Alpha::Opaque).changed() {
                    activated = Some(ToolButton::CustomColor);
                }
                ui.monospace(color::to_hex(*picked_color));
            });

            ui.separator();

            for button in [ToolButton::Clear, ToolButton::Resize] {
                if ToolButtonWidget::new(button, selection.is_marked(button)).show(ui).clicked() {
                    activated = Some(button);
                }
            }

            ui.separator();

            let size = board.grid().size();
            ui.label(format!("Grid: {size} x {size}"));
            ui.label(format!("Tool: {}", board.tool().name()));
        });

    activated
}
