use egui::{Color32, Stroke};
use rand::Rng;

use crate::board::SketchBoard;
use crate::grid::Grid;
use crate::input::HoverTracker;

/// Draw the grid and feed pointer entries into the board.
pub fn central_panel<R: Rng + ?Sized>(
    ctx: &egui::Context,
    board: &mut SketchBoard,
    hover: &mut HoverTracker,
    rng: &mut R,
    now: f64,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();
        let board_rect = Grid::board_rect(available);
        let response = ui.allocate_rect(board_rect, egui::Sense::hover());

        if let Some(index) = hover.update(response.hover_pos(), board_rect, board.grid()) {
            board.hover(index, rng, now);
        }

        let painter = ui.painter_at(board_rect);
        let grid = board.grid();
        for (index, cell) in grid.cells().iter().enumerate() {
            if let Some(rect) = grid.cell_rect(index, board_rect) {
                painter.rect_filled(rect, 0.0, cell.displayed_color(now));
            }
        }
        painter.rect_stroke(board_rect, 0.0, Stroke::new(1.0, Color32::from_gray(120)));

        if grid.is_animating(now) {
            ctx.request_repaint();
        }
    });
}
