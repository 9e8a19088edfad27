use egui::{Pos2, Rect};

use crate::grid::Grid;

/// Turns the pointer position of each frame into "entered cell" events.
///
/// A cell fires once when the pointer moves onto it, not on every frame the
/// pointer rests there. Leaving the board resets the tracker so re-entering
/// the same cell fires again.
#[derive(Debug, Default, Clone)]
pub struct HoverTracker {
    last_cell: Option<usize>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell the pointer just entered, if any.
    pub fn update(&mut self, pointer: Option<Pos2>, board: Rect, grid: &Grid) -> Option<usize> {
        let cell = pointer.and_then(|pos| grid.cell_index_at(pos, board));
        if cell == self.last_cell {
            return None;
        }
        self.last_cell = cell;
        cell
    }

    /// Forget the last cell, e.g. after the grid was rebuilt
    pub fn reset(&mut self) {
        self.last_cell = None;
    }
}
