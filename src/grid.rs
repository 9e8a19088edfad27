use egui::{Color32, Pos2, Rect, Vec2};

use crate::color::Transition;

/// One square of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    color: Color32,
    /// Transition timing attached by the eraser, in seconds.
    transition_secs: Option<f32>,
    /// In-flight blend towards `color`.
    transition: Option<Transition>,
}

impl Cell {
    pub fn new(color: Color32) -> Self {
        Self {
            color,
            transition_secs: None,
            transition: None,
        }
    }

    /// Target color, ignoring any running transition
    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Color to draw at `now`
    pub fn displayed_color(&self, now: f64) -> Color32 {
        match &self.transition {
            Some(transition) => transition.sample(self.color, now),
            None => self.color,
        }
    }

    pub fn has_transition(&self) -> bool {
        self.transition_secs.is_some()
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|transition| !transition.is_finished(now))
    }

    pub fn set_transition(&mut self, secs: f32) {
        self.transition_secs = Some(secs);
    }

    pub fn paint(&mut self, color: Color32, now: f64) {
        if color == self.color {
            return;
        }
        self.transition = self.transition_secs.map(|duration| Transition {
            from: self.displayed_color(now),
            started: now,
            duration,
        });
        self.color = color;
    }
}

/// Square board of `size * size` cells stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    background: Color32,
}

impl Grid {
    /// `size` must already be validated (at least 1).
    pub fn new(size: usize, background: Color32) -> Self {
        let mut grid = Self {
            size: 0,
            cells: Vec::new(),
            background,
        };
        grid.rebuild(size);
        grid
    }

    /// Throw away every cell and lay out a fresh `size * size` board.
    pub fn rebuild(&mut self, size: usize) {
        self.size = size;
        self.cells = vec![Cell::new(self.background); size * size];
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn columns(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Paint one cell, first attaching `transition` (seconds) if given.
    /// Returns false if `index` is outside the grid.
    pub fn paint(&mut self, index: usize, color: Color32, transition: Option<f32>, now: f64) -> bool {
        let Some(cell) = self.cells.get_mut(index) else {
            return false;
        };
        if let Some(secs) = transition {
            cell.set_transition(secs);
        }
        cell.paint(color, now);
        true
    }

    pub fn fill(&mut self, color: Color32, now: f64) {
        for cell in &mut self.cells {
            cell.paint(color, now);
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.cells.iter().any(|cell| cell.is_animating(now))
    }

    /// Largest square that fits in `available`, centered.
    pub fn board_rect(available: Rect) -> Rect {
        let side = available.width().min(available.height()).max(0.0);
        Rect::from_center_size(available.center(), Vec2::splat(side))
    }

    /// Screen rect of a cell when the board occupies `board`.
    pub fn cell_rect(&self, index: usize, board: Rect) -> Option<Rect> {
        if index >= self.cells.len() {
            return None;
        }
        let cell = self.cell_extent(board);
        let (row, col) = (index / self.size, index % self.size);
        let min = board.min + Vec2::new(col as f32 * cell.x, row as f32 * cell.y);
        Some(Rect::from_min_size(min, cell))
    }

    /// Cell under `pos`, if any.
    pub fn cell_index_at(&self, pos: Pos2, board: Rect) -> Option<usize> {
        if self.size == 0 || !board.contains(pos) || board.width() <= 0.0 {
            return None;
        }
        let cell = self.cell_extent(board);
        let offset = pos - board.min;
        let last = self.size - 1;
        let col = ((offset.x / cell.x) as usize).min(last);
        let row = ((offset.y / cell.y) as usize).min(last);
        self.index(row, col)
    }

    fn cell_extent(&self, board: Rect) -> Vec2 {
        board.size() / self.size.max(1) as f32
    }
}
