use egui::Color32;
use rand::Rng;

use crate::config::{MAX_GRID_SIZE, SketchConfig};
use crate::error::GridSizeError;
use crate::grid::Grid;
use crate::tools::{Tool, ToolButton, ToolSelection};

/// The whole drawing surface: the grid, the active tool and the selected
/// marker on the tool buttons.
///
/// Hover events go through [`SketchBoard::hover`], which paints according to
/// the single active [`Tool`]. Activating another tool replaces it.
#[derive(Debug, Clone)]
pub struct SketchBoard {
    config: SketchConfig,
    grid: Grid,
    tool: Tool,
    selection: ToolSelection,
    /// Tool and marker to restore if an open resize is cancelled
    suspended: Option<(Tool, ToolSelection)>,
}

impl Default for SketchBoard {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl SketchBoard {
    /// Board at `config.default_size` with the pen bound and no button marked.
    pub fn new(config: SketchConfig) -> Self {
        let grid = Grid::new(config.default_size, config.paper);
        Self {
            config,
            grid,
            tool: Tool::Pen,
            selection: ToolSelection::default(),
            suspended: None,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn selection(&self) -> ToolSelection {
        self.selection
    }

    pub fn is_resizing(&self) -> bool {
        self.suspended.is_some()
    }

    /// Handle a click on a tool button. `picked` is the color picker's value,
    /// only read for [`ToolButton::CustomColor`].
    pub fn activate(&mut self, button: ToolButton, picked: Color32, now: f64) {
        let tool = match button {
            ToolButton::Pen => Tool::Pen,
            ToolButton::Eraser => Tool::Eraser,
            ToolButton::Rainbow => Tool::Rainbow,
            ToolButton::CustomColor => Tool::CustomColor(picked),
            ToolButton::Clear => {
                self.clear(now);
                return;
            }
            ToolButton::Resize => {
                self.begin_resize();
                return;
            }
        };

        if self.suspended.take().is_some() {
            log::debug!("Tool activated while resizing, dropping suspended tool");
        }
        log::info!("Tool selected: {}", tool.name());
        self.selection.select(button);
        self.tool = tool;
    }

    /// Paint the cell the pointer just entered. Returns false if nothing was
    /// painted.
    pub fn hover<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R, now: f64) -> bool {
        let Some(color) = self.tool.paint_color(rng, &self.config) else {
            return false;
        };
        let transition = self
            .tool
            .applies_transition()
            .then(|| self.config.eraser_transition());
        self.grid.paint(index, color, transition, now)
    }

    /// Repaint every cell with the background color right away. Leaves the
    /// active tool and the marker alone.
    pub fn clear(&mut self, now: f64) {
        log::info!("Clearing {} cells", self.grid.len());
        self.grid.fill(self.config.paper, now);
    }

    /// Strip the marker and stop painting until the resize is finished or
    /// cancelled.
    pub fn begin_resize(&mut self) {
        if self.suspended.is_none() {
            self.suspended = Some((self.tool, self.selection));
        }
        self.selection.select(ToolButton::Resize);
        self.tool = Tool::Idle;
    }

    pub fn cancel_resize(&mut self) {
        if let Some((tool, selection)) = self.suspended.take() {
            log::debug!("Resize cancelled, restoring {}", tool.name());
            self.tool = tool;
            self.selection = selection;
        }
    }

    /// Discard the grid and rebuild it at `size`, then bind the pen again as
    /// at startup.
    pub fn resize(&mut self, size: usize) -> Result<(), GridSizeError> {
        let (min, max) = (self.config.min_size, self.config.max_size.min(MAX_GRID_SIZE));
        if !(min..=max).contains(&size) {
            return Err(GridSizeError::OutOfRange {
                value: size as i64,
                min,
                max,
            });
        }

        log::info!("Resizing grid from {0}x{0} to {1}x{1}", self.grid.size(), size);
        self.grid.rebuild(size);
        self.suspended = None;
        self.selection.clear();
        self.tool = Tool::Pen;
        Ok(())
    }
}
