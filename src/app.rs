use egui::Color32;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::SketchBoard;
use crate::config::SketchConfig;
use crate::input::HoverTracker;
use crate::panels::{central_panel, tools_panel};
use crate::tools::ToolButton;
use crate::widgets::{DialogOutcome, ResizeDialog};

pub struct SketchApp {
    board: SketchBoard,
    hover: HoverTracker,
    resize_dialog: ResizeDialog,
    /// Current value of the color picker
    picked_color: Color32,
    rng: StdRng,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(SketchConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: SketchConfig) -> Self {
        let size = config.default_size;
        log::info!("Starting with a {size}x{size} grid");
        Self {
            board: SketchBoard::new(config),
            hover: HoverTracker::new(),
            resize_dialog: ResizeDialog::default(),
            picked_color: Color32::BLACK,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn board(&self) -> &SketchBoard {
        &self.board
    }

    pub fn resize_dialog(&self) -> &ResizeDialog {
        &self.resize_dialog
    }

    pub fn resize_dialog_mut(&mut self) -> &mut ResizeDialog {
        &mut self.resize_dialog
    }

    pub fn picked_color(&self) -> Color32 {
        self.picked_color
    }

    pub fn set_picked_color(&mut self, color: Color32) {
        self.picked_color = color;
    }

    /// Route a tool button press. Resize opens the size dialog.
    pub fn press(&mut self, button: ToolButton, now: f64) {
        self.board.activate(button, self.picked_color, now);
        if button == ToolButton::Resize {
            let config = self.board.config();
            self.resize_dialog.open(config.min_size, config.max_size);
        }
    }

    /// Apply what the resize dialog reported.
    pub fn finish_resize(&mut self, outcome: DialogOutcome) {
        match outcome {
            DialogOutcome::Submitted(size) => match self.board.resize(size) {
                Ok(()) => self.hover.reset(),
                Err(err) => {
                    log::warn!("Rejected grid size: {err}");
                    self.board.cancel_resize();
                }
            },
            DialogOutcome::Cancelled => self.board.cancel_resize(),
        }
        self.resize_dialog.close();
    }

    /// Lay out and run one frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);

        if let Some(button) = tools_panel(ctx, &self.board, &mut self.picked_color) {
            self.press(button, now);
        }

        // Another tool was picked while the dialog was open
        if self.resize_dialog.is_open() && !self.board.is_resizing() {
            self.resize_dialog.close();
        }

        if let Some(outcome) = self.resize_dialog.show(ctx) {
            self.finish_resize(outcome);
        }

        central_panel(ctx, &mut self.board, &mut self.hover, &mut self.rng, now);
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_button_opens_dialog() {
        let mut app = SketchApp::default();
        app.press(ToolButton::Resize, 0.0);
        assert!(app.resize_dialog().is_open());
        assert!(app.board().is_resizing());

        app.finish_resize(DialogOutcome::Submitted(8));
        assert!(!app.resize_dialog().is_open());
        assert_eq!(app.board().grid().len(), 64);
    }

    #[test]
    fn test_picked_color_feeds_custom_tool() {
        let mut app = SketchApp::default();
        app.set_picked_color(Color32::RED);
        app.press(ToolButton::CustomColor, 0.0);
        assert_eq!(app.board().tool(), crate::tools::Tool::CustomColor(Color32::RED));
    }

    #[test]
    fn test_frame_runs_headless() {
        let ctx = egui::Context::default();
        let mut app = SketchApp::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));
        assert_eq!(app.board().grid().len(), 256);
    }
}
