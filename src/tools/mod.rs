use egui::Color32;
use rand::Rng;

use crate::color;
use crate::config::SketchConfig;

mod selection;
pub use selection::{ToolButton, ToolSelection};

/// The paint strategy every hovered cell is dispatched through.
///
/// Exactly one value lives in [`crate::SketchBoard`]; switching tools
/// replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Hovering paints nothing
    #[default]
    Idle,
    Pen,
    Eraser,
    Rainbow,
    CustomColor(Color32),
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Pen => "Pen",
            Self::Eraser => "Eraser",
            Self::Rainbow => "Rainbow",
            Self::CustomColor(_) => "Custom color",
        }
    }

    /// Color for one hover event, or `None` when the tool does not paint.
    /// Rainbow draws a fresh sample on every call.
    pub fn paint_color<R: Rng + ?Sized>(&self, rng: &mut R, config: &SketchConfig) -> Option<Color32> {
        match self {
            Self::Idle => None,
            Self::Pen => Some(config.ink),
            Self::Eraser => Some(config.paper),
            Self::Rainbow => Some(color::random_color(rng)),
            Self::CustomColor(color) => Some(*color),
        }
    }

    /// Whether painting with this tool attaches the eraser transition
    pub fn applies_transition(&self) -> bool {
        matches!(self, Self::Eraser)
    }
}
