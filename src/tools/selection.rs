/// Buttons in the tool panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolButton {
    Pen,
    Eraser,
    Rainbow,
    /// The label next to the color picker
    CustomColor,
    Clear,
    Resize,
}

impl ToolButton {
    pub const ALL: [ToolButton; 6] = [
        ToolButton::Pen,
        ToolButton::Eraser,
        ToolButton::Rainbow,
        ToolButton::CustomColor,
        ToolButton::Clear,
        ToolButton::Resize,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolButton::Pen => "✏ Pen",
            ToolButton::Eraser => "⌫ Eraser",
            ToolButton::Rainbow => "🌈 Rainbow",
            ToolButton::CustomColor => "🎨 Pick color",
            ToolButton::Clear => "🗑 Clear",
            ToolButton::Resize => "⊞ Change size",
        }
    }

    /// Resize never shows as selected
    pub fn can_be_marked(&self) -> bool {
        !matches!(self, ToolButton::Resize)
    }
}

/// Exclusive "selected" marker across the tool buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolSelection {
    marked: Option<ToolButton>,
}

impl ToolSelection {
    /// Strip the marker from every button, then mark `button` unless it is
    /// the resize button.
    pub fn select(&mut self, button: ToolButton) {
        self.marked = None;
        if button.can_be_marked() {
            self.marked = Some(button);
        }
    }

    pub fn clear(&mut self) {
        self.marked = None;
    }

    pub fn marked(&self) -> Option<ToolButton> {
        self.marked
    }

    pub fn is_marked(&self, button: ToolButton) -> bool {
        self.marked == Some(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_exclusive() {
        let mut selection = ToolSelection::default();
        selection.select(ToolButton::Pen);
        selection.select(ToolButton::Rainbow);
        let marked: Vec<_> = ToolButton::ALL
            .iter()
            .filter(|button| selection.is_marked(**button))
            .collect();
        assert_eq!(marked, vec![&ToolButton::Rainbow]);
    }

    #[test]
    fn test_resize_strips_without_marking() {
        let mut selection = ToolSelection::default();
        selection.select(ToolButton::Eraser);
        selection.select(ToolButton::Resize);
        assert_eq!(selection.marked(), None);
    }
}
