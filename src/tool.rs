use egui::Color32;

use crate::config::PadConfig;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ToolMode {
    #[default]
    Pen,
    Eraser,
}

impl ToolMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Pen => Self::Eraser,
            Self::Eraser => Self::Pen,
        }
    }

    /// The color and width this tool paints with under `config`
    pub fn style(self, config: &PadConfig) -> StrokeStyle {
        match self {
            Self::Pen => StrokeStyle::new(config.pen_color, config.pen_width),
            Self::Eraser => StrokeStyle::new(config.eraser_color, config.eraser_width),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Eraser => "Eraser",
        }
    }
}

/// Color and width used when stroking a segment.
///
/// Caps and joins are always round.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct StrokeStyle {
    pub color: Color32,
    pub width: f32,
}

impl StrokeStyle {
    pub fn new(color: Color32, width: f32) -> Self {
        Self { color, width }
    }
}
