pub(crate) mod path;
pub(crate) mod rect;
pub(crate) mod text;

pub use path::{FillPathCmd, StrokePathCmd};
pub use rect::StrokeRectCmd;
pub use text::{TextCmd, TextPaint};

use crate::paint::Color;

/// Stroke state captured at the time a stroke command is issued.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color,
    /// Alternating dash/gap lengths. Empty = solid line.
    pub dash: Vec<f32>,
}

impl StrokeStyle {
    #[inline]
    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}
