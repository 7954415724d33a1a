use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::text::Font;

use super::StrokeStyle;

/// How a text run is painted.
#[derive(Debug, Clone, PartialEq)]
pub enum TextPaint {
    Fill(Color),
    Stroke(StrokeStyle),
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: Font,
    /// Left end of the alphabetic baseline in logical pixels.
    pub origin: Vec2,
    pub paint: TextPaint,
}

impl TextCmd {
    #[inline]
    pub fn is_fill(&self) -> bool {
        matches!(self.paint, TextPaint::Fill(_))
    }
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, text: impl Into<String>, font: Font, origin: Vec2, paint: TextPaint) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            origin,
            paint,
        }));
    }
}
