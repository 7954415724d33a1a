use crate::coords::Rect;
use crate::scene::{DrawCmd, DrawList};

use super::StrokeStyle;

/// Rectangle outline payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRectCmd {
    pub rect: Rect,
    pub stroke: StrokeStyle,
}

impl DrawList {
    /// Records a rectangle outline.
    #[inline]
    pub fn push_stroke_rect(&mut self, rect: Rect, stroke: StrokeStyle) {
        self.push(DrawCmd::StrokeRect(StrokeRectCmd { rect, stroke }));
    }
}
