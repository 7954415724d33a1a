use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Path};

use super::StrokeStyle;

/// Filled path payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPathCmd {
    pub path: Path,
    pub color: Color,
}

/// Stroked path payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePathCmd {
    pub path: Path,
    pub stroke: StrokeStyle,
}

impl DrawList {
    #[inline]
    pub fn push_fill_path(&mut self, path: Path, color: Color) {
        self.push(DrawCmd::FillPath(FillPathCmd { path, color }));
    }

    #[inline]
    pub fn push_stroke_path(&mut self, path: Path, stroke: StrokeStyle) {
        self.push(DrawCmd::StrokePath(StrokePathCmd { path, stroke }));
    }
}
