use crate::scene::shapes::path::{FillPathCmd, StrokePathCmd};
use crate::scene::shapes::rect::StrokeRectCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new command module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    StrokeRect(StrokeRectCmd),
    FillPath(FillPathCmd),
    StrokePath(StrokePathCmd),
    Text(TextCmd),
}
