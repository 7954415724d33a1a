//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in paint order
//! - capture the stroke/fill state that was active when each command was issued
//! - keep command-specific helpers isolated per file under `scene::shapes`

mod cmd;
mod list;
mod path;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use path::{Path, PathSegment};
pub use shapes::{FillPathCmd, StrokePathCmd, StrokeRectCmd, StrokeStyle, TextCmd, TextPaint};
