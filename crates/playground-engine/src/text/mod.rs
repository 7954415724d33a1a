//! Text: font descriptors and width measurement.

mod font;
mod font_system;

pub use font::Font;
pub use font_system::{FontLoadError, FontSystem};
