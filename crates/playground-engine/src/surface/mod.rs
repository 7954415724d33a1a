//! Drawing surface abstraction.
//!
//! [`Surface`] is the 2D immediate-mode context the renderers draw through:
//! rectangle strokes, path building with fill/stroke, text measurement and
//! text fill/stroke, plus a resizable pixel buffer. State setters (line width,
//! dash, font, colors) persist until changed or until the buffer is resized,
//! like a canvas context.
//!
//! [`RecordingSurface`] implements it by recording into a [`crate::scene::DrawList`].

mod recording;

pub use recording::RecordingSurface;

use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Color;
use crate::text::Font;

pub trait Surface {
    /// Pixel buffer size as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Reallocates the pixel buffer and resets drawing state (line width,
    /// dash, font, colors, current path) to defaults, as a canvas does.
    fn set_size(&mut self, width: u32, height: u32);

    fn set_line_width(&mut self, width: f32);

    /// Dash pattern for subsequent strokes; an empty slice restores solid lines.
    fn set_line_dash(&mut self, segments: &[f32]);

    fn set_font(&mut self, font: Font);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    /// Strokes a rectangle outline without touching the current path.
    fn stroke_rect(&mut self, rect: Rect);

    /// Discards the current path and starts an empty one.
    fn begin_path(&mut self);

    fn move_to(&mut self, p: Vec2);

    fn line_to(&mut self, p: Vec2);

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32);

    fn rect(&mut self, rect: Rect);

    /// Fills the current path with the fill color. The path is kept.
    fn fill(&mut self);

    /// Strokes the current path with the stroke state. The path is kept.
    fn stroke(&mut self);

    /// Advance width of `text` in the current font.
    fn measure_text(&self, text: &str) -> f32;

    /// Fills `text` with its baseline starting at `origin`.
    fn fill_text(&mut self, text: &str, origin: Vec2);

    fn stroke_text(&mut self, text: &str, origin: Vec2);
}

/// Resizes `viewport` and the pixel buffer of `surface` together.
///
/// Both are updated before the call returns, so no caller ever observes a
/// viewport whose halves, or whose buffer, disagree with its size.
pub fn resize<S: Surface + ?Sized>(viewport: &mut Viewport, surface: &mut S, width: u32, height: u32) {
    let next = Viewport::new(width, height);
    surface.set_size(width, height);
    *viewport = next;
    log::debug!("surface resized to {width}x{height}");
}
