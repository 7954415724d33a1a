use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawList, Path, PathSegment, StrokeStyle, TextPaint};
use crate::text::{Font, FontSystem};

use super::Surface;

/// [`Surface`] that records every paint operation into a [`DrawList`].
///
/// Each recorded command snapshots the fill/stroke state active when it was
/// issued, so the list can be replayed by any backend or asserted on in tests.
/// Text is measured through the owned [`FontSystem`].
#[derive(Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    line_width: f32,
    line_dash: Vec<f32>,
    font: Font,
    fill_color: Color,
    stroke_color: Color,
    path: Path,
    fonts: FontSystem,
    list: DrawList,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_fonts(width, height, FontSystem::new())
    }

    pub fn with_fonts(width: u32, height: u32, fonts: FontSystem) -> Self {
        Self {
            width,
            height,
            line_width: 1.0,
            line_dash: Vec::new(),
            font: Font::default(),
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            path: Path::new(),
            fonts,
            list: DrawList::new(),
        }
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    /// Clears recorded commands, e.g. at the start of a frame.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }

    #[inline]
    pub fn fonts_mut(&mut self) -> &mut FontSystem {
        &mut self.fonts
    }

    #[inline]
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    #[inline]
    pub fn line_dash(&self) -> &[f32] {
        &self.line_dash
    }

    #[inline]
    pub fn font(&self) -> &Font {
        &self.font
    }

    fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            width: self.line_width,
            color: self.stroke_color,
            dash: self.line_dash.clone(),
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.line_width = 1.0;
        self.line_dash.clear();
        self.font = Font::default();
        self.fill_color = Color::BLACK;
        self.stroke_color = Color::BLACK;
        self.path = Path::new();
    }

    fn set_line_width(&mut self, width: f32) {
        // Canvas ignores non-positive and non-finite widths.
        if width > 0.0 && width.is_finite() {
            self.line_width = width;
        }
    }

    fn set_line_dash(&mut self, segments: &[f32]) {
        self.line_dash = segments.to_vec();
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let stroke = self.stroke_style();
        self.list.push_stroke_rect(rect, stroke);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Vec2) {
        self.path.push(PathSegment::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.path.push(PathSegment::LineTo(p));
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) {
        self.path.push(PathSegment::Arc { center, radius, start, end });
    }

    fn rect(&mut self, rect: Rect) {
        self.path.push(PathSegment::Rect(rect));
    }

    fn fill(&mut self) {
        self.list.push_fill_path(self.path.clone(), self.fill_color);
    }

    fn stroke(&mut self) {
        let stroke = self.stroke_style();
        self.list.push_stroke_path(self.path.clone(), stroke);
    }

    fn measure_text(&self, text: &str) -> f32 {
        self.fonts.measure_width(text, &self.font)
    }

    fn fill_text(&mut self, text: &str, origin: Vec2) {
        self.list
            .push_text(text, self.font.clone(), origin, TextPaint::Fill(self.fill_color));
    }

    fn stroke_text(&mut self, text: &str, origin: Vec2) {
        let stroke = self.stroke_style();
        self.list
            .push_text(text, self.font.clone(), origin, TextPaint::Stroke(stroke));
    }
}
