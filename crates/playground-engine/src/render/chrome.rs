use std::borrow::Cow;

use crate::coords::{Rect, Vec2, Viewport};
use crate::surface::Surface;
use crate::text::Font;

/// Pixel constants for the decorative chrome.
///
/// The defaults are part of the visual contract; pages should only override
/// them deliberately.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeStyle {
    pub font_family: Cow<'static, str>,
    /// Inset of the outermost frame from the surface edge.
    pub border_inset: f32,
    /// Extra inset between consecutive frames.
    pub border_gap: f32,
    /// Line widths of the three frames, outermost first.
    pub frame_widths: [f32; 3],
    pub title_size: f32,
    /// Secondary caption drawn under every title.
    pub signature: Cow<'static, str>,
    pub signature_size: f32,
    /// Baseline distance between title and signature.
    pub signature_drop: f32,
    /// Offset of the stroked copy of embossed text, up and to the left.
    pub emboss: f32,
    pub divider_width: f32,
    pub divider_dash: [f32; 3],
    /// Distance of the divider ends from the top and bottom edges.
    pub divider_margin: f32,
    pub caption_size: f32,
    pub heading_size: f32,
}

impl ChromeStyle {
    pub const DEFAULT: ChromeStyle = ChromeStyle {
        font_family: Cow::Borrowed("Bebas Neue"),
        border_inset: 10.0,
        border_gap: 5.0,
        frame_widths: [2.0, 5.0, 2.0],
        title_size: 100.0,
        signature: Cow::Borrowed("/Htsuyoshi"),
        signature_size: 50.0,
        signature_drop: 50.0,
        emboss: 3.0,
        divider_width: 2.0,
        divider_dash: [5.0, 1.0, 5.0],
        divider_margin: 30.0,
        caption_size: 30.0,
        heading_size: 60.0,
    };

    #[inline]
    fn font(&self, size: f32) -> Font {
        Font::new(size, self.font_family.clone())
    }

    /// Three concentric frames plus the centered, embossed title and signature.
    ///
    /// `title_offset` shifts both title and signature.
    pub fn draw_border<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        title: &str,
        viewport: &Viewport,
        title_offset: Vec2,
    ) {
        let outer = Rect::from_viewport(viewport);
        let mut inset = self.border_inset;
        for width in self.frame_widths {
            surface.set_line_width(width);
            surface.stroke_rect(outer.inset(inset));
            inset += self.border_gap;
        }

        surface.begin_path();
        let x = viewport.w2() + title_offset.x;
        let y = viewport.h2() + title_offset.y;
        self.embossed_text(surface, title, self.title_size, x, y);
        self.embossed_text(surface, &self.signature, self.signature_size, x, y + self.signature_drop);
    }

    /// Dashed divider around the add/remove halves with their captions.
    ///
    /// Adding happens on the right half, removing on the left.
    pub fn draw_buttons<S: Surface + ?Sized>(&self, surface: &mut S, viewport: &Viewport) {
        self.divider(surface, viewport, viewport.h2() - 90.0, viewport.h2() + 65.0);

        let y = viewport.h() / 8.0 + 50.0;
        surface.set_font(self.font(self.caption_size));
        self.centered_fill(surface, "ADD", viewport.w() * 3.0 / 4.0, y);
        self.centered_fill(surface, "RM", viewport.w() / 4.0, y);
    }

    /// Dashed divider and the click instructions of the cellular-automaton page.
    pub fn draw_life_buttons<S: Surface + ?Sized>(&self, surface: &mut S, viewport: &Viewport) {
        self.divider(surface, viewport, viewport.h2() - 290.0, viewport.h2() - 135.0);

        let left = viewport.w2() / 2.0;
        let right = viewport.w2() * 3.0 / 2.0;
        let heading_y = viewport.h2();
        let caption_y = viewport.h2() + 50.0;

        self.embossed_text(surface, "Left click", self.heading_size, left, heading_y);
        self.embossed_text(surface, "Pause/Start", self.caption_size, left, caption_y);
        self.embossed_text(surface, "Right click", self.heading_size, right, heading_y);
        self.embossed_text(surface, "Invert", self.caption_size, right, caption_y);
    }

    /// Vertical dashed line at `w2` with a gap from `gap_top` to `gap_bottom`.
    fn divider<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        viewport: &Viewport,
        gap_top: f32,
        gap_bottom: f32,
    ) {
        let x = viewport.w2();
        surface.set_line_width(self.divider_width);
        surface.set_line_dash(&self.divider_dash);
        surface.begin_path();
        surface.move_to(Vec2::new(x, self.divider_margin));
        surface.line_to(Vec2::new(x, gap_top));
        surface.move_to(Vec2::new(x, gap_bottom));
        surface.line_to(Vec2::new(x, viewport.h() - self.divider_margin));
        surface.stroke();
        surface.set_line_dash(&[]);
    }

    fn centered_fill<S: Surface + ?Sized>(&self, surface: &mut S, text: &str, center_x: f32, y: f32) {
        let half = surface.measure_text(text) / 2.0;
        surface.fill_text(text, Vec2::new(center_x - half, y));
    }

    fn embossed_text<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        text: &str,
        size: f32,
        center_x: f32,
        y: f32,
    ) {
        surface.set_font(self.font(size));
        let half = surface.measure_text(text) / 2.0;
        surface.fill_text(text, Vec2::new(center_x - half, y));
        surface.stroke_text(text, Vec2::new(center_x - self.emboss - half, y - self.emboss));
    }
}

impl Default for ChromeStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// [`ChromeStyle::draw_border`] with the default style.
pub fn draw_border<S: Surface + ?Sized>(surface: &mut S, title: &str, viewport: &Viewport, title_offset: Vec2) {
    ChromeStyle::DEFAULT.draw_border(surface, title, viewport, title_offset);
}

/// [`ChromeStyle::draw_buttons`] with the default style.
pub fn draw_buttons<S: Surface + ?Sized>(surface: &mut S, viewport: &Viewport) {
    ChromeStyle::DEFAULT.draw_buttons(surface, viewport);
}

/// [`ChromeStyle::draw_life_buttons`] with the default style.
pub fn draw_life_buttons<S: Surface + ?Sized>(surface: &mut S, viewport: &Viewport) {
    ChromeStyle::DEFAULT.draw_life_buttons(surface, viewport);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DrawCmd, TextCmd, TextPaint};
    use crate::surface::RecordingSurface;

    fn texts(surface: &RecordingSurface) -> Vec<&TextCmd> {
        surface
            .draw_list()
            .items()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    // ── border ────────────────────────────────────────────────────────────

    #[test]
    fn border_frames_are_inset_10_15_20() {
        let vp = Viewport::new(800, 600);
        let mut s = RecordingSurface::new(800, 600);
        draw_border(&mut s, "BALLS", &vp, Vec2::zero());

        let frames: Vec<_> = s
            .draw_list()
            .items()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::StrokeRect(r) => Some((r.rect, r.stroke.width)),
                _ => None,
            })
            .collect();
        assert_eq!(
            frames,
            vec![
                (Rect::new(10.0, 10.0, 780.0, 580.0), 2.0),
                (Rect::new(15.0, 15.0, 770.0, 570.0), 5.0),
                (Rect::new(20.0, 20.0, 760.0, 560.0), 2.0),
            ]
        );
    }

    #[test]
    fn title_is_centered_and_embossed() {
        let vp = Viewport::new(800, 600);
        let mut s = RecordingSurface::new(800, 600);
        draw_border(&mut s, "BALLS", &vp, Vec2::zero());

        // Fallback measurement: 5 chars * 100px * 0.5 = 250 wide.
        let t = texts(&s);
        assert_eq!(t[0].text, "BALLS");
        assert_eq!(t[0].font, Font::new(100.0, "Bebas Neue"));
        assert!(t[0].is_fill());
        assert_eq!(t[0].origin, Vec2::new(275.0, 300.0));
        assert!(!t[1].is_fill());
        assert_eq!(t[1].origin, Vec2::new(272.0, 297.0));
    }

    #[test]
    fn signature_sits_50px_below_at_half_size() {
        let vp = Viewport::new(800, 600);
        let mut s = RecordingSurface::new(800, 600);
        draw_border(&mut s, "BALLS", &vp, Vec2::new(10.0, -20.0));

        // "/Htsuyoshi": 10 chars * 50px * 0.5 = 250 wide.
        let t = texts(&s);
        assert_eq!(t[2].text, "/Htsuyoshi");
        assert_eq!(t[2].font.size, 50.0);
        assert_eq!(t[2].origin, Vec2::new(400.0 - 125.0 + 10.0, 300.0 + 50.0 - 20.0));
        assert_eq!(t[3].origin, Vec2::new(400.0 - 3.0 - 125.0 + 10.0, 300.0 + 50.0 - 3.0 - 20.0));
    }

    // ── buttons ───────────────────────────────────────────────────────────

    #[test]
    fn buttons_divider_is_dashed_then_reset() {
        let vp = Viewport::new(800, 600);
        let mut s = RecordingSurface::new(800, 600);
        draw_buttons(&mut s, &vp);

        let DrawCmd::StrokePath(div) = &s.draw_list().items()[0] else { panic!("expected divider") };
        assert_eq!(div.stroke.dash, vec![5.0, 1.0, 5.0]);
        assert_eq!(div.stroke.width, 2.0);
        assert_eq!(
            div.path.line_pairs(),
            vec![
                (Vec2::new(400.0, 30.0), Vec2::new(400.0, 210.0)),
                (Vec2::new(400.0, 365.0), Vec2::new(400.0, 570.0)),
            ]
        );
        assert!(s.line_dash().is_empty());
    }

    #[test]
    fn buttons_captions_at_quarter_points() {
        let vp = Viewport::new(800, 600);
        let mut s = RecordingSurface::new(800, 600);
        draw_buttons(&mut s, &vp);

        // "ADD" = 45 wide, "RM" = 30 wide at 30px fallback.
        let t = texts(&s);
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].text, "ADD");
        assert_eq!(t[0].origin, Vec2::new(600.0 - 22.5, 75.0 + 50.0));
        assert_eq!(t[1].text, "RM");
        assert_eq!(t[1].origin, Vec2::new(200.0 - 15.0, 125.0));
        assert!(t.iter().all(|c| c.paint == TextPaint::Fill(crate::paint::Color::BLACK)));
    }

    // ── life buttons ──────────────────────────────────────────────────────

    #[test]
    fn life_divider_gap_sits_above_center() {
        let vp = Viewport::new(1000, 800);
        let mut s = RecordingSurface::new(1000, 800);
        draw_life_buttons(&mut s, &vp);

        let DrawCmd::StrokePath(div) = &s.draw_list().items()[0] else { panic!("expected divider") };
        assert_eq!(
            div.path.line_pairs(),
            vec![
                (Vec2::new(500.0, 30.0), Vec2::new(500.0, 110.0)),
                (Vec2::new(500.0, 265.0), Vec2::new(500.0, 770.0)),
            ]
        );
    }

    #[test]
    fn life_captions_are_embossed_pairs() {
        let vp = Viewport::new(1000, 800);
        let mut s = RecordingSurface::new(1000, 800);
        draw_life_buttons(&mut s, &vp);

        let t = texts(&s);
        let fills: Vec<_> = t.iter().filter(|c| c.is_fill()).map(|c| (c.text.as_str(), c.origin)).collect();
        // Widths: "Left click" 10*60*0.5 = 300, "Pause/Start" 11*30*0.5 = 165.
        assert_eq!(
            fills,
            vec![
                ("Left click", Vec2::new(250.0 - 150.0, 400.0)),
                ("Pause/Start", Vec2::new(250.0 - 82.5, 450.0)),
                ("Right click", Vec2::new(750.0 - 165.0, 400.0)),
                ("Invert", Vec2::new(750.0 - 45.0, 450.0)),
            ]
        );
        assert_eq!(t.len(), 8);
        assert_eq!(t[1].origin, Vec2::new(250.0 - 3.0 - 150.0, 397.0));
    }
}
