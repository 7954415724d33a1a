use super::{Vec2, Viewport};

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Square of side `side` centered on `center`.
    #[inline]
    pub fn centered_square(center: Vec2, side: f32) -> Self {
        let half = side / 2.0;
        Rect::new(center.x - half, center.y - half, side, side)
    }

    /// Full-surface rectangle for `viewport`.
    #[inline]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Rect::new(0.0, 0.0, viewport.w(), viewport.h())
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Shrinks every edge inward by `by`.
    ///
    /// The result may be empty (or have negative size) when `by` exceeds half
    /// the smaller side; no clamping is applied.
    #[inline]
    pub fn inset(self, by: f32) -> Self {
        Rect::new(
            self.origin.x + by,
            self.origin.y + by,
            self.size.x - 2.0 * by,
            self.size.y - 2.0 * by,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn centered_square_straddles_center() {
        let sq = Rect::centered_square(Vec2::new(50.0, 40.0), 20.0);
        assert_eq!(sq, r(40.0, 30.0, 20.0, 20.0));
        assert_eq!(sq.center(), Vec2::new(50.0, 40.0));
    }

    #[test]
    fn from_viewport_covers_surface() {
        let rect = Rect::from_viewport(&Viewport::new(800, 600));
        assert_eq!(rect, r(0.0, 0.0, 800.0, 600.0));
        assert_eq!(rect.max(), Vec2::new(800.0, 600.0));
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_each_edge() {
        let rect = r(0.0, 0.0, 800.0, 600.0).inset(10.0);
        assert_eq!(rect, r(10.0, 10.0, 780.0, 580.0));
    }

    #[test]
    fn inset_past_half_is_empty() {
        assert!(r(0.0, 0.0, 10.0, 100.0).inset(6.0).is_empty());
        assert!(!r(0.0, 0.0, 10.0, 100.0).inset(4.0).is_empty());
    }
}
