/// Logical size of the drawing surface, with cached halves.
///
/// Invariant: `w2 == w / 2` and `h2 == h / 2`. Fields are private so the only
/// way to change the size is [`Viewport::new`] / [`Viewport::resize`], which
/// rewrite all four values together.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    w: f32,
    w2: f32,
    h: f32,
    h2: f32,
}

impl Viewport {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        let w = width as f32;
        let h = height as f32;
        Self { w, w2: w / 2.0, h, h2: h / 2.0 }
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.w
    }

    #[inline]
    pub fn w2(&self) -> f32 {
        self.w2
    }

    #[inline]
    pub fn h(&self) -> f32 {
        self.h
    }

    #[inline]
    pub fn h2(&self) -> f32 {
        self.h2
    }

    /// Replaces the size and both halves in one assignment.
    #[inline]
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.w > 0.0 && self.h > 0.0 && self.w.is_finite() && self.h.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_caches_halves() {
        let v = Viewport::new(800, 600);
        assert_eq!((v.w(), v.w2(), v.h(), v.h2()), (800.0, 400.0, 600.0, 300.0));
    }

    #[test]
    fn resize_rewrites_all_fields() {
        let mut v = Viewport::new(800, 600);
        v.resize(1000, 400);
        assert_eq!(v, Viewport::new(1000, 400));
        assert_eq!(v.w2(), 500.0);
        assert_eq!(v.h2(), 200.0);
    }

    #[test]
    fn odd_sizes_keep_exact_halves() {
        let v = Viewport::new(801, 3);
        assert_eq!(v.w2(), 400.5);
        assert_eq!(v.h2(), 1.5);
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0, 10).is_valid());
        assert!(Viewport::new(1, 1).is_valid());
    }
}
