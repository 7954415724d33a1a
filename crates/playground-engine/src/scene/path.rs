use crate::coords::{Rect, Vec2};

/// One element of a path, in the order it was appended.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Clockwise arc; angles in radians.
    Arc { center: Vec2, radius: f32, start: f32, end: f32 },
    Rect(Rect),
}

/// Path under construction between `begin_path` and `fill`/`stroke`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    #[inline]
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Straight sub-paths as `(from, to)` pairs.
    ///
    /// Consecutive `LineTo`s chain from the previous point; a `LineTo` with no
    /// current point starts one instead of drawing. Arcs and rects are skipped
    /// and leave no current point for a following `LineTo`.
    pub fn line_pairs(&self) -> Vec<(Vec2, Vec2)> {
        let mut out = Vec::new();
        let mut cursor: Option<Vec2> = None;
        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) => cursor = Some(p),
                PathSegment::LineTo(p) => {
                    if let Some(from) = cursor {
                        out.push((from, p));
                    }
                    cursor = Some(p);
                }
                PathSegment::Arc { .. } | PathSegment::Rect(_) => cursor = None,
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_pairs_follow_the_pen() {
        let mut path = Path::new();
        path.push(PathSegment::MoveTo(Vec2::new(0.0, 0.0)));
        path.push(PathSegment::LineTo(Vec2::new(1.0, 0.0)));
        path.push(PathSegment::LineTo(Vec2::new(1.0, 1.0)));
        path.push(PathSegment::MoveTo(Vec2::new(5.0, 5.0)));
        path.push(PathSegment::LineTo(Vec2::new(6.0, 5.0)));

        assert_eq!(
            path.line_pairs(),
            vec![
                (Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)),
                (Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)),
                (Vec2::new(5.0, 5.0), Vec2::new(6.0, 5.0)),
            ]
        );
    }

    #[test]
    fn line_to_without_pen_only_moves() {
        let mut path = Path::new();
        path.push(PathSegment::Arc { center: Vec2::zero(), radius: 1.0, start: 0.0, end: 1.0 });
        path.push(PathSegment::LineTo(Vec2::new(3.0, 3.0)));
        path.push(PathSegment::LineTo(Vec2::new(4.0, 3.0)));
        assert_eq!(path.line_pairs(), vec![(Vec2::new(3.0, 3.0), Vec2::new(4.0, 3.0))]);
    }
}
