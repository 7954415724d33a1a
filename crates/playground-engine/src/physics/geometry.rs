use crate::coords::Vec2;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
    (p1 - p2).length()
}

/// Unit vector pointing from `p1` towards `p2`.
///
/// The caller must ensure `p1 != p2`. For coincident points the division by a
/// zero distance yields non-finite components; check with [`Vec2::is_finite`]
/// or guard with [`distance`] beforehand.
#[inline]
pub fn direction(p1: Vec2, p2: Vec2) -> Vec2 {
    (p2 - p1) / distance(p1, p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    // ── distance ──────────────────────────────────────────────────────────

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)),
            (Vec2::new(-12.5, 7.0), Vec2::new(40.0, -3.25)),
            (Vec2::new(1e3, 1e3), Vec2::new(-1e3, 2.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Vec2::new(17.0, -4.5);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn distance_pythagorean_triple() {
        assert_eq!(distance(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0)), 5.0);
    }

    // ── direction ─────────────────────────────────────────────────────────

    #[test]
    fn direction_has_unit_length() {
        let cases = [
            (Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)),
            (Vec2::new(10.0, 10.0), Vec2::new(-5.0, 2.0)),
            (Vec2::new(0.0, 0.0), Vec2::new(0.001, 0.0)),
            (Vec2::new(-300.0, 90.0), Vec2::new(250.0, -800.0)),
        ];
        for (a, b) in cases {
            assert!((direction(a, b).length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn direction_points_from_first_to_second() {
        let d = direction(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        assert!((d.x - 0.6).abs() < EPS);
        assert!((d.y - 0.8).abs() < EPS);
    }

    #[test]
    fn direction_of_coincident_points_is_not_finite() {
        let p = Vec2::new(2.0, 2.0);
        assert!(!direction(p, p).is_finite());
    }
}
