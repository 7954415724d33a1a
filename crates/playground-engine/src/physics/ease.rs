/// Quadratic ease-out: `1 - (1 - x)^2`.
///
/// Meant for `x` in `[0, 1]`, where it rises monotonically from 0 to 1.
/// Values outside that range are not clamped.
#[inline]
pub fn ease_out_quad(x: f32) -> f32 {
    1.0 - (1.0 - x) * (1.0 - x)
}
