use rand::Rng;

/// Uniform integer in the inclusive range `[min, max]`, from the thread RNG.
///
/// Swapped bounds are accepted and treated as `[max, min]`.
pub fn random_int(min: i32, max: i32) -> i32 {
    random_int_with(&mut rand::rng(), min, max)
}

/// [`random_int`] with a caller-supplied RNG.
pub fn random_int_with<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}

/// Fair coin flip from the thread RNG.
pub fn random_bool() -> bool {
    random_bool_with(&mut rand::rng())
}

pub fn random_bool_with<R: Rng>(rng: &mut R) -> bool {
    rng.random_bool(0.5)
}
