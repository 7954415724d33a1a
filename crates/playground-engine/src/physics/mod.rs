//! Geometry and motion primitives.
//!
//! Everything here is a pure function over values; no state is kept between
//! calls apart from the thread-local RNG behind the `random_*` helpers.

mod ease;
mod geometry;
mod random;

pub use ease::ease_out_quad;
pub use geometry::{direction, distance};
pub use random::{random_bool, random_bool_with, random_int, random_int_with};
