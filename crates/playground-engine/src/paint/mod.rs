//! Paint model.
//!
//! Scope is solid colors only: fills, strokes and text all take a [`Color`].

pub mod color;

pub use color::{Color, ColorParseError};
