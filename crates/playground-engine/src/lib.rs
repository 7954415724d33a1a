//! Playground engine crate.
//!
//! Shared kernel for small 2D simulation pages: geometry primitives, the
//! entity/viewport model, chrome and debug-overlay rendering onto an abstract
//! surface, and translation of pointer, touch, keyboard and resize input
//! into state mutations. Pages own their update loops and game rules.

pub mod coords;
pub mod debug;
pub mod entity;
pub mod input;
pub mod logging;
pub mod paint;
pub mod physics;
pub mod render;
pub mod scene;
pub mod surface;
pub mod text;
