//! Entity data model.
//!
//! An [`Entity`] is a moving, styled shape. Pages own the collection and the
//! update rules; the kernel only reads entities when drawing and appends or
//! drops them in batches when handling input.

use crate::coords::Vec2;
use crate::paint::Color;

/// Shape variant with its size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    /// Axis-aligned square centered on the entity position.
    Square { side: f32 },
}

impl Shape {
    /// Radius for circles, side length for squares.
    #[inline]
    pub fn size(self) -> f32 {
        match self {
            Shape::Circle { radius } => radius,
            Shape::Square { side } => side,
        }
    }
}

/// Fill and outline colors.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub fill: Color,
    pub border: Color,
}

impl Style {
    #[inline]
    pub const fn new(fill: Color, border: Color) -> Self {
        Self { fill, border }
    }
}

/// A renderable moving shape.
///
/// Invariant: the shape size is strictly positive. Constructors check it in
/// debug builds; pages are expected to generate valid sizes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Entity {
    pub position: Vec2,
    pub velocity: Vec2,
    pub shape: Shape,
    pub style: Style,
}

impl Entity {
    pub fn new(position: Vec2, velocity: Vec2, shape: Shape, style: Style) -> Self {
        debug_assert!(shape.size() > 0.0, "entity size must be positive, got {}", shape.size());
        Self { position, velocity, shape, style }
    }

    #[inline]
    pub fn circle(position: Vec2, velocity: Vec2, radius: f32, style: Style) -> Self {
        Self::new(position, velocity, Shape::Circle { radius }, style)
    }

    #[inline]
    pub fn square(position: Vec2, velocity: Vec2, side: f32, style: Style) -> Self {
        Self::new(position, velocity, Shape::Square { side }, style)
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.shape.size()
    }
}

/// Produces new entities on demand.
///
/// Implemented for any `FnMut() -> Entity`, so pages usually pass a closure
/// that randomizes position, velocity and style.
pub trait EntityFactory {
    fn create(&mut self) -> Entity;
}

impl<F> EntityFactory for F
where
    F: FnMut() -> Entity,
{
    #[inline]
    fn create(&mut self) -> Entity {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_follows_variant() {
        let style = Style::default();
        let c = Entity::circle(Vec2::zero(), Vec2::zero(), 12.0, style);
        let s = Entity::square(Vec2::zero(), Vec2::zero(), 30.0, style);
        assert_eq!(c.size(), 12.0);
        assert_eq!(s.size(), 30.0);
        assert!(matches!(s.shape, Shape::Square { .. }));
    }

    #[test]
    fn closures_are_factories() {
        let mut n = 0.0;
        let mut factory = || {
            n += 1.0;
            Entity::circle(Vec2::new(n, n), Vec2::zero(), 5.0, Style::default())
        };
        assert_eq!(factory.create().position, Vec2::new(1.0, 1.0));
        assert_eq!(factory.create().position, Vec2::new(2.0, 2.0));
    }

    #[test]
    #[should_panic(expected = "entity size must be positive")]
    #[cfg(debug_assertions)]
    fn zero_size_is_rejected_in_debug() {
        let _ = Entity::circle(Vec2::zero(), Vec2::zero(), 0.0, Style::default());
    }
}
