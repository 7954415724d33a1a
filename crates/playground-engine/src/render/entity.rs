use std::borrow::Cow;
use std::f32::consts::TAU;

use crate::coords::{Rect, Vec2};
use crate::debug::DebugLevel;
use crate::entity::{Entity, Shape};
use crate::surface::Surface;
use crate::text::Font;

/// Constants for the per-entity debug overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Velocity multiplier for the trajectory hint.
    pub trajectory_scale: f32,
    pub label_family: Cow<'static, str>,
    pub label_size: f32,
    /// Label baseline sits this many entity sizes above the center.
    pub label_lift: f32,
}

impl OverlayStyle {
    pub const DEFAULT: OverlayStyle = OverlayStyle {
        trajectory_scale: 3.0,
        label_family: Cow::Borrowed("Bebas Neue"),
        label_size: 25.0,
        label_lift: 1.3,
    };

    /// Fills the shape, then strokes its outline together with the overlay
    /// for `level` in a single path.
    ///
    /// Line width is inherited from the surface state.
    pub fn draw_entity<S: Surface + ?Sized>(&self, surface: &mut S, entity: &Entity, level: DebugLevel) {
        let center = entity.position;
        let size = entity.size();

        surface.begin_path();
        match entity.shape {
            Shape::Circle { radius } => surface.arc(center, radius, 0.0, TAU),
            Shape::Square { side } => surface.rect(Rect::centered_square(center, side)),
        }
        surface.set_fill_color(entity.style.fill);
        surface.fill();

        surface.set_stroke_color(entity.style.border);

        if level.shows(DebugLevel::Velocity) {
            surface.move_to(center);
            surface.line_to(center + entity.velocity * self.trajectory_scale);
        }

        if level.shows(DebugLevel::CornerTicks) {
            for (sx, sy) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
                let near = Vec2::new(sx * size, sy * size);
                let far = near * 2.0;
                surface.move_to(center + Vec2::new(near.x, far.y));
                surface.line_to(center + far);
                surface.line_to(center + Vec2::new(far.x, near.y));
            }
        }

        if level.shows(DebugLevel::Coordinates) {
            let label = coordinate_label(center);
            surface.set_font(Font::new(self.label_size, self.label_family.clone()));
            let half = surface.measure_text(&label) / 2.0;
            surface.fill_text(&label, Vec2::new(center.x - half, center.y - size * self.label_lift));
        }

        if level.shows(DebugLevel::Crosshair) {
            let (w, h) = surface.size();
            surface.move_to(Vec2::new(0.0, center.y));
            surface.line_to(Vec2::new(w as f32, center.y));
            surface.move_to(Vec2::new(center.x, 0.0));
            surface.line_to(Vec2::new(center.x, h as f32));
        }

        surface.stroke();
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `(x, y)` to two decimals. Negative zero prints as `0.00`.
fn coordinate_label(p: Vec2) -> String {
    format!("({:.2}, {:.2})", p.x + 0.0, p.y + 0.0)
}

/// [`OverlayStyle::draw_entity`] with the default overlay constants.
pub fn draw_entity<S: Surface + ?Sized>(surface: &mut S, entity: &Entity, level: DebugLevel) {
    OverlayStyle::DEFAULT.draw_entity(surface, entity, level);
}

/// Draws `entities` in order at one debug level.
pub fn draw_entities<S: Surface + ?Sized>(surface: &mut S, entities: &[Entity], level: DebugLevel) {
    let style = OverlayStyle::DEFAULT;
    for entity in entities {
        style.draw_entity(surface, entity, level);
    }
}
