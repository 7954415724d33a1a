//! Frame rendering onto a [`crate::surface::Surface`].
//!
//! - `chrome`: decorative frame, titles and instructional captions
//! - `entity`: shapes with the cumulative debug overlay

mod chrome;
mod entity;

pub use chrome::{draw_border, draw_buttons, draw_life_buttons, ChromeStyle};
pub use entity::{draw_entities, draw_entity, OverlayStyle};
