//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::winit` translates window-system events into [`InputEvent`]s;
//! [`SimulationState`] turns those into mutations of the simulation.

mod state;
mod touch;
mod types;

pub mod platform;

pub use state::{BatchOutcome, SimulationConfig, SimulationState};
pub use touch::{TouchPoint, TouchRemoval, TouchTracker, TouchUpdate};
pub use types::{InputEvent, Key, KeyEvent, TouchContact, TouchId};
