use std::fmt;

use crate::coords::Vec2;

/// Keyboard key identifier.
///
/// Only keys the kernel or common pages react to get their own variant;
/// everything else maps to `Key::Unknown` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

/// Key press.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    /// True while an IME composition session is active.
    pub composing: bool,
}

impl KeyEvent {
    #[inline]
    pub const fn new(key: Key) -> Self {
        Self { key, composing: false }
    }

    #[inline]
    pub const fn composing(key: Key) -> Self {
        Self { key, composing: true }
    }

    /// Whether this press advances the debug overlay level.
    #[inline]
    pub fn cycles_debug(&self) -> bool {
        self.composing || self.key == Key::Escape
    }
}

/// Platform-assigned touch identifier, stable from start to end of a contact.
pub type TouchId = u64;

/// One changed contact in a touch event, in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchContact {
    pub id: TouchId,
    pub position: Vec2,
}

impl TouchContact {
    #[inline]
    pub const fn new(id: TouchId, x: f32, y: f32) -> Self {
        Self { id, position: Vec2::new(x, y) }
    }
}

/// Platform-agnostic input events consumed by [`super::SimulationState`].
///
/// Coordinates are client-space logical pixels. Touch events carry every
/// contact that changed in that event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(Vec2),
    PointerClicked(Vec2),
    Key(KeyEvent),
    TouchStarted(Vec<TouchContact>),
    TouchMoved(Vec<TouchContact>),
    TouchEnded(Vec<TouchContact>),
    Resized { width: u32, height: u32 },
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
