use ::winit::dpi::{PhysicalPosition, PhysicalSize};
use ::winit::event::{ElementState, Ime, MouseButton, Touch, TouchPhase, WindowEvent};
use ::winit::keyboard::{KeyCode, PhysicalKey};

use crate::coords::Vec2;
use crate::input::{InputEvent, Key, KeyEvent, TouchContact};

/// Translates winit `WindowEvent`s into kernel [`InputEvent`]s.
///
/// Keeps the small amount of state the translation needs: the window scale
/// factor, the last pointer position (winit clicks carry no coordinates) and
/// whether an IME composition is in progress.
#[derive(Debug, Clone)]
pub struct WinitTranslator {
    scale_factor: f64,
    pointer: Vec2,
    composing: bool,
}

impl WinitTranslator {
    pub fn new(scale_factor: f64) -> Self {
        Self { scale_factor, pointer: Vec2::zero(), composing: false }
    }

    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    #[inline]
    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Returns `None` for events the kernel does not consume.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                None
            }

            WindowEvent::Resized(size) => {
                let (width, height) = self.to_logical_size(*size);
                Some(InputEvent::Resized { width, height })
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = self.to_logical(*position);
                Some(InputEvent::PointerMoved(self.pointer))
            }

            // A click completes on release of the primary button.
            WindowEvent::MouseInput { state: ElementState::Released, button: MouseButton::Left, .. } => {
                Some(InputEvent::PointerClicked(self.pointer))
            }

            WindowEvent::Touch(Touch { phase, location, id, .. }) => {
                let position = self.to_logical(*location);
                let contacts = vec![TouchContact { id: *id, position }];
                Some(match phase {
                    TouchPhase::Started => InputEvent::TouchStarted(contacts),
                    TouchPhase::Moved => InputEvent::TouchMoved(contacts),
                    TouchPhase::Ended | TouchPhase::Cancelled => InputEvent::TouchEnded(contacts),
                })
            }

            WindowEvent::KeyboardInput { event, is_synthetic, .. } => {
                if *is_synthetic || event.state != ElementState::Pressed {
                    return None;
                }
                Some(InputEvent::Key(KeyEvent {
                    key: map_key(event.physical_key),
                    composing: self.composing,
                }))
            }

            WindowEvent::Ime(ime) => {
                match ime {
                    Ime::Preedit(text, _) => self.composing = !text.is_empty(),
                    Ime::Commit(_) | Ime::Disabled => self.composing = false,
                    Ime::Enabled => {}
                }
                None
            }

            _ => None,
        }
    }

    fn to_logical(&self, pos: PhysicalPosition<f64>) -> Vec2 {
        let logical = pos.to_logical::<f64>(self.scale_factor);
        Vec2::new(logical.x as f32, logical.y as f32)
    }

    fn to_logical_size(&self, size: PhysicalSize<u32>) -> (u32, u32) {
        let logical = size.to_logical::<f64>(self.scale_factor);
        (logical.width.round() as u32, logical.height.round() as u32)
    }
}

impl Default for WinitTranslator {
    fn default() -> Self {
        Self::new(1.0)
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Space => Key::Space,

            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,

            other => Key::Unknown(other as u32),
        },

        // winit 0.30 uses NativeKeyCode; no stable numeric is guaranteed here.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::winit::event::DeviceId;

    fn device() -> DeviceId {
        #[allow(unused_unsafe)]
        unsafe {
            DeviceId::dummy()
        }
    }

    #[test]
    fn cursor_position_is_scaled_to_logical() {
        let mut t = WinitTranslator::new(2.0);
        let ev = WindowEvent::CursorMoved { device_id: device(), position: PhysicalPosition::new(200.0, 100.0) };
        assert_eq!(t.translate(&ev), Some(InputEvent::PointerMoved(Vec2::new(100.0, 50.0))));
    }

    #[test]
    fn left_release_clicks_at_last_pointer() {
        let mut t = WinitTranslator::new(1.0);
        t.translate(&WindowEvent::CursorMoved { device_id: device(), position: PhysicalPosition::new(30.0, 40.0) });

        let press = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Left,
        };
        let release = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Released,
            button: MouseButton::Left,
        };
        let right = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Released,
            button: MouseButton::Right,
        };
        assert_eq!(t.translate(&press), None);
        assert_eq!(t.translate(&right), None);
        assert_eq!(t.translate(&release), Some(InputEvent::PointerClicked(Vec2::new(30.0, 40.0))));
    }

    #[test]
    fn resize_reports_logical_size() {
        let mut t = WinitTranslator::new(2.0);
        let ev = WindowEvent::Resized(PhysicalSize::new(2000, 800));
        assert_eq!(t.translate(&ev), Some(InputEvent::Resized { width: 1000, height: 400 }));
    }

    #[test]
    fn preedit_tracks_composition() {
        let mut t = WinitTranslator::default();
        assert_eq!(t.translate(&WindowEvent::Ime(Ime::Preedit("か".to_string(), Some((0, 3))))), None);
        assert!(t.is_composing());
        t.translate(&WindowEvent::Ime(Ime::Commit("か".to_string())));
        assert!(!t.is_composing());
        t.translate(&WindowEvent::Ime(Ime::Preedit(String::new(), None)));
        assert!(!t.is_composing());
    }

    #[test]
    fn escape_maps_to_escape() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Space)), Key::Space);
        assert!(matches!(map_key(PhysicalKey::Code(KeyCode::KeyQ)), Key::Unknown(_)));
    }
}
