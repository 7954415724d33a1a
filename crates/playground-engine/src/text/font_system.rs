use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::Font;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Average advance as a fraction of the font size, used when a family has
/// no loaded font.
const FALLBACK_ADVANCE: f32 = 0.5;

/// Font families available for text measurement.
///
/// Families without a loaded face are measured with a fixed per-character
/// advance of `size * 0.5`, which keeps layout deterministic on hosts that
/// never load font files.
pub struct FontSystem {
    fonts: HashMap<String, fontdue::Font>,
    warned: RefCell<HashSet<String>>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: HashMap::new(), warned: RefCell::new(HashSet::new()) }
    }

    /// Parses a TrueType or OpenType font and registers it under `family`.
    ///
    /// A later load for the same family replaces the earlier face.
    pub fn load_font(&mut self, family: impl Into<String>, bytes: &[u8]) -> Result<(), FontLoadError> {
        let family = family.into();
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        log::debug!("loaded font family {family:?}");
        self.fonts.insert(family, font);
        Ok(())
    }

    #[inline]
    pub fn has_family(&self, family: &str) -> bool {
        self.fonts.contains_key(family)
    }

    /// Advance width of `text` set in `font`, in logical pixels.
    #[must_use]
    pub fn measure_width(&self, text: &str, font: &Font) -> f32 {
        let Some(face) = self.fonts.get(&font.family) else {
            if self.warned.borrow_mut().insert(font.family.clone()) {
                log::warn!("font family {:?} not loaded; using fallback advances", font.family);
            }
            return text.chars().count() as f32 * font.size * FALLBACK_ADVANCE;
        };

        // Unrounded pen advance plus pair kerning; fontdue's layout snaps each
        // advance to whole pixels.
        let mut width = 0.0f32;
        let mut prev: Option<char> = None;
        for ch in text.chars() {
            if let Some(left) = prev {
                width += face.horizontal_kern(left, ch, font.size).unwrap_or(0.0);
            }
            width += face.metrics(ch, font.size).advance_width;
            prev = Some(ch);
        }
        width
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FontSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontSystem")
            .field("families", &self.fonts.keys().collect::<Vec<_>>())
            .finish()
    }
}
