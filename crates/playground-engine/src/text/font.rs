use std::fmt;

/// Font selection for text commands: a pixel size and a family name.
///
/// Displays in CSS shorthand, e.g. `100px Bebas Neue`.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub size: f32,
    pub family: String,
}

impl Font {
    pub fn new(size: f32, family: impl Into<String>) -> Self {
        Self { size, family: family.into() }
    }
}

impl Default for Font {
    /// Canvas default: `10px sans-serif`.
    fn default() -> Self {
        Self::new(10.0, "sans-serif")
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size, self.family)
    }
}
