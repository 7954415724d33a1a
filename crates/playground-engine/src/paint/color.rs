use std::fmt;
use std::str::FromStr;

/// Error returned when a CSS-style color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color: {}", self.0)
    }
}

impl std::error::Error for ColorParseError {}

/// Straight-alpha sRGB color, one byte per channel.
///
/// Parsed from the strings pages use for entity styles:
/// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and `rgba(r, g, b, a)`
/// (alpha in `rgba()` is a float in `[0, 1]`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Some(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    fn parse_functional(args: &str, with_alpha: bool) -> Option<Self> {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return None;
        }
        let r = parts[0].parse::<u8>().ok()?;
        let g = parts[1].parse::<u8>().ok()?;
        let b = parts[2].parse::<u8>().ok()?;
        let a = if with_alpha {
            let a = parts[3].parse::<f32>().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            (a * 255.0).round() as u8
        } else {
            255
        };
        Some(Color::rgba(r, g, b, a))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let parsed = if let Some(hex) = t.strip_prefix('#') {
            Color::parse_hex(hex)
        } else if let Some(args) = t.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
            Color::parse_functional(args, true)
        } else if let Some(args) = t.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            Color::parse_functional(args, false)
        } else {
            None
        };
        parsed.ok_or_else(|| ColorParseError(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Color {
        s.parse().unwrap()
    }

    // ── hex ───────────────────────────────────────────────────────────────

    #[test]
    fn short_hex_expands_nibbles() {
        assert_eq!(parse("#f80"), Color::rgb(0xff, 0x88, 0x00));
        assert_eq!(parse("#f808"), Color::rgba(0xff, 0x88, 0x00, 0x88));
    }

    #[test]
    fn long_hex() {
        assert_eq!(parse("#1e90ff"), Color::rgb(30, 144, 255));
        assert_eq!(parse("#1E90FF80"), Color::rgba(30, 144, 255, 128));
    }

    #[test]
    fn hex_rejects_bad_lengths_and_digits() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("#".parse::<Color>().is_err());
    }

    // ── functional ────────────────────────────────────────────────────────

    #[test]
    fn rgb_function() {
        assert_eq!(parse("rgb(255, 0, 10)"), Color::rgb(255, 0, 10));
    }

    #[test]
    fn rgba_function_scales_alpha() {
        assert_eq!(parse("rgba(0,0,0,0.5)"), Color::rgba(0, 0, 0, 128));
        assert!("rgba(0,0,0,2)".parse::<Color>().is_err());
    }

    #[test]
    fn unknown_syntax_reports_input() {
        let err = "tomato".parse::<Color>().unwrap_err();
        assert_eq!(err.to_string(), "invalid color: tomato");
    }

    // ── display ───────────────────────────────────────────────────────────

    #[test]
    fn display_omits_opaque_alpha() {
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }
}
