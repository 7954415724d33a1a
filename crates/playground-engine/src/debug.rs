//! Debug overlay level.

use std::fmt;

/// How much diagnostic overlay is drawn per entity.
///
/// Levels are cumulative: each one draws everything the lower levels draw.
/// The only transition is [`DebugLevel::cycle`], which wraps after
/// [`DebugLevel::Crosshair`] back to [`DebugLevel::Off`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DebugLevel {
    #[default]
    Off,
    /// Line from the center along `velocity * 3`.
    Velocity,
    /// L-shaped clearance ticks at the four diagonal corners.
    CornerTicks,
    /// Position label above the shape.
    Coordinates,
    /// Full-surface guide lines through the center.
    Crosshair,
}

impl DebugLevel {
    /// Number of levels, `Off` included.
    pub const COUNT: usize = 5;

    pub const ALL: [DebugLevel; Self::COUNT] = [
        DebugLevel::Off,
        DebugLevel::Velocity,
        DebugLevel::CornerTicks,
        DebugLevel::Coordinates,
        DebugLevel::Crosshair,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Level for `index`, wrapping modulo [`DebugLevel::COUNT`].
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Next level, wrapping to `Off`.
    #[inline]
    #[must_use]
    pub fn cycle(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// True when this level draws `layer`'s overlay.
    #[inline]
    pub fn shows(self, layer: DebugLevel) -> bool {
        self >= layer
    }
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DebugLevel::Off => "off",
            DebugLevel::Velocity => "velocity",
            DebugLevel::CornerTicks => "corner-ticks",
            DebugLevel::Coordinates => "coordinates",
            DebugLevel::Crosshair => "crosshair",
        };
        write!(f, "{name} ({})", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_returns_to_start() {
        for start in DebugLevel::ALL {
            let mut level = start;
            for i in 1..=DebugLevel::COUNT {
                level = level.cycle();
                assert_eq!(level.index(), (start.index() + i) % DebugLevel::COUNT);
            }
            assert_eq!(level, start);
        }
    }

    #[test]
    fn crosshair_wraps_to_off() {
        assert_eq!(DebugLevel::Crosshair.cycle(), DebugLevel::Off);
    }

    #[test]
    fn levels_are_cumulative() {
        assert!(DebugLevel::Crosshair.shows(DebugLevel::Velocity));
        assert!(DebugLevel::Coordinates.shows(DebugLevel::CornerTicks));
        assert!(!DebugLevel::Velocity.shows(DebugLevel::CornerTicks));
        assert!(!DebugLevel::Off.shows(DebugLevel::Velocity));
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(DebugLevel::from_index(7), DebugLevel::CornerTicks);
    }

    #[test]
    fn display_names_level() {
        assert_eq!(DebugLevel::Coordinates.to_string(), "coordinates (3)");
    }
}
