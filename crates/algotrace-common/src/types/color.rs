//! Colors for graph coloring.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Names of the fixed coloring palette, in trial order.
pub const PALETTE: [&str; 20] = [
    "red",
    "green",
    "blue",
    "yellow",
    "magenta",
    "cyan",
    "orange",
    "purple",
    "pink",
    "brown",
    "gold",
    "lime",
    "dark-blue",
    "deep-pink",
    "blue-violet",
    "chartreuse",
    "chocolate",
    "orange-red",
    "sea-green",
    "steel-blue",
];

/// A palette entry, identified by its position in [`PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u8);

impl Color {
    /// Returns the color at `index`, or `None` past the end of the palette.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        (index < PALETTE.len()).then(|| Self(index as u8))
    }

    /// Returns the palette index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the palette name.
    #[must_use]
    pub fn name(self) -> &'static str {
        PALETTE[self.index()]
    }

    /// Iterates the first `size` palette colors in trial order.
    ///
    /// `size` is clamped to the palette length.
    pub fn palette(size: usize) -> impl Iterator<Item = Self> {
        (0..size.min(PALETTE.len())).map(|i| Self(i as u8))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order() {
        let names: Vec<_> = Color::palette(3).map(Color::name).collect();
        assert_eq!(names, vec!["red", "green", "blue"]);
    }

    #[test]
    fn test_palette_is_clamped() {
        assert_eq!(Color::palette(100).count(), PALETTE.len());
        assert!(Color::new(PALETTE.len()).is_none());
        assert_eq!(Color::new(19).map(Color::name), Some("steel-blue"));
    }
}
