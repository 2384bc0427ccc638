//! Palette generation from a seeded random source.
//!
//! A [`PaletteMode`] fixes a per-channel uniform range; [`generate_palette`]
//! draws each color's R, G, then B from those ranges. The order of draws is
//! part of the reproducibility contract.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::prng::RandomSource;

/// Color family a palette is drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PaletteMode {
    /// Soft colors: every channel in [0.5, 1).
    #[default]
    Pastel,
    /// Unrestricted RGB.
    Vivid,
    /// Reds, oranges, browns.
    Autumn,
    /// Teals and blues.
    Ocean,
}

impl PaletteMode {
    /// Every mode, in menu order.
    pub const ALL: [PaletteMode; 4] = [
        PaletteMode::Pastel,
        PaletteMode::Vivid,
        PaletteMode::Autumn,
        PaletteMode::Ocean,
    ];

    /// Parses a mode name. Unknown names fall back to [`PaletteMode::Pastel`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "pastel" => PaletteMode::Pastel,
            "vivid" => PaletteMode::Vivid,
            "autumn" => PaletteMode::Autumn,
            "ocean" => PaletteMode::Ocean,
            other => {
                tracing::warn!(mode = other, "unknown palette mode, using pastel");
                PaletteMode::Pastel
            }
        }
    }

    /// Lowercase name as accepted by [`PaletteMode::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            PaletteMode::Pastel => "pastel",
            PaletteMode::Vivid => "vivid",
            PaletteMode::Autumn => "autumn",
            PaletteMode::Ocean => "ocean",
        }
    }

    /// Names of all modes.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.name()).collect()
    }

    /// Uniform sampling range for the R, G, and B channels.
    pub fn channel_ranges(self) -> [Range<f64>; 3] {
        match self {
            PaletteMode::Pastel => [0.5..1.0, 0.5..1.0, 0.5..1.0],
            PaletteMode::Vivid => [0.0..1.0, 0.0..1.0, 0.0..1.0],
            PaletteMode::Autumn => [0.5..1.0, 0.3..0.8, 0.0..0.2],
            PaletteMode::Ocean => [0.0..0.2, 0.3..0.7, 0.5..1.0],
        }
    }

    /// Draws one color, consuming three values (R, G, B) from `rng`.
    pub fn sample(self, rng: &mut impl RandomSource) -> Color {
        let [r, g, b] = self.channel_ranges();
        let r = rng.uniform(r.start, r.end);
        let g = rng.uniform(g.start, g.end);
        let b = rng.uniform(b.start, b.end);
        Color { r, g, b }
    }
}

impl From<String> for PaletteMode {
    fn from(name: String) -> Self {
        PaletteMode::from_name(&name)
    }
}

impl fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered list of colors that layers pick from with replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Picks a color uniformly at random, consuming one draw.
    ///
    /// Returns `None` (without drawing) when the palette is empty.
    pub fn choose(&self, rng: &mut impl RandomSource) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        self.get(rng.index(self.colors.len()))
    }
}

/// Generates `count` colors of the given mode, in draw order.
pub fn generate_palette(count: usize, mode: PaletteMode, rng: &mut impl RandomSource) -> Palette {
    Palette::new((0..count).map(|_| mode.sample(rng)).collect())
}
