//! RGB color type used by palettes, layers, and the background.
//!
//! Channels are `f64` in [0, 1] with no alpha; opacity travels separately on
//! each [`Layer`](crate::scene::Layer). Colors serialize as full-precision
//! `{r, g, b}` objects so that scene dumps stay bit-reproducible. The hex form
//! is only used for human input such as a background override.

use crate::error::PosterError;
use serde::{Deserialize, Serialize};

/// An RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// The poster background, an off-white paper tone.
    pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.97);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels in R, G, B order.
    pub fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `PosterError::InvalidColor` if the input is not a 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Color, PosterError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(PosterError::InvalidColor(format!(
                "expected 6 hex digits, got '{hex}'"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|e| PosterError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Color {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Formats the color as `"#rrggbb"`, clamping and rounding each channel to 8 bits.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Quantizes the color to 8-bit channels.
    pub fn to_rgb8(self) -> [u8; 3] {
        self.channels()
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BACKGROUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_with_and_without_hash() {
        let a = Color::from_hex("#ff8000").unwrap();
        let b = Color::from_hex("FF8000").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.r, 1.0);
        assert!((a.g - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(a.b, 0.0);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(matches!(
            Color::from_hex("#fff"),
            Err(PosterError::InvalidColor(_))
        ));
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        let err = Color::from_hex("#zz0000").unwrap_err();
        assert!(err.to_string().contains("red"), "got: {err}");
    }

    #[test]
    fn from_hex_rejects_multibyte_input_without_panicking() {
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn to_hex_clamps_out_of_range_channels() {
        assert_eq!(Color::new(1.5, -0.2, 0.5).to_hex(), "#ff0080");
    }

    #[test]
    fn background_matches_paper_tone() {
        assert_eq!(Color::BACKGROUND.to_rgb8(), [250, 250, 247]);
        assert_eq!(Color::default(), Color::BACKGROUND);
    }

    #[test]
    fn serializes_as_full_precision_object() {
        let c = Color::new(0.1, 0.2, 0.30000000000000004);
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["b"], 0.30000000000000004);
        let back: Color = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
    }
}
