#![deny(unsafe_code)]
//! CPU rendering for generative poster scenes.
//!
//! Sits between `poster-core` (which produces a [`Scene`](poster_core::Scene))
//! and display sinks such as the CLI. [`pixel`] paints layers into a
//! `vello_cpu` pixmap, [`title`] lays out the optional caption, and
//! [`snapshot`] writes the result as a PNG.

pub mod pixel;
pub mod title;

#[cfg(feature = "png")]
pub mod snapshot;

use poster_core::PosterError;

pub use pixel::{compose_canvas, compose_canvas_with_title, rasterize, Canvas};
pub use title::TitleFont;

/// Default canvas width: the original 7-inch figure at 100 dpi.
pub const DEFAULT_WIDTH: usize = 700;
/// Default canvas height: the original 10-inch figure at 100 dpi.
pub const DEFAULT_HEIGHT: usize = 1000;
/// Largest width or height a pixmap can address.
pub const MAX_SIDE: usize = u16::MAX as usize;
/// Largest pixel count accepted, 8192 x 8192 (256 MiB of RGBA8).
pub const MAX_PIXELS: usize = 1 << 26;

/// Output size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOptions {
    pub width: usize,
    pub height: usize,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl RasterOptions {
    /// Rejects zero sizes, sides above [`MAX_SIDE`] and more than [`MAX_PIXELS`] pixels.
    pub fn validate(&self) -> Result<(), PosterError> {
        self.pixmap_size().map(|_| ())
    }

    pub(crate) fn pixmap_size(&self) -> Result<(u16, u16), PosterError> {
        if self.width == 0 || self.height == 0 {
            return Err(PosterError::InvalidDimensions);
        }
        let w = u16::try_from(self.width).map_err(|_| PosterError::InvalidDimensions)?;
        let h = u16::try_from(self.height).map_err(|_| PosterError::InvalidDimensions)?;
        self.width
            .checked_mul(self.height)
            .filter(|&n| n <= MAX_PIXELS)
            .ok_or(PosterError::InvalidDimensions)?;
        Ok((w, h))
    }
}
