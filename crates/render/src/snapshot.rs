//! PNG output of a rendered [`Canvas`].
//!
//! Feature-gated behind `png` (default on). Painting itself lives in
//! [`crate::pixel`].

use std::path::Path;

use poster_core::PosterError;

use crate::pixel::Canvas;

/// Writes `canvas` to `path` as a PNG.
///
/// Returns `PosterError::Io` on encode or write failure.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), PosterError> {
    let w = u32::try_from(canvas.width()).map_err(|_| PosterError::InvalidDimensions)?;
    let h = u32::try_from(canvas.height()).map_err(|_| PosterError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, canvas.as_rgba8().to_vec())
        .ok_or_else(|| PosterError::Io("RGBA buffer size mismatch".into()))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| PosterError::Io(format!("{}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), "poster written");
    Ok(())
}
