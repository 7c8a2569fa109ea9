//! PNG output of a rendered [`RasterSurface`].
//!
//! Feature-gated behind `png` (default on) so the wasm crate can depend on
//! the scene without pulling in `image`.

use circle_art_core::error::EngineError;
use std::path::Path;

use crate::raster::RasterSurface;

/// Writes the surface's pixels as a PNG file.
///
/// Returns `EngineError::Io` if the buffer does not match the pixmap size or
/// the write fails.
pub fn write_png(surface: &RasterSurface, path: &Path) -> Result<(), EngineError> {
    let img = image::RgbaImage::from_raw(
        surface.pixel_width(),
        surface.pixel_height(),
        surface.to_rgba8(),
    )
    .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))
}
