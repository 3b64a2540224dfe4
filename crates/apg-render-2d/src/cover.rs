//! Cover art loading.

use std::path::Path;

use apg_core::AssetLoadError;
use image::{imageops::FilterType, RgbaImage};

/// Load cover art and scale it to a `side` × `side` square.
///
/// The image is stretched, not cropped: non-square artwork is distorted to
/// fill the square exactly.
pub fn load_cover_art(path: impl AsRef<Path>, side: u32) -> Result<RgbaImage, AssetLoadError> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|e| AssetLoadError::Image {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    log::info!(
        "Loaded cover art {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    let rgba = image.to_rgba8();
    if rgba.width() == side && rgba.height() == side {
        return Ok(rgba);
    }
    Ok(image::imageops::resize(&rgba, side, side, FilterType::Lanczos3))
}
