//! Export of rendered album posters.
//!
//! The poster is written as a PNG named after the album and artist, e.g.
//! `Race_for_Space-Public_Service_Broadcasting.png`.

pub mod png;

use std::fs;
use std::path::{Path, PathBuf};

use apg_core::{AlbumInfo, ExportError};
use apg_render_2d::RenderTarget;

pub use png::encode_png;

/// File name for an album's poster: `{album}-{artist}.png` with every space
/// replaced by an underscore.
pub fn output_file_name(album: &AlbumInfo) -> String {
    format!("{}-{}.png", album.album_name, album.artist_name).replace(' ', "_")
}

/// Encode the target as PNG and write it to `path`, returning the path.
pub fn export_png(target: &RenderTarget, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let path = path.as_ref();
    let data = encode_png(target.pixels(), target.width(), target.height())?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &data)?;
    log::info!("Exported {} ({} bytes)", path.display(), data.len());
    Ok(path.to_path_buf())
}

/// Export the album's poster into `dir` under [`output_file_name`].
pub fn export_poster(
    target: &RenderTarget,
    album: &AlbumInfo,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, ExportError> {
    export_png(target, dir.as_ref().join(output_file_name(album)))
}
