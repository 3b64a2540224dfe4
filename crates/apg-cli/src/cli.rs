//! Command-line arguments.

use std::path::{Path, PathBuf};

use apg_core::ArgumentError;
use clap::Parser;

pub(crate) const DEFAULT_ARTWORK: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../assets/example_data/raceforspace.png"
);
const DEFAULT_INFO: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../assets/example_data/raceforspace.txt"
);
const DEFAULT_TITLE_FONT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../assets/fonts/DejaVuSans-Bold.ttf"
);
const DEFAULT_BODY_FONT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../assets/fonts/DejaVuSansCondensed-Bold.ttf"
);

/// Generate a printable poster from album cover art and a track list.
#[derive(Debug, Parser)]
#[command(name = "apg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Cover art image (PNG or JPEG)
    #[arg(value_name = "ARTWORK", default_value = DEFAULT_ARTWORK)]
    pub artwork: PathBuf,

    /// Album info file: four header lines then one track per line, or JSON
    #[arg(value_name = "INFO", default_value = DEFAULT_INFO)]
    pub info: PathBuf,

    /// JSON file overriding poster and render options
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory the poster is written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Font for the album name
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TITLE_FONT)]
    pub title_font: PathBuf,

    /// Font for every other line of text
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BODY_FONT)]
    pub body_font: PathBuf,

    /// Render and export without opening a window
    #[arg(long)]
    pub no_preview: bool,

    /// Show the preview but do not write the poster
    #[arg(long)]
    pub no_export: bool,
}

impl Cli {
    /// Reject argument combinations clap cannot express, before any asset
    /// is loaded.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        if self.no_preview && self.no_export {
            return Err(ArgumentError::Invalid {
                name: "--no-export".into(),
                reason: "cannot be combined with --no-preview; there would be nothing to do".into(),
            });
        }
        require_file("ARTWORK", &self.artwork)?;
        require_file("INFO", &self.info)?;
        if let Some(config) = &self.config {
            require_file("--config", config)?;
        }
        if self.output_dir.is_file() {
            return Err(ArgumentError::Invalid {
                name: "--output-dir".into(),
                reason: format!("{} is a file", self.output_dir.display()),
            });
        }
        Ok(())
    }
}

fn require_file(name: &str, path: &Path) -> Result<(), ArgumentError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ArgumentError::Invalid {
            name: name.into(),
            reason: format!("{} does not exist or is not a file", path.display()),
        })
    }
}
