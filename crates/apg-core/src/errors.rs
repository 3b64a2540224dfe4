//! Error types for the poster generator.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for a poster run.
#[derive(Debug, Error)]
pub enum ApgError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    AssetLoad(#[from] AssetLoadError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Bad command-line input or configuration.
#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("Invalid argument '{name}': {reason}")]
    Invalid { name: String, reason: String },

    #[error("Cannot read config file {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

/// Cover art or font missing or corrupt.
#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("Failed to load image {}: {reason}", .path.display())]
    Image { path: PathBuf, reason: String },

    #[error("Failed to load font {}: {reason}", .path.display())]
    Font { path: PathBuf, reason: String },

    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Malformed album info source.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Missing {field} (expected on content line {line})")]
    MissingField { field: &'static str, line: usize },

    #[error("Invalid JSON album info: {reason}")]
    Json { reason: String },

    #[error("Unsupported info file format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors while resolving the layout graph.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Layout cycle detected involving node {node}")]
    CycleDetected { node: String },

    #[error("Layout node {node} anchors on unknown node")]
    UnknownNode { node: String },

    #[error("No room for the track list: {space}px left below the divider")]
    NoTrackSpace { space: f32 },

    #[error("Track font would be {size}px for {rows} rows; at least 1px is required")]
    TrackFontTooSmall { size: f32, rows: usize },
}

/// Errors while rasterizing a scene.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unknown font handle {id}")]
    UnknownFont { id: usize },

    #[error("Render target is {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Preview window failed: {reason}")]
    Preview { reason: String },
}

/// Errors while writing the final image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding failed: {reason}")]
    Encode { reason: String },

    #[error("Pixel buffer is {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
