//! Layout computation for album posters.
//!
//! This crate turns album metadata into positioned text elements on a fixed
//! portrait canvas.
//!
//! # Architecture
//!
//! 1. **Column splitting**: the track list becomes one or two columns plus a
//!    row count used to size the track font
//! 2. **Dependency graph**: every element is anchored on another one and the
//!    graph is resolved in one topological pass
//! 3. **Text measurement**: sizes come from a [`TextMeasure`] implementation,
//!    so layouts can be computed without a graphics context
//!
//! # Example
//!
//! ```
//! use apg_core::AlbumInfo;
//! use apg_layout::{compute_poster_layout, CanvasGeometry, EstimatedMeasure, PosterOptions};
//! use glam::Vec2;
//!
//! let album = AlbumInfo {
//!     album_name: "Race for Space".into(),
//!     artist_name: "Public Service Broadcasting".into(),
//!     album_date: "2015".into(),
//!     album_duration: "43:38".into(),
//!     track_names: vec!["Sputnik".into(), "Gagarin".into()],
//! };
//! let options = PosterOptions::default();
//! let side = CanvasGeometry::new(&options).cover_side();
//! let layout =
//!     compute_poster_layout(&album, Vec2::splat(side), &options, &EstimatedMeasure::default())?;
//! assert_eq!(layout.columns.count, 10);
//! # Ok::<(), apg_core::LayoutError>(())
//! ```

mod columns;
mod compute;
mod element;
mod graph;
mod text;

pub use columns::{split, split_with_rows, Columns, STANDARD_ROWS_PER_COLUMN};
pub use compute::{
    compute_poster_layout, track_font_size, CanvasGeometry, Divider, PosterLayout, PosterOptions,
};
pub use element::{DrawTarget, TextBox, TextLine};
pub use graph::{Anchor, Bounds, LayoutGraph, LayoutNode, LayoutNodeId, ResolvedLayout, ResolvedNode};
pub use text::{wrap_text, EstimatedMeasure, TextMeasure, TextSize};
