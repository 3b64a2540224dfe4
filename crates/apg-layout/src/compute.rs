//! Poster layout computation.
//!
//! The poster is laid out top to bottom as a chain of anchored elements:
//!
//! 1. cover art, a square inset by the border
//! 2. album name, just below the cover
//! 3. artist name, directly below the album name
//! 4. divider line, a fixed gap below the artist name
//! 5. album date, right-aligned above the divider's right end
//! 6. album duration, right-aligned below the date's reference point
//! 7. two track columns hanging off the divider's left end and midpoint
//!
//! The track font size is whatever makes the column row count fill the space
//! between the divider and the bottom border.

use apg_core::{AlbumInfo, FontId, LayoutError};
use glam::Vec2;

use crate::columns::{split_with_rows, Columns, STANDARD_ROWS_PER_COLUMN};
use crate::element::{DrawTarget, TextBox, TextLine};
use crate::graph::{Anchor, Bounds, LayoutGraph};
use crate::text::TextMeasure;

/// Options for poster layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PosterOptions {
    /// Canvas width in pixels
    pub poster_width: u32,
    /// Canvas height in pixels
    pub poster_height: u32,
    /// Border as a fraction of the canvas width
    pub border_ratio: f32,
    /// Divider thickness as a fraction of the border
    pub line_thickness_ratio: f32,
    /// Album name font size as a fraction of the canvas width
    pub title_ratio: f32,
    /// Artist name font size as a fraction of the canvas width
    pub artist_ratio: f32,
    /// Date and duration font size as a fraction of the canvas width
    pub meta_ratio: f32,
    /// Rows per track column before the list is split in half
    pub rows_per_column: usize,
}

impl Default for PosterOptions {
    fn default() -> Self {
        Self {
            // A-series portrait at 300 dpi
            poster_width: 3508,
            poster_height: 4961,
            border_ratio: 0.05,
            line_thickness_ratio: 0.05,
            title_ratio: 0.075,
            artist_ratio: 0.035,
            meta_ratio: 0.025,
            rows_per_column: STANDARD_ROWS_PER_COLUMN,
        }
    }
}

/// Fixed canvas measurements derived from [`PosterOptions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    pub width: f32,
    pub height: f32,
    /// Uniform inset on all four sides, whole pixels.
    pub border: f32,
    /// Divider line thickness, whole pixels.
    pub line_thickness: f32,
}

impl CanvasGeometry {
    pub fn new(options: &PosterOptions) -> Self {
        let width = options.poster_width as f32;
        let border = (width * options.border_ratio).floor();
        Self {
            width,
            height: options.poster_height as f32,
            border,
            line_thickness: (border * options.line_thickness_ratio).floor(),
        }
    }

    /// Side of the square cover art.
    pub fn cover_side(&self) -> f32 {
        self.width - 2.0 * self.border
    }

    /// Whole canvas.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.height)
    }

    /// Area inside the border.
    pub fn content_bounds(&self) -> Bounds {
        self.bounds().inset(self.border)
    }
}

/// The horizontal rule between the header and the track list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider {
    pub start: Vec2,
    pub end: Vec2,
    pub thickness: f32,
}

impl Divider {
    pub fn length(&self) -> f32 {
        self.end.x - self.start.x
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
}

/// A fully positioned poster, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterLayout {
    pub geometry: CanvasGeometry,
    /// Where the cover art is drawn.
    pub cover: Bounds,
    pub divider: Divider,
    pub album_name: TextLine,
    pub artist_name: TextLine,
    pub album_date: TextLine,
    pub album_duration: TextLine,
    pub left_tracks: TextBox,
    pub right_tracks: TextBox,
    pub columns: Columns,
    /// Shared font size of both track columns.
    pub track_font_size: f32,
}

impl PosterLayout {
    /// Draw every text element, in paint order.
    pub fn draw_text(&self, target: &mut dyn DrawTarget) {
        self.album_name.draw(target);
        self.artist_name.draw(target);
        self.album_date.draw(target);
        self.album_duration.draw(target);
        self.left_tracks.draw(target);
        self.right_tracks.draw(target);
    }

    /// Named bounds of each text element.
    pub fn text_bounds(&self) -> [(&'static str, Bounds); 6] {
        [
            ("album_name", self.album_name.bounds()),
            ("artist_name", self.artist_name.bounds()),
            ("album_date", self.album_date.bounds()),
            ("album_duration", self.album_duration.bounds()),
            ("left_tracks", self.left_tracks.bounds()),
            ("right_tracks", self.right_tracks.bounds()),
        ]
    }
}

/// Font size that fits `count` rows into `space` pixels, rounded to whole pixels.
pub fn track_font_size(space: f32, count: usize) -> f32 {
    (f64::from(space) / count.max(1) as f64).round() as f32
}

/// Compute the poster layout for an album.
///
/// `cover_size` is the size of the cover art as it will be drawn, normally a
/// square of [`CanvasGeometry::cover_side`].
pub fn compute_poster_layout(
    album: &AlbumInfo,
    cover_size: Vec2,
    options: &PosterOptions,
    measure: &dyn TextMeasure,
) -> Result<PosterLayout, LayoutError> {
    let geometry = CanvasGeometry::new(options);
    let border = geometry.border;
    let line_length = geometry.width - 2.0 * border;

    let mut album_name = TextLine::new(
        album.album_name.as_str(),
        FontId::TITLE,
        geometry.width * options.title_ratio,
        measure,
    );
    let mut artist_name = TextLine::new(
        album.artist_name.as_str(),
        FontId::BODY,
        geometry.width * options.artist_ratio,
        measure,
    );
    let mut album_date = TextLine::new(
        album.album_date.as_str(),
        FontId::BODY,
        geometry.width * options.meta_ratio,
        measure,
    );
    let mut album_duration = TextLine::new(
        album.album_duration.as_str(),
        FontId::BODY,
        geometry.width * options.meta_ratio,
        measure,
    );

    let gap = artist_name.size * 0.1;
    let text_size = |line: &TextLine| Vec2::new(line.measured().width, line.measured().height);

    let mut graph = LayoutGraph::new();
    let cover = graph.insert("cover", Anchor::Absolute(Vec2::splat(border)), Vec2::ZERO, cover_size);
    let title = graph.insert(
        "album_name",
        Anchor::BottomLeftOf(cover),
        Vec2::new(0.0, album_name.size * 0.1),
        text_size(&album_name),
    );
    let artist = graph.insert(
        "artist_name",
        Anchor::PositionOf(title),
        Vec2::new(0.0, album_name.size),
        text_size(&artist_name),
    );
    let line_start = graph.insert(
        "divider_start",
        Anchor::PositionOf(artist),
        Vec2::new(0.0, artist_name.size * 1.1),
        Vec2::ZERO,
    );
    let line_end = graph.insert(
        "divider_end",
        Anchor::PositionOf(line_start),
        Vec2::new(line_length, 0.0),
        Vec2::ZERO,
    );
    let line_mid = graph.insert(
        "divider_mid",
        Anchor::PositionOf(line_start),
        Vec2::new(line_length / 2.0, 0.0),
        Vec2::ZERO,
    );
    let date = graph.insert(
        "album_date",
        Anchor::PositionOf(line_end),
        Vec2::new(-album_date.length(), -(gap + album_date.size)),
        text_size(&album_date),
    );
    let duration = graph.insert(
        "album_duration",
        Anchor::ReferenceOf(date),
        Vec2::new(-album_duration.length(), gap),
        text_size(&album_duration),
    );
    let left = graph.insert("left_tracks", Anchor::PositionOf(line_start), Vec2::new(0.0, gap), Vec2::ZERO);
    let right = graph.insert("right_tracks", Anchor::PositionOf(line_mid), Vec2::new(0.0, gap), Vec2::ZERO);

    let resolved = graph.resolve()?;

    let place = |line: &mut TextLine, id| -> Result<(), LayoutError> {
        let node = resolved.require(id)?;
        line.set_reference_point(node.reference_point);
        line.set_offset(node.offset);
        Ok(())
    };
    place(&mut album_name, title)?;
    place(&mut artist_name, artist)?;
    place(&mut album_date, date)?;
    place(&mut album_duration, duration)?;

    let divider = Divider {
        start: resolved.require(line_start)?.position(),
        end: resolved.require(line_end)?.position(),
        thickness: geometry.line_thickness,
    };

    let columns = split_with_rows(&album.track_names, options.rows_per_column);
    let space = (geometry.height - border) - (divider.start.y + gap);
    if space <= 0.0 {
        return Err(LayoutError::NoTrackSpace { space });
    }
    let font_size = track_font_size(space, columns.count);
    if font_size < 1.0 {
        return Err(LayoutError::TrackFontTooSmall {
            size: font_size,
            rows: columns.count,
        });
    }
    log::debug!(
        "Track columns: {} left, {} right, {} rows at {}px",
        columns.left_tracks(),
        columns.right_tracks(),
        columns.count,
        font_size
    );

    let column_box = Vec2::new(line_length / 2.0, space);
    let mut left_tracks = TextBox::new(columns.left.as_str(), FontId::BODY, font_size, column_box, measure);
    let mut right_tracks = TextBox::new(columns.right.as_str(), FontId::BODY, font_size, column_box, measure);
    for (text_box, id) in [(&mut left_tracks, left), (&mut right_tracks, right)] {
        let node = resolved.require(id)?;
        text_box.set_reference_point(node.reference_point);
        text_box.set_offset(node.offset);
    }

    let layout = PosterLayout {
        geometry,
        cover: resolved.require(cover)?.bounds(),
        divider,
        album_name,
        artist_name,
        album_date,
        album_duration,
        left_tracks,
        right_tracks,
        columns,
        track_font_size: font_size,
    };

    let content = layout.geometry.content_bounds();
    for (name, bounds) in layout.text_bounds() {
        if bounds.x < content.x || bounds.right() > content.right() {
            log::warn!(
                "{name} spans x {:.0}..{:.0}, outside the border at {:.0}..{:.0}",
                bounds.x,
                bounds.right(),
                content.x,
                content.right()
            );
        }
    }
    Ok(layout)
}
