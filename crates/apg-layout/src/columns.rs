//! Splitting a track list into one or two columns.
//!
//! The split policy, with `K` standard rows per column and `n` tracks:
//!
//! | tracks        | left            | right        | row count       |
//! |---------------|-----------------|--------------|-----------------|
//! | `n <= K`      | all `n`         | empty        | `K`             |
//! | `K < n < 2K`  | first `K`       | `n - K`      | `K`             |
//! | `n >= 2K`     | `ceil(n / 2)`   | `floor(n / 2)` | `ceil(n / 2)` |
//!
//! The row count sizes the track font, so short albums keep the same type
//! size as a full ten-track column instead of ballooning to fill the page.

/// Standard rows per column.
pub const STANDARD_ROWS_PER_COLUMN: usize = 10;

/// The track listing split into two newline-joined text blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Columns {
    /// First tracks, one title per line.
    pub left: String,
    /// Remaining tracks, possibly empty.
    pub right: String,
    /// Rows the taller column must accommodate.
    pub count: usize,
    left_tracks: usize,
    right_tracks: usize,
}

impl Columns {
    /// Number of track titles in the left column.
    pub fn left_tracks(&self) -> usize {
        self.left_tracks
    }

    /// Number of track titles in the right column.
    pub fn right_tracks(&self) -> usize {
        self.right_tracks
    }
}

/// Split `tracks` using the standard column height.
pub fn split<S: AsRef<str>>(tracks: &[S]) -> Columns {
    split_with_rows(tracks, STANDARD_ROWS_PER_COLUMN)
}

/// Split `tracks` with `rows_per_column` as the one/two column threshold.
///
/// A zero threshold is treated as one row so the row count never reaches
/// zero.
pub fn split_with_rows<S: AsRef<str>>(tracks: &[S], rows_per_column: usize) -> Columns {
    let rows = rows_per_column.max(1);
    let n = tracks.len();

    let (left_tracks, count) = if n <= rows {
        (n, rows)
    } else if n < rows * 2 {
        (rows, rows)
    } else {
        let half = n.div_ceil(2);
        (half, half)
    };

    let (left, right) = tracks.split_at(left_tracks);

    Columns {
        left: join_rows(left),
        right: join_rows(right),
        count,
        left_tracks,
        right_tracks: right.len(),
    }
}

fn join_rows<S: AsRef<str>>(tracks: &[S]) -> String {
    let mut text = String::new();
    for track in tracks {
        text.push_str(track.as_ref());
        text.push('\n');
    }
    text
}
