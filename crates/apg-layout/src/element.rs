//! Positioned text elements.
//!
//! An element is anchored at a reference point and shifted by an offset;
//! `reference_point + offset` is where it is drawn. Offsets are derived from
//! measured sizes, which lets elements right-align (`offset.x = -length`) or
//! stack under each other without hard-coded pixel values.

use apg_core::FontId;
use glam::Vec2;

use crate::graph::Bounds;
use crate::text::{wrap_text, TextMeasure, TextSize};

/// Sink for draw operations issued by positioned elements.
pub trait DrawTarget {
    /// Draw one line of text with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, font: FontId, size: f32, position: Vec2);
}

/// A single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    text: String,
    font: FontId,
    /// Font size in pixels.
    pub size: f32,
    reference_point: Vec2,
    offset: Vec2,
    measured: TextSize,
}

impl TextLine {
    /// Create a line and measure it once.
    pub fn new(text: impl Into<String>, font: FontId, size: f32, measure: &dyn TextMeasure) -> Self {
        let text = text.into();
        let measured = measure.measure(&text, font, size);
        Self {
            text,
            font,
            size,
            reference_point: Vec2::ZERO,
            offset: Vec2::ZERO,
            measured,
        }
    }

    pub fn set_reference_point(&mut self, point: Vec2) {
        self.reference_point = point;
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn reference_point(&self) -> Vec2 {
        self.reference_point
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Final draw position: reference point plus offset.
    pub fn position(&self) -> Vec2 {
        self.reference_point + self.offset
    }

    /// Measured width of the text.
    pub fn length(&self) -> f32 {
        self.measured.width
    }

    pub fn measured(&self) -> TextSize {
        self.measured
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> FontId {
        self.font
    }

    /// Box covered by the text at its final position.
    pub fn bounds(&self) -> Bounds {
        let position = self.position();
        Bounds::new(position.x, position.y, self.measured.width, self.measured.height)
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        target.draw_text(&self.text, self.font, self.size, self.position());
    }
}

/// A multi-line block of text confined to a box.
///
/// Rows are word-wrapped to the box width at construction. Each row is
/// `size` pixels tall; a row is kept while its top edge lies inside the box,
/// so a font size rounded up to whole pixels never costs the last row.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    text: String,
    font: FontId,
    /// Font size in pixels, also the row height.
    pub size: f32,
    box_size: Vec2,
    reference_point: Vec2,
    offset: Vec2,
    rows: Vec<String>,
    overflow: usize,
    content_width: f32,
}

impl TextBox {
    /// Create a text box, wrapping and truncating its rows once.
    pub fn new(
        text: impl Into<String>,
        font: FontId,
        size: f32,
        box_size: Vec2,
        measure: &dyn TextMeasure,
    ) -> Self {
        let text = text.into();
        let mut rows = wrap_text(&text, font, size, box_size.x, measure);

        let capacity = if size > 0.0 {
            // Epsilon keeps an exact fit from gaining a row through float error
            ((box_size.y - 1e-3) / size).ceil().max(0.0) as usize
        } else {
            0
        };
        let overflow = rows.len().saturating_sub(capacity);
        if overflow > 0 {
            log::warn!(
                "{overflow} row(s) do not fit in a {}x{} text box at size {size}",
                box_size.x,
                box_size.y
            );
            rows.truncate(capacity);
        }
        let content_width = rows
            .iter()
            .map(|row| measure.measure(row, font, size).width)
            .fold(0.0_f32, f32::max);

        Self {
            text,
            font,
            size,
            box_size,
            reference_point: Vec2::ZERO,
            offset: Vec2::ZERO,
            rows,
            overflow,
            content_width,
        }
    }

    pub fn set_reference_point(&mut self, point: Vec2) {
        self.reference_point = point;
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn reference_point(&self) -> Vec2 {
        self.reference_point
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Final draw position of the box's top-left corner.
    pub fn position(&self) -> Vec2 {
        self.reference_point + self.offset
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> FontId {
        self.font
    }

    pub fn box_size(&self) -> Vec2 {
        self.box_size
    }

    /// Rows that will be drawn, after wrapping and truncation.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Rows dropped because they did not fit the box height.
    pub fn overflow(&self) -> usize {
        self.overflow
    }

    /// Box covered by the drawn rows: as wide as the widest row.
    pub fn bounds(&self) -> Bounds {
        let position = self.position();
        Bounds::new(position.x, position.y, self.content_width, self.rows.len() as f32 * self.size)
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        let origin = self.position();
        for (i, row) in self.rows.iter().enumerate() {
            if row.is_empty() {
                continue;
            }
            let position = origin + Vec2::new(0.0, i as f32 * self.size);
            target.draw_text(row, self.font, self.size, position);
        }
    }
}
