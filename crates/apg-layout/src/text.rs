//! Text measurement for layout.
//!
//! The layout engine never touches glyph data. It asks a [`TextMeasure`]
//! implementation for the rendered size of a string and positions elements
//! from that answer. Measurement must be a pure function of
//! `(text, font, size)`: the engine measures each element once and reuses the
//! result for every element chained off it.

use apg_core::FontId;

/// Rendered size of a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

impl TextSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Capability: measure text rendered with a font at a size.
pub trait TextMeasure {
    /// Measure `text`. Multi-line text reports the widest line and the height
    /// of all lines.
    fn measure(&self, text: &str, font: FontId, size: f32) -> TextSize;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure(&self, text: &str, font: FontId, size: f32) -> TextSize {
        (**self).measure(text, font, size)
    }
}

/// Character-count based measurement.
///
/// Deterministic and font-free, so layouts can be computed in tests and
/// benchmarks without a graphics context.
#[derive(Debug, Clone, Copy)]
pub struct EstimatedMeasure {
    /// Average advance as a fraction of the font size.
    pub char_width: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
}

impl Default for EstimatedMeasure {
    fn default() -> Self {
        Self {
            // Average character width is roughly 0.5-0.6 of the font size for
            // proportional fonts
            char_width: 0.55,
            line_height: 1.0,
        }
    }
}

impl TextMeasure for EstimatedMeasure {
    fn measure(&self, text: &str, _font: FontId, size: f32) -> TextSize {
        let mut widest = 0usize;
        let mut lines = 0usize;
        for line in text.split('\n') {
            widest = widest.max(line.chars().count());
            lines += 1;
        }
        TextSize {
            width: widest as f32 * size * self.char_width,
            height: lines as f32 * size * self.line_height,
        }
    }
}

/// Word-wrap `text` to `max_width`.
///
/// Explicit newlines always start a new row. Within a row, words are packed
/// greedily; a single word wider than `max_width` gets a row of its own.
pub fn wrap_text(
    text: &str,
    font: FontId,
    size: f32,
    max_width: f32,
    measure: &dyn TextMeasure,
) -> Vec<String> {
    let mut rows = Vec::new();

    for line in text.lines() {
        let mut current = String::new();
        for word in line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure.measure(&candidate, font, size).width <= max_width {
                current = candidate;
            } else {
                rows.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        rows.push(current);
    }

    rows
}
