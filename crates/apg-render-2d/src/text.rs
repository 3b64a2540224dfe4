//! Font loading, text measurement, and glyph rasterization.

use std::path::Path;

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use apg_core::{AssetLoadError, FontId, RenderError};
use apg_layout::{TextMeasure, TextSize};

use crate::primitives::TextPrimitive;
use crate::RenderTarget;

/// Fonts indexed by [`FontId`].
pub struct FontBook {
    fonts: Vec<FontVec>,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook").field("fonts", &self.fonts.len()).finish()
    }
}

impl FontBook {
    /// Load the title and body faces so they match [`FontId::TITLE`] and
    /// [`FontId::BODY`].
    pub fn load(title: impl AsRef<Path>, body: impl AsRef<Path>) -> Result<Self, AssetLoadError> {
        Ok(Self {
            fonts: vec![load_font(title.as_ref())?, load_font(body.as_ref())?],
        })
    }

    /// Build a font book from raw font data, in [`FontId`] order.
    pub fn from_bytes(fonts: Vec<Vec<u8>>) -> Result<Self, AssetLoadError> {
        let fonts = fonts
            .into_iter()
            .enumerate()
            .map(|(i, data)| {
                FontVec::try_from_vec(data).map_err(|e| AssetLoadError::Font {
                    path: format!("<memory #{i}>").into(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fonts })
    }

    pub fn get(&self, id: FontId) -> Option<&FontVec> {
        self.fonts.get(id.0)
    }

    /// Rasterize a text primitive into the target.
    pub fn draw_text(&self, target: &mut RenderTarget, text: &TextPrimitive) -> Result<(), RenderError> {
        let face = self
            .get(text.font)
            .ok_or(RenderError::UnknownFont { id: text.font.0 })?;
        let scale = PxScale::from(text.font_size);
        let scaled = face.as_scaled(scale);
        let (r, g, b, a) = text.color.to_rgba8();
        let alpha = a as f32 / 255.0;

        let mut caret = point(text.x, text.y + scaled.ascent());
        let mut previous: Option<GlyphId> = None;

        for c in text.text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret.x += scaled.kern(prev, id);
            }
            previous = Some(id);

            let glyph = id.with_scale_and_position(scale, caret);
            caret.x += scaled.h_advance(id);

            let Some(outline) = face.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outline.px_bounds();
            outline.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                target.blend_pixel(px, py, [r, g, b], coverage * alpha);
            });
        }

        Ok(())
    }

    fn line_width(&self, face: &FontVec, line: &str, scale: PxScale) -> f32 {
        let scaled = face.as_scaled(scale);
        let mut width = 0.0;
        let mut previous: Option<GlyphId> = None;
        for c in line.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        width
    }
}

impl TextMeasure for FontBook {
    fn measure(&self, text: &str, font: FontId, size: f32) -> TextSize {
        let Some(face) = self.get(font) else {
            log::warn!("Measuring with unknown font handle {}", font.0);
            return TextSize::default();
        };
        let scale = PxScale::from(size);
        let line_height = face.as_scaled(scale).height();

        let mut width = 0.0_f32;
        let mut lines = 0;
        for line in text.split('\n') {
            width = width.max(self.line_width(face, line, scale));
            lines += 1;
        }
        TextSize::new(width, lines as f32 * line_height)
    }
}

fn load_font(path: &Path) -> Result<FontVec, AssetLoadError> {
    let data = std::fs::read(path).map_err(|source| AssetLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let font = FontVec::try_from_vec(data).map_err(|e| AssetLoadError::Font {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    log::debug!("Loaded font {}", path.display());
    Ok(font)
}
