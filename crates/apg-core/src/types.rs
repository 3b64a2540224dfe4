//! Core value types shared by every stage of the poster pipeline.

/// Handle to a loaded font.
///
/// The layout engine only passes handles around; the font book that owns the
/// glyph data resolves them when measuring or rasterizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontId(pub usize);

impl FontId {
    /// Heavy face used for the album title.
    pub const TITLE: FontId = FontId(0);
    /// Bold face used for every other text element.
    pub const BODY: FontId = FontId(1);
}

/// A color value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Convert to 8-bit RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }

    /// Convert to a float array for vertex colors.
    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Off-white poster background (245, 245, 245).
    pub const RAY_WHITE: Self = Self::rgb(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_white_is_245() {
        assert_eq!(Color::RAY_WHITE.to_rgba8(), (245, 245, 245, 255));
    }

    #[test]
    fn test_to_rgba8_clamps() {
        let color = Color { r: 1.5, g: -0.2, b: 0.5, a: 1.0 };
        assert_eq!(color.to_rgba8(), (255, 0, 128, 255));
    }
}
