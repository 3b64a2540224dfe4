//! 2D rendering for album posters.
//!
//! A [`PosterLayout`](apg_layout::PosterLayout) is turned into a [`Scene`] of
//! render commands, which the [`SoftwareRenderer`] rasterizes into an
//! explicitly passed [`RenderTarget`]. Nothing here owns a window; the preview
//! and the exporter both read the finished target.

pub mod cover;
pub mod primitives;
pub mod scene;
mod shapes;
pub mod text;

pub use cover::load_cover_art;
pub use primitives::*;
pub use scene::{build_scene, RenderOptions};
pub use shapes::{Mesh, Tessellator, Vertex};
pub use text::FontBook;

use apg_core::{types::Color, RenderError};
use image::RgbaImage;

/// An RGBA8 pixel buffer that rendering writes into.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTarget {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RenderTarget {
    /// Create a target filled with opaque white.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![255; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixels, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill the whole target with one color.
    pub fn clear(&mut self, color: Color) {
        let (r, g, b, a) = color.to_rgba8();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[r, g, b, a]);
        }
    }

    /// The pixel at (x, y), if it is inside the target.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        let p = &self.pixels[idx..idx + 4];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Blend `rgb` over the pixel at (x, y) with the given coverage.
    /// Pixels outside the target are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, rgb: [u8; 3], alpha: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        for (channel, src) in rgb.iter().enumerate() {
            let dst = self.pixels[idx + channel] as f32;
            let out = *src as f32 * alpha + dst * (1.0 - alpha);
            self.pixels[idx + channel] = out.round() as u8;
        }
        self.pixels[idx + 3] = 255;
    }

    /// Copy an image with its top-left corner at (x, y), blending by its alpha.
    pub fn blit(&mut self, image: &RgbaImage, x: i32, y: i32) {
        for (ix, iy, pixel) in image.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            self.blend_pixel(x + ix as i32, y + iy as i32, [r, g, b], a as f32 / 255.0);
        }
    }

    /// Convert into an `image` buffer.
    pub fn into_image(self) -> Result<RgbaImage, RenderError> {
        let expected = self.pixels.len();
        RgbaImage::from_raw(self.width, self.height, self.pixels)
            .ok_or(RenderError::BufferSize { expected, actual: 0 })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

/// Software rasterizer for headless rendering.
#[derive(Default)]
pub struct SoftwareRenderer {
    tessellator: Tessellator,
}

impl SoftwareRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a scene into `target`, in command order.
    ///
    /// The target is not cleared first; scenes start with a background rect.
    pub fn render(
        &mut self,
        scene: &Scene,
        fonts: &FontBook,
        target: &mut RenderTarget,
    ) -> Result<(), RenderError> {
        let mut mesh = Mesh::new();

        for command in &scene.commands {
            mesh.clear();

            match command {
                RenderCommand::Rect(rect) => {
                    self.tessellator.tessellate_rect(rect, &mut mesh);
                    rasterize_mesh(target, &mesh);
                }
                RenderCommand::Line(line) => {
                    self.tessellator.tessellate_line(line, &mut mesh);
                    rasterize_mesh(target, &mesh);
                }
                RenderCommand::Image(image) => {
                    target.blit(&image.image, image.x.round() as i32, image.y.round() as i32);
                }
                RenderCommand::Text(text) => {
                    fonts.draw_text(target, text)?;
                }
            }
        }

        log::debug!(
            "Rendered {} commands into {}x{} target",
            scene.commands.len(),
            target.width(),
            target.height()
        );
        Ok(())
    }
}

fn rasterize_mesh(target: &mut RenderTarget, mesh: &Mesh) {
    for triangle in mesh.indices.chunks_exact(3) {
        let v0 = &mesh.vertices[triangle[0] as usize];
        let v1 = &mesh.vertices[triangle[1] as usize];
        let v2 = &mesh.vertices[triangle[2] as usize];
        rasterize_triangle(target, v0, v1, v2);
    }
}

/// Rasterize a single triangle using edge functions.
fn rasterize_triangle(target: &mut RenderTarget, v0: &Vertex, v1: &Vertex, v2: &Vertex) {
    let (width, height) = (target.width() as f32, target.height() as f32);
    let xs = [v0.position[0], v1.position[0], v2.position[0]];
    let ys = [v0.position[1], v1.position[1], v2.position[1]];

    let min_x = xs.iter().copied().fold(f32::MAX, f32::min).max(0.0).floor() as i32;
    let max_x = xs.iter().copied().fold(f32::MIN, f32::max).min(width - 1.0).ceil() as i32;
    let min_y = ys.iter().copied().fold(f32::MAX, f32::min).max(0.0).floor() as i32;
    let max_y = ys.iter().copied().fold(f32::MIN, f32::max).min(height - 1.0).ceil() as i32;

    let area = edge_function(v0.position, v1.position, v2.position);
    if area.abs() < 0.0001 {
        return;
    }
    let inv_area = 1.0 / area;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = [x as f32 + 0.5, y as f32 + 0.5];

            let w0 = edge_function(v1.position, v2.position, p);
            let w1 = edge_function(v2.position, v0.position, p);
            let w2 = edge_function(v0.position, v1.position, p);

            let inside = (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0) || (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0);
            if !inside {
                continue;
            }

            let (b0, b1, b2) = (w0 * inv_area, w1 * inv_area, w2 * inv_area);
            let channel = |i: usize| (v0.color[i] * b0 + v1.color[i] * b1 + v2.color[i] * b2).clamp(0.0, 1.0);
            let rgb = [
                (channel(0) * 255.0).round() as u8,
                (channel(1) * 255.0).round() as u8,
                (channel(2) * 255.0).round() as u8,
            ];
            target.blend_pixel(x, y, rgb, channel(3));
        }
    }
}

/// Edge function for triangle rasterization.
/// Returns positive if point p is to the left of edge (a, b).
#[inline]
fn edge_function(a: [f32; 2], b: [f32; 2], p: [f32; 2]) -> f32 {
    (p[0] - a[0]) * (b[1] - a[1]) - (p[1] - a[1]) * (b[0] - a[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::sync::Arc;

    fn empty_fonts() -> FontBook {
        FontBook::from_bytes(Vec::new()).unwrap()
    }

    #[test]
    fn test_render_target_new() {
        let target = RenderTarget::new(100, 100);
        assert_eq!(target.width(), 100);
        assert_eq!(target.height(), 100);
        assert_eq!(target.pixels().len(), 100 * 100 * 4);
    }

    #[test]
    fn test_render_target_clear() {
        let mut target = RenderTarget::new(10, 10);
        target.clear(Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(target.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(target.pixel(9, 9), Some([255, 0, 0, 255]));
        assert_eq!(target.pixel(10, 0), None);
    }

    #[test]
    fn test_blend_pixel_ignores_out_of_range() {
        let mut target = RenderTarget::new(2, 2);
        target.blend_pixel(-1, 0, [0, 0, 0], 1.0);
        target.blend_pixel(0, 2, [0, 0, 0], 1.0);
        assert!(target.pixels().iter().all(|&b| b == 255));

        target.blend_pixel(1, 1, [0, 0, 0], 0.5);
        assert_eq!(target.pixel(1, 1), Some([128, 128, 128, 255]));
    }

    #[test]
    fn test_render_rect() {
        let mut target = RenderTarget::new(100, 100);
        let mut scene = Scene::new(100.0, 100.0);
        scene.rect(RectPrimitive::new(10.0, 10.0, 30.0, 20.0, Color::rgb(1.0, 0.0, 0.0)));

        SoftwareRenderer::new().render(&scene, &empty_fonts(), &mut target).unwrap();

        assert_eq!(target.pixel(20, 15), Some([255, 0, 0, 255]));
        assert_eq!(target.pixel(5, 5), Some([255, 255, 255, 255]));
        assert_eq!(target.pixel(45, 15), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_render_line_thickness() {
        let mut target = RenderTarget::new(100, 100);
        let mut scene = Scene::new(100.0, 100.0);
        scene.line(LinePrimitive::new(
            Vec2::new(10.0, 50.0),
            Vec2::new(90.0, 50.0),
            Stroke::new(Color::BLACK, 8.0),
        ));

        SoftwareRenderer::new().render(&scene, &empty_fonts(), &mut target).unwrap();

        assert_eq!(target.pixel(50, 47), Some([0, 0, 0, 255]));
        assert_eq!(target.pixel(50, 52), Some([0, 0, 0, 255]));
        assert_eq!(target.pixel(50, 40), Some([255, 255, 255, 255]));
        assert_eq!(target.pixel(95, 50), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_render_image_blit() {
        let mut target = RenderTarget::new(10, 10);
        let image = RgbaImage::from_pixel(3, 3, image::Rgba([0, 0, 255, 255]));
        let mut scene = Scene::new(10.0, 10.0);
        scene.image(2.0, 4.0, Arc::new(image));

        SoftwareRenderer::new().render(&scene, &empty_fonts(), &mut target).unwrap();

        assert_eq!(target.pixel(2, 4), Some([0, 0, 255, 255]));
        assert_eq!(target.pixel(4, 6), Some([0, 0, 255, 255]));
        assert_eq!(target.pixel(5, 6), Some([255, 255, 255, 255]));
        assert_eq!(target.pixel(1, 4), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_text_with_missing_font_fails() {
        let mut target = RenderTarget::new(10, 10);
        let mut scene = Scene::new(10.0, 10.0);
        scene.text(TextPrimitive {
            x: 0.0,
            y: 0.0,
            text: "Tomorrow".to_string(),
            font: apg_core::FontId::BODY,
            font_size: 8.0,
            color: Color::BLACK,
        });

        let err = SoftwareRenderer::new()
            .render(&scene, &empty_fonts(), &mut target)
            .unwrap_err();
        assert!(matches!(err, RenderError::UnknownFont { id: 1 }));
    }
}
