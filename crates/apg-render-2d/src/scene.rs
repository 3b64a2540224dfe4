//! Scene building from a computed poster layout.

use std::sync::Arc;

use apg_core::{types::Color, FontId};
use apg_layout::{DrawTarget, PosterLayout};
use glam::Vec2;
use image::RgbaImage;

use crate::primitives::{LinePrimitive, RectPrimitive, Scene, Stroke, TextPrimitive};

/// Colors used when painting a poster.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Canvas fill behind everything else
    pub background: Color,
    /// Text and divider color
    pub foreground: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Color::RAY_WHITE,
            foreground: Color::BLACK,
        }
    }
}

/// Build a renderable scene from a layout and the cover art.
///
/// Paint order is background, cover, divider, then the text elements in the
/// order [`PosterLayout::draw_text`] issues them.
pub fn build_scene(layout: &PosterLayout, cover: Arc<RgbaImage>, options: &RenderOptions) -> Scene {
    let geometry = &layout.geometry;
    let mut scene = Scene::new(geometry.width, geometry.height);
    scene.text_color = options.foreground;

    scene.rect(RectPrimitive::new(
        0.0,
        0.0,
        geometry.width,
        geometry.height,
        options.background,
    ));

    let cover_size = Vec2::new(cover.width() as f32, cover.height() as f32);
    if cover_size != Vec2::new(layout.cover.width, layout.cover.height) {
        log::warn!(
            "Cover art is {}x{} but the layout reserves {}x{}",
            cover_size.x,
            cover_size.y,
            layout.cover.width,
            layout.cover.height
        );
    }
    scene.image(layout.cover.x, layout.cover.y, cover);

    let divider = &layout.divider;
    scene.line(LinePrimitive::new(
        divider.start,
        divider.end,
        Stroke::new(options.foreground, divider.thickness),
    ));

    layout.draw_text(&mut scene);
    scene
}

impl DrawTarget for Scene {
    fn draw_text(&mut self, text: &str, font: FontId, size: f32, position: Vec2) {
        let color = self.text_color;
        self.text(TextPrimitive {
            x: position.x,
            y: position.y,
            text: text.to_string(),
            font,
            font_size: size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::RenderCommand;
    use apg_core::AlbumInfo;
    use apg_layout::{compute_poster_layout, CanvasGeometry, EstimatedMeasure, PosterOptions};

    fn layout() -> PosterLayout {
        let album = AlbumInfo {
            album_name: "Race for Space".into(),
            artist_name: "Public Service Broadcasting".into(),
            album_date: "23 February 2015".into(),
            album_duration: "44:10".into(),
            track_names: (1..=12).map(|i| format!("Track {i}")).collect(),
        };
        let options = PosterOptions::default();
        let side = CanvasGeometry::new(&options).cover_side();
        compute_poster_layout(&album, Vec2::splat(side), &options, &EstimatedMeasure::default()).unwrap()
    }

    #[test]
    fn test_scene_paint_order() {
        let layout = layout();
        let side = layout.geometry.cover_side() as u32;
        let cover = Arc::new(RgbaImage::new(side, side));
        let scene = build_scene(&layout, cover, &RenderOptions::default());

        assert!(matches!(scene.commands[0], RenderCommand::Rect(_)));
        assert!(matches!(scene.commands[1], RenderCommand::Image(_)));
        assert!(matches!(scene.commands[2], RenderCommand::Line(_)));
        assert!(scene.commands[3..]
            .iter()
            .all(|c| matches!(c, RenderCommand::Text(_))));

        // Four header lines plus one command per track row
        assert_eq!(scene.commands.len(), 3 + 4 + 12);
    }

    #[test]
    fn test_scene_uses_layout_positions() {
        let layout = layout();
        let cover = Arc::new(RgbaImage::new(1, 1));
        let options = RenderOptions {
            background: Color::WHITE,
            foreground: Color::rgb(0.2, 0.2, 0.2),
        };
        let scene = build_scene(&layout, cover, &options);

        let RenderCommand::Rect(background) = &scene.commands[0] else {
            panic!("expected background rect");
        };
        assert_eq!(background.fill, Color::WHITE);
        assert_eq!((background.width, background.height), (3508.0, 4961.0));

        let RenderCommand::Image(image) = &scene.commands[1] else {
            panic!("expected cover image");
        };
        assert_eq!((image.x, image.y), (175.0, 175.0));

        let RenderCommand::Line(line) = &scene.commands[2] else {
            panic!("expected divider");
        };
        assert_eq!(line.stroke.width, 8.0);
        assert_eq!(line.stroke.color, options.foreground);

        let RenderCommand::Text(title) = &scene.commands[3] else {
            panic!("expected album name");
        };
        assert_eq!(title.text, "Race for Space");
        assert_eq!(title.font, FontId::TITLE);
        assert_eq!(title.color, options.foreground);
        assert_eq!(Vec2::new(title.x, title.y), layout.album_name.position());
    }
}
