//! Measurement and rasterization with the bundled fonts.

use apg_core::{types::Color, FontId};
use apg_layout::TextMeasure;
use apg_render_2d::{FontBook, RenderTarget, Scene, SoftwareRenderer, TextPrimitive};

const TITLE_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/fonts/DejaVuSans-Bold.ttf");
const BODY_FONT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../assets/fonts/DejaVuSansCondensed-Bold.ttf"
);

fn fonts() -> FontBook {
    FontBook::load(TITLE_FONT, BODY_FONT).expect("bundled fonts load")
}

#[test]
fn test_measure_scales_with_size() {
    let fonts = fonts();
    let small = fonts.measure("Race for Space", FontId::TITLE, 50.0);
    let large = fonts.measure("Race for Space", FontId::TITLE, 100.0);

    assert!(small.width > 0.0);
    assert!((large.width / small.width - 2.0).abs() < 0.01);
    assert!((large.height / small.height - 2.0).abs() < 0.01);
}

#[test]
fn test_condensed_body_is_narrower() {
    let fonts = fonts();
    let title = fonts.measure("Public Service Broadcasting", FontId::TITLE, 80.0);
    let body = fonts.measure("Public Service Broadcasting", FontId::BODY, 80.0);
    assert!(body.width < title.width);
}

#[test]
fn test_multiline_measures_widest_line() {
    let fonts = fonts();
    let wide = fonts.measure("Fire in the Cockpit", FontId::BODY, 40.0);
    let both = fonts.measure("Go!\nFire in the Cockpit", FontId::BODY, 40.0);

    assert_eq!(both.width, wide.width);
    assert!((both.height - 2.0 * wide.height).abs() < 1e-3);
}

#[test]
fn test_text_is_drawn_inside_its_box() {
    let fonts = fonts();
    let mut target = RenderTarget::new(400, 100);
    let size = 48.0;
    let measured = fonts.measure("Gagarin", FontId::BODY, size);

    let mut scene = Scene::new(400.0, 100.0);
    scene.text(TextPrimitive {
        x: 20.0,
        y: 10.0,
        text: "Gagarin".to_string(),
        font: FontId::BODY,
        font_size: size,
        color: Color::BLACK,
    });
    SoftwareRenderer::new().render(&scene, &fonts, &mut target).unwrap();

    let mut inked = Vec::new();
    for y in 0..target.height() {
        for x in 0..target.width() {
            if target.pixel(x, y).unwrap()[0] < 128 {
                inked.push((x, y));
            }
        }
    }
    assert!(!inked.is_empty());

    let right = 20.0 + measured.width + 2.0;
    let bottom = 10.0 + measured.height + 2.0;
    assert!(inked
        .iter()
        .all(|&(x, y)| x as f32 >= 18.0 && (x as f32) <= right && y as f32 >= 8.0 && (y as f32) <= bottom));
}
