//! Preview window.
//!
//! The poster is rendered once before the window opens; each frame only
//! re-presents the cached texture, scaled to the window height and framed
//! with a thin black outline.

use apg_core::RenderError;
use apg_render_2d::RenderTarget;
use eframe::egui;
use image::imageops::FilterType;
use image::RgbaImage;

/// Portrait aspect of ISO 216 paper, width over height.
const PAGE_ASPECT: f32 = 1.0 / 1.414;
/// Outline thickness relative to the window height.
const OUTLINE_RATIO: f32 = 0.002;
/// Longest texture side uploaded to the GPU.
const MAX_TEXTURE_SIDE: u32 = 2048;

/// Show the rendered poster until the window is closed.
pub fn show(target: &RenderTarget, title: &str) -> Result<(), RenderError> {
    let preview = downscale(target)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_maximized(true)
            .with_min_inner_size([320.0, 452.0])
            .with_title(title),
        ..Default::default()
    };

    log::info!("Opening preview ({}x{} texture)", preview.width(), preview.height());
    eframe::run_native(
        "APG",
        options,
        Box::new(move |_cc| Ok(Box::new(PreviewApp::new(preview)))),
    )
    .map_err(|e| RenderError::Preview {
        reason: e.to_string(),
    })
}

/// Shrink the poster so its longest side fits a single texture.
fn downscale(target: &RenderTarget) -> Result<RgbaImage, RenderError> {
    let image = target.clone().into_image()?;
    let longest = image.width().max(image.height());
    if longest <= MAX_TEXTURE_SIDE {
        return Ok(image);
    }
    let scale = MAX_TEXTURE_SIDE as f32 / longest as f32;
    let width = ((image.width() as f32 * scale).round() as u32).max(1);
    let height = ((image.height() as f32 * scale).round() as u32).max(1);
    Ok(image::imageops::resize(&image, width, height, FilterType::Triangle))
}

/// Where the poster is drawn inside a window: full height, page aspect,
/// horizontally centred.
pub fn poster_rect(window: egui::Rect) -> egui::Rect {
    let height = window.height();
    let size = egui::vec2(height * PAGE_ASPECT, height);
    egui::Rect::from_center_size(window.center(), size)
}

/// Outline thickness for a window of the given height, at least one pixel.
pub fn outline_thickness(window_height: f32) -> f32 {
    (window_height * OUTLINE_RATIO).round().max(1.0)
}

struct PreviewApp {
    image: Option<RgbaImage>,
    texture: Option<egui::TextureHandle>,
}

impl PreviewApp {
    fn new(image: RgbaImage) -> Self {
        Self {
            image: Some(image),
            texture: None,
        }
    }

    fn texture(&mut self, ctx: &egui::Context) -> Option<&egui::TextureHandle> {
        if self.texture.is_none() {
            let image = self.image.take()?;
            let size = [image.width() as usize, image.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
            self.texture = Some(ctx.load_texture("poster", color_image, egui::TextureOptions::LINEAR));
        }
        self.texture.as_ref()
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let window = ui.max_rect();
                let rect = poster_rect(window);
                let Some(texture) = self.texture(ctx) else {
                    return;
                };

                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                let painter = ui.painter();
                painter.image(texture.id(), rect, uv, egui::Color32::WHITE);
                painter.rect_stroke(
                    rect,
                    0.0,
                    egui::Stroke::new(outline_thickness(window.height()), egui::Color32::BLACK),
                    egui::StrokeKind::Outside,
                );
            });
    }
}
