//! Render primitives for 2D rendering.
//!
//! These are intermediate representations that get tessellated or blitted
//! into a render target.

use std::sync::Arc;

use apg_core::{types::Color, FontId};
use glam::Vec2;
use image::RgbaImage;

/// A render command representing something to draw.
#[derive(Debug, Clone)]
pub enum RenderCommand {
    /// Draw a filled rectangle
    Rect(RectPrimitive),
    /// Draw a straight stroked line
    Line(LinePrimitive),
    /// Copy an image onto the canvas
    Image(ImagePrimitive),
    /// Draw a single line of text
    Text(TextPrimitive),
}

/// A filled rectangle.
#[derive(Debug, Clone)]
pub struct RectPrimitive {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Color,
}

impl RectPrimitive {
    pub fn new(x: f32, y: f32, width: f32, height: f32, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
        }
    }
}

/// A straight line segment with butt caps.
#[derive(Debug, Clone)]
pub struct LinePrimitive {
    pub start: Vec2,
    pub end: Vec2,
    pub stroke: Stroke,
}

impl LinePrimitive {
    pub fn new(start: Vec2, end: Vec2, stroke: Stroke) -> Self {
        Self { start, end, stroke }
    }
}

/// Stroke style.
#[derive(Debug, Clone, Copy)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// An image drawn at its native size with its top-left corner at (x, y).
#[derive(Debug, Clone)]
pub struct ImagePrimitive {
    pub x: f32,
    pub y: f32,
    pub image: Arc<RgbaImage>,
}

/// A single line of text with its top-left corner at (x, y).
#[derive(Debug, Clone)]
pub struct TextPrimitive {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font: FontId,
    pub font_size: f32,
    pub color: Color,
}

/// An ordered list of render commands for one canvas.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<RenderCommand>,
    /// Color applied to text pushed through [`apg_layout::DrawTarget`].
    pub text_color: Color,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            text_color: Color::BLACK,
        }
    }

    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    pub fn rect(&mut self, rect: RectPrimitive) {
        self.push(RenderCommand::Rect(rect));
    }

    pub fn line(&mut self, line: LinePrimitive) {
        self.push(RenderCommand::Line(line));
    }

    pub fn image(&mut self, x: f32, y: f32, image: Arc<RgbaImage>) {
        self.push(RenderCommand::Image(ImagePrimitive { x, y, image }));
    }

    pub fn text(&mut self, text: TextPrimitive) {
        self.push(RenderCommand::Text(text));
    }
}
