//! Shape tessellation for 2D rendering.

use lyon::geom::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, LineCap, StrokeOptions, StrokeTessellator, StrokeVertex, VertexBuffers,
};

use crate::primitives::{LinePrimitive, RectPrimitive};

/// A vertex for rendering.
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Tessellated mesh ready for rasterization.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Tessellator for converting primitives to meshes.
pub struct Tessellator {
    stroke_tessellator: StrokeTessellator,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new()
    }
}

impl Tessellator {
    pub fn new() -> Self {
        Self {
            stroke_tessellator: StrokeTessellator::new(),
        }
    }

    /// Tessellate a filled rectangle into two triangles.
    pub fn tessellate_rect(&mut self, rect: &RectPrimitive, mesh: &mut Mesh) {
        let base = mesh.vertices.len() as u32;
        let color = rect.fill.to_array();
        let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);

        mesh.vertices.push(Vertex::new(x, y, color));
        mesh.vertices.push(Vertex::new(x + w, y, color));
        mesh.vertices.push(Vertex::new(x + w, y + h, color));
        mesh.vertices.push(Vertex::new(x, y + h, color));

        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Tessellate a stroked line segment.
    pub fn tessellate_line(&mut self, line: &LinePrimitive, mesh: &mut Mesh) {
        if line.stroke.width <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(line.start.x, line.start.y));
        builder.line_to(point(line.end.x, line.end.y));
        builder.end(false);
        let path = builder.build();

        let color = line.stroke.color.to_array();
        let options = StrokeOptions::default()
            .with_line_width(line.stroke.width)
            .with_line_cap(LineCap::Butt);

        let mut buffers: VertexBuffers<Vertex, u32> = VertexBuffers::new();
        let result = self.stroke_tessellator.tessellate_path(
            &path,
            &options,
            &mut BuffersBuilder::new(&mut buffers, |vertex: StrokeVertex| {
                Vertex::new(vertex.position().x, vertex.position().y, color)
            }),
        );

        match result {
            Ok(()) => {
                let base = mesh.vertices.len() as u32;
                mesh.vertices.extend(buffers.vertices);
                mesh.indices.extend(buffers.indices.iter().map(|i| i + base));
            }
            Err(e) => log::warn!("Failed to tessellate line: {e:?}"),
        }
    }
}
