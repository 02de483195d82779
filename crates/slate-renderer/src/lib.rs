//! Slate renderer - GPU pipelines for the whiteboard canvas
//!
//! Three passes per frame:
//! - Shape pass: rectangle outlines (committed + drag preview)
//! - Stroke pass: freehand line segments (committed + live stroke)
//! - Text pass: glyphon-shaped text entries, composited on top
//!
//! The stroke and shape pipelines share one vertex contract: a clip-space
//! position (two f32, attribute slot 0) and an RGBA color (four f32,
//! attribute slot 1) that the shaders pass through unmodified.

pub mod shaders;
pub mod shape_renderer;
pub mod stroke_renderer;
pub mod text;

pub use shape_renderer::ShapeRenderer;
pub use stroke_renderer::StrokeRenderer;
pub use text::{TextPass, TextPassError};

use slate_core::Vertex;

/// The vertex buffer layout both line pipelines bind.
///
/// This is the bit-exact attribute contract: `Float32x2` position at shader
/// location 0, `Float32x4` color at location 1, 24-byte stride.
pub fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
        // position
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 0,
            shader_location: 0,
        },
        // color
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 8,
            shader_location: 1,
        },
    ];

    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}
