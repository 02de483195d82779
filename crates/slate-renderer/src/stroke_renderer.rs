//! Stroke renderer for freehand line segments
//!
//! Renders all committed strokes plus the live stroke in a single draw call
//! from a persistent vertex buffer.

use crate::shaders::builtin;
use crate::vertex_buffer_layout;
use slate_core::Vertex;

/// Line-list renderer over the stroke shader
pub struct StrokeRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    /// Pending vertices to render (line-list pairs)
    vertices: Vec<Vertex>,
}

impl StrokeRenderer {
    const MAX_VERTICES: usize = 256 * 1024;

    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Stroke Shader"),
            source: wgpu::ShaderSource::Wgsl(builtin::STROKE.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Stroke Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Stroke Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_buffer_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let vertex_capacity = Self::MAX_VERTICES;
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Stroke Vertex Buffer"),
            size: (vertex_capacity * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            vertex_buffer,
            vertex_capacity,
            vertices: Vec::new(),
        }
    }

    /// Clear pending vertices
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Queue line-list vertices for the next render
    pub fn push_vertices(&mut self, vertices: &[Vertex]) {
        let available = self.vertex_capacity - self.vertices.len();
        if vertices.len() > available {
            log::warn!(
                "Stroke vertex buffer full, dropping {} vertices",
                vertices.len() - available
            );
        }
        self.vertices
            .extend_from_slice(&vertices[..vertices.len().min(available)]);
    }

    /// Upload pending vertices and draw
    pub fn render<'a>(&'a self, queue: &wgpu::Queue, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.vertices.is_empty() {
            return;
        }

        queue.write_buffer(
            &self.vertex_buffer,
            0,
            bytemuck::cast_slice(&self.vertices),
        );

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertices.len() as u32, 0..1);
    }
}
