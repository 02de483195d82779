//! Frame rendering
//!
//! Two passes per frame: the line pass clears to the background color and
//! draws rectangle outlines and strokes, then the text pass loads that
//! result and composites glyphon text on top.

use crate::gpu::SharedGpuState;
use crate::window::WindowState;

pub fn render_frame(
    state: &mut WindowState,
    shared: &SharedGpuState,
    font_family: &str,
) -> Result<(), wgpu::SurfaceError> {
    let output = state.gpu.surface.get_current_texture()?;
    let view = output
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());

    let color = state.current_color();
    let preview = state.tool.preview_shape(color);

    state.gpu.shape_renderer.clear();
    state
        .gpu
        .shape_renderer
        .push_vertices(&state.document.shape_vertices(preview.as_ref()));

    state.gpu.stroke_renderer.clear();
    state
        .gpu
        .stroke_renderer
        .push_vertices(&state.document.stroke_vertices(Some(&state.tool.active_stroke)));

    // Committed entries plus the new one still being typed
    let mut entries: Vec<&mut slate_core::TextEntry> = state.document.texts_mut().collect();
    if let Some(entry) = state.editor.pending_new_mut() {
        entries.push(entry);
    }
    if let Err(e) = state.gpu.text_pass.prepare(
        &shared.device,
        &shared.queue,
        &mut entries,
        state.cursor_visible,
        state.gpu.config.width,
        state.gpu.config.height,
        font_family,
    ) {
        log::warn!("Text prepare failed: {}", e);
    }

    let mut encoder = shared
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Frame Encoder"),
        });

    {
        let [r, g, b, a] = state.background;
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Canvas Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        state.gpu.shape_renderer.render(&shared.queue, &mut pass);
        state.gpu.stroke_renderer.render(&shared.queue, &mut pass);
    }

    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Text Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Err(e) = state.gpu.text_pass.render(&mut pass) {
            log::warn!("Text render failed: {}", e);
        }
    }

    shared.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    state.gpu.text_pass.trim_atlas();
    state.dirty = false;

    Ok(())
}
