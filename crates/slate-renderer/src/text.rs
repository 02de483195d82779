//! Glyphon-backed text rendering for canvas text entries
//!
//! One glyphon buffer is shaped per entry each frame. The pending entry
//! gets a blinking `|` cursor appended, and the laid-out bounds are written
//! back into the entries so the host can hit-test them.

use glyphon::{
    Attrs, Buffer, Cache, Color, Family, FontSystem, Metrics, Resolution, Shaping, SwashCache,
    TextArea, TextAtlas, TextBounds, TextRenderer, Viewport,
};
use slate_core::TextEntry;

/// Errors surfaced by the text pass
#[derive(Debug, thiserror::Error)]
pub enum TextPassError {
    #[error("text prepare failed: {0}")]
    Prepare(#[from] glyphon::PrepareError),
    #[error("text render failed: {0}")]
    Render(#[from] glyphon::RenderError),
}

/// Text rendering pass over a window surface
pub struct TextPass {
    font_system: FontSystem,
    swash_cache: SwashCache,
    viewport: Viewport,
    atlas: TextAtlas,
    renderer: TextRenderer,
    buffers: Vec<Buffer>,
}

impl TextPass {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target_format: wgpu::TextureFormat,
    ) -> Self {
        let font_system = FontSystem::new();
        let swash_cache = SwashCache::new();
        let cache = Cache::new(device);
        let viewport = Viewport::new(device, &cache);
        let mut atlas = TextAtlas::new(device, queue, &cache, target_format);
        let renderer = TextRenderer::new(&mut atlas, device, wgpu::MultisampleState::default(), None);

        Self {
            font_system,
            swash_cache,
            viewport,
            atlas,
            renderer,
            buffers: Vec::new(),
        }
    }

    /// Shape all entries and upload glyphs for the next render.
    ///
    /// Writes each entry's laid-out bounds back so hit testing stays in sync
    /// with what is on screen. `cursor_visible` controls the blinking cursor
    /// on the pending entry.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        entries: &mut [&mut TextEntry],
        cursor_visible: bool,
        width: u32,
        height: u32,
        family: &str,
    ) -> Result<(), TextPassError> {
        self.viewport.update(queue, Resolution { width, height });

        self.buffers.clear();
        for entry in entries.iter() {
            let metrics = Metrics::new(entry.font_size, entry.font_size * 1.2);
            let mut buffer = Buffer::new(&mut self.font_system, metrics);
            buffer.set_size(&mut self.font_system, Some(width as f32), Some(height as f32));

            let mut text = entry.content.clone();
            if entry.pending && cursor_visible {
                text.push('|');
            }

            buffer.set_text(
                &mut self.font_system,
                &text,
                &Attrs::new().family(Family::Name(family)),
                Shaping::Advanced,
            );
            buffer.shape_until_scroll(&mut self.font_system, false);
            self.buffers.push(buffer);
        }

        // Write laid-out bounds back for hit testing
        for (entry, buffer) in entries.iter_mut().zip(self.buffers.iter()) {
            let mut max_width: f32 = 0.0;
            let mut line_count = 0usize;
            for run in buffer.layout_runs() {
                max_width = max_width.max(run.line_w);
                line_count += 1;
            }
            entry.bounds = slate_core::TextBounds {
                x: entry.position[0],
                y: entry.position[1],
                width: max_width,
                height: line_count as f32 * buffer.metrics().line_height,
            };
        }

        let bounds = TextBounds {
            left: 0,
            top: 0,
            right: width as i32,
            bottom: height as i32,
        };
        let text_areas = entries
            .iter()
            .zip(self.buffers.iter())
            .map(|(entry, buffer)| TextArea {
                buffer,
                left: entry.position[0],
                top: entry.position[1],
                scale: 1.0,
                bounds,
                default_color: Color::rgba(
                    entry.color[0],
                    entry.color[1],
                    entry.color[2],
                    entry.color[3],
                ),
                custom_glyphs: &[],
            });

        self.renderer.prepare(
            device,
            queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            text_areas,
            &mut self.swash_cache,
        )?;

        Ok(())
    }

    /// Draw the prepared glyphs into a render pass
    pub fn render(&self, render_pass: &mut wgpu::RenderPass<'_>) -> Result<(), TextPassError> {
        self.renderer
            .render(&self.atlas, &self.viewport, render_pass)?;
        Ok(())
    }

    /// Release unused atlas space after a frame
    pub fn trim_atlas(&mut self) {
        self.atlas.trim();
    }
}
