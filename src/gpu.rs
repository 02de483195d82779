//! GPU state management
//!
//! Shared and per-window GPU resources for wgpu rendering.

use slate_renderer::{ShapeRenderer, StrokeRenderer, TextPass};

/// Shared GPU resources across all windows
pub struct SharedGpuState {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl SharedGpuState {
    /// Initialize shared GPU resources
    pub fn new() -> Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        // Request adapter without a surface first (surfaces are per-window)
        let adapter = pollster::block_on(async {
            instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::default(),
                    compatible_surface: None,
                    force_fallback_adapter: false,
                })
                .await
                .expect("Failed to find suitable GPU adapter")
        });

        let (device, queue) = pollster::block_on(async {
            adapter
                .request_device(&wgpu::DeviceDescriptor::default())
                .await
                .expect("Failed to create device")
        });

        Self {
            instance,
            adapter,
            device,
            queue,
        }
    }
}

/// Per-window GPU state (surface tied to a specific window)
pub struct WindowGpuState {
    pub surface: wgpu::Surface<'static>,
    pub config: wgpu::SurfaceConfiguration,

    /// Freehand stroke segments
    pub stroke_renderer: StrokeRenderer,
    /// Rectangle outlines
    pub shape_renderer: ShapeRenderer,
    /// Glyphon text on top of the line passes
    pub text_pass: TextPass,
}
