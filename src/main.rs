//! Slate - a minimal GPU whiteboard
//!
//! Left-drag draws freehand strokes, holding the rectangle key while
//! dragging draws rectangle outlines, and right-click places text. All
//! drawing goes through two pass-through line pipelines plus a glyphon
//! text pass; colors, keybindings, and fonts come from a hot-reloaded
//! TOML config.

mod gpu;
mod input;
mod render;
mod state;
mod window;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;

use slate_config::{Config, ConfigEvent, ConfigWatcher};
use slate_renderer::{ShapeRenderer, StrokeRenderer, TextPass};

use gpu::{SharedGpuState, WindowGpuState};
use input::AppCommand;
use render::render_frame;
use window::WindowState;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, Modifiers, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

struct App {
    windows: HashMap<WindowId, WindowState>,
    shared_gpu: Option<SharedGpuState>,
    focused_window: Option<WindowId>,
    config: Config,
    modifiers: Modifiers,
    pending_new_window: bool,
    config_watcher: Option<ConfigWatcher>,
    /// Last frame time for throttling redraws
    last_frame_time: Instant,
}

impl App {
    fn new() -> Self {
        let config = Config::load();
        let config_watcher = ConfigWatcher::new();

        Self {
            windows: HashMap::new(),
            shared_gpu: None,
            focused_window: None,
            config,
            modifiers: Modifiers::default(),
            pending_new_window: false,
            config_watcher,
            last_frame_time: Instant::now(),
        }
    }

    fn init_shared_gpu(&mut self) {
        if self.shared_gpu.is_none() {
            self.shared_gpu = Some(SharedGpuState::new());
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> WindowId {
        self.init_shared_gpu();
        let shared = self.shared_gpu.as_ref().unwrap();

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );
        let window_id = window.id();
        let size = window.inner_size();

        let surface = shared.instance.create_surface(window.clone()).unwrap();
        let caps = surface.get_capabilities(&shared.adapter);
        let format = caps.formats[0];

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&shared.device, &surface_config);

        let gpu = WindowGpuState {
            surface,
            config: surface_config,
            stroke_renderer: StrokeRenderer::new(&shared.device, format),
            shape_renderer: ShapeRenderer::new(&shared.device, format),
            text_pass: TextPass::new(&shared.device, &shared.queue, format),
        };

        let state = WindowState::new(window, gpu, &self.config);
        state.window.request_redraw();

        self.windows.insert(window_id, state);
        self.focused_window = Some(window_id);
        log::info!("Created window {:?}", window_id);
        window_id
    }

    fn reload_config(&mut self) {
        log::info!("Reloading config...");
        self.config = Config::load();

        for state in self.windows.values_mut() {
            state.apply_config(&self.config);
            state.window.request_redraw();
        }
    }

}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.windows.is_empty() {
            self.create_window(event_loop);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        let Some(state) = self.windows.get_mut(&id) else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                self.windows.remove(&id);
                if self.focused_window == Some(id) {
                    self.focused_window = self.windows.keys().next().copied();
                }
                if self.windows.is_empty() {
                    event_loop.exit();
                }
            }

            WindowEvent::Focused(focused) => {
                if focused {
                    self.focused_window = Some(id);
                }
            }

            WindowEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let mods = input::keyboard::modifiers(self.modifiers.state());
                let command = match event.state {
                    ElementState::Pressed => {
                        input::handle_key_pressed(state, &self.config, &event.logical_key, mods)
                    }
                    ElementState::Released => {
                        input::handle_key_released(state, &self.config, &event.logical_key);
                        None
                    }
                };

                match command {
                    Some(AppCommand::NewWindow) => {
                        // Deferred: creating a window inside event dispatch
                        // deadlocks on some platforms
                        self.pending_new_window = true;
                    }
                    Some(AppCommand::Quit) => event_loop.exit(),
                    None => {}
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                input::handle_cursor_moved(state, position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput { state: element_state, button, .. } => {
                match (button, element_state) {
                    (MouseButton::Left, ElementState::Pressed) => input::handle_left_press(state),
                    (MouseButton::Left, ElementState::Released) => {
                        input::handle_left_release(state)
                    }
                    (MouseButton::Right, ElementState::Pressed) => {
                        input::handle_right_press(state)
                    }
                    _ => {}
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(shared) = &self.shared_gpu {
                    input::handle_resize(state, &shared.device, size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(shared) = &self.shared_gpu else {
                    return;
                };
                let family = self
                    .config
                    .font
                    .family
                    .first()
                    .map(String::as_str)
                    .unwrap_or("sans-serif");

                match render_frame(state, shared, family) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let (width, height) = (state.gpu.config.width, state.gpu.config.height);
                        input::handle_resize(state, &shared.device, width, height);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of GPU memory, exiting");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("Frame render failed: {:?}", e),
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Collect watcher events first to avoid borrowing self twice
        let events: Vec<_> = self
            .config_watcher
            .as_mut()
            .map(|w| std::iter::from_fn(|| w.poll()).collect())
            .unwrap_or_default();

        for event in events {
            match event {
                ConfigEvent::ConfigChanged => self.reload_config(),
            }
        }

        if self.pending_new_window {
            self.pending_new_window = false;
            self.create_window(event_loop);
        }

        for state in self.windows.values_mut() {
            if state.tick_cursor_blink() {
                state.dirty = true;
            }
        }

        // Throttle redraws to ~60fps; dirty windows repaint on the next tick
        const TARGET_FRAME_TIME: std::time::Duration = std::time::Duration::from_micros(16666);
        if self.last_frame_time.elapsed() >= TARGET_FRAME_TIME {
            self.last_frame_time = Instant::now();
            for state in self.windows.values() {
                if state.dirty {
                    state.window.request_redraw();
                }
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,slate=info"))
        .init();
    log::info!("Slate starting");

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run_app(&mut App::new())
        .context("Event loop terminated with an error")?;
    Ok(())
}
