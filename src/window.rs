//! Window state management
//!
//! Per-window state: the canvas document, GPU resources, and interaction
//! state (active tool, text editor, cursor blink).

use std::sync::Arc;
use std::time::Instant;

use slate_config::Config;
use slate_core::Document;
use winit::window::Window;

use crate::gpu::WindowGpuState;
use crate::state::{TextEditor, ToolState};

/// Cursor blink interval for pending text
pub const CURSOR_BLINK_INTERVAL: std::time::Duration = std::time::Duration::from_millis(500);

/// State for a single window
pub struct WindowState {
    pub window: Arc<Window>,
    pub gpu: WindowGpuState,

    /// Canvas content with undo/redo history
    pub document: Document,
    /// In-progress stroke or rectangle drag
    pub tool: ToolState,
    /// Text entry under keyboard focus
    pub editor: TextEditor,

    /// Color choices from config, with the active index
    pub palette: Vec<[f32; 4]>,
    pub palette_index: usize,
    /// Font size choices from config, with the active index
    pub font_sizes: Vec<f32>,
    pub font_size_index: usize,
    pub background: [f32; 4],

    /// Last cursor position in physical pixels
    pub cursor_position: (f32, f32),
    pub mouse_pressed: bool,
    /// Whether the rectangle modifier key is currently held
    pub rect_key_held: bool,
    /// Last right-click, for double-click detection
    pub last_right_click: Option<(Instant, (f32, f32))>,

    /// Text cursor blink phase
    pub cursor_visible: bool,
    pub cursor_timer: Instant,

    /// Needs a redraw
    pub dirty: bool,
}

impl WindowState {
    pub fn new(window: Arc<Window>, gpu: WindowGpuState, config: &Config) -> Self {
        let mut state = Self {
            window,
            gpu,
            document: Document::new(),
            tool: ToolState::default(),
            editor: TextEditor::default(),
            palette: Vec::new(),
            palette_index: 0,
            font_sizes: Vec::new(),
            font_size_index: 0,
            background: [1.0, 1.0, 1.0, 1.0],
            cursor_position: (0.0, 0.0),
            mouse_pressed: false,
            rect_key_held: false,
            last_right_click: None,
            cursor_visible: true,
            cursor_timer: Instant::now(),
            dirty: true,
        };
        state.apply_config(config);
        state
    }

    /// Apply (or re-apply, on config reload) palette, background, and font
    /// size choices. Active indices are clamped so reloads cannot leave them
    /// dangling.
    pub fn apply_config(&mut self, config: &Config) {
        self.palette = config.canvas.palette_rgba();
        self.palette_index = self.palette_index.min(self.palette.len().saturating_sub(1));
        self.background = config.canvas.background_rgba();

        self.font_sizes = config.font.sizes.clone();
        if self.font_sizes.is_empty() {
            self.font_sizes.push(config.font.size);
        }
        let default_index = self
            .font_sizes
            .iter()
            .position(|s| *s == config.font.size)
            .unwrap_or(0);
        if self.font_size_index >= self.font_sizes.len() {
            self.font_size_index = default_index;
        }
        self.dirty = true;
    }

    /// Active drawing color
    pub fn current_color(&self) -> [f32; 4] {
        self.palette
            .get(self.palette_index)
            .copied()
            .unwrap_or([0.0, 0.0, 0.0, 1.0])
    }

    /// Font size for the next text entry
    pub fn current_font_size(&self) -> f32 {
        self.font_sizes
            .get(self.font_size_index)
            .copied()
            .unwrap_or(16.0)
    }

    /// Cursor position converted to clip space for the line pipelines
    pub fn cursor_clip(&self) -> [f32; 2] {
        slate_core::screen_to_clip(
            self.cursor_position.0,
            self.cursor_position.1,
            self.gpu.config.width as f32,
            self.gpu.config.height as f32,
        )
    }

    /// Reset the blink phase so a fresh edit starts with a visible cursor
    pub fn reset_cursor_blink(&mut self) {
        self.cursor_visible = true;
        self.cursor_timer = Instant::now();
    }

    /// Advance the blink phase. Returns true when the phase flipped and the
    /// window needs a redraw.
    pub fn tick_cursor_blink(&mut self) -> bool {
        if !self.editor.is_editing() {
            return false;
        }
        if self.cursor_timer.elapsed() >= CURSOR_BLINK_INTERVAL {
            self.cursor_visible = !self.cursor_visible;
            self.cursor_timer = Instant::now();
            return true;
        }
        false
    }
}
