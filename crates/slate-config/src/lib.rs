//! Configuration management for the slate whiteboard
//!
//! Supports loading configuration from:
//! - `~/.config/slate/config.toml` (XDG on Linux/macOS)
//! - A specific path (tests, hot reload)

pub mod watcher;

pub use watcher::{ConfigEvent, ConfigWatcher};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial logical width in pixels
    pub width: u32,
    /// Initial logical height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Slate".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

/// Canvas configuration: background, pen palette, tool keys
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Background color as a hex string (#rrggbb or #rrggbbaa)
    pub background: String,
    /// Pen colors selectable at runtime, in palette order
    pub palette: Vec<String>,
    /// Key held down to draw rectangles instead of freehand strokes
    pub rectangle_key: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            palette: vec![
                "#000000".to_string(), // Black
                "#ff0000".to_string(), // Red
                "#00ff00".to_string(), // Green
                "#0000ff".to_string(), // Blue
                "#ffff00".to_string(), // Yellow
                "#ff00ff".to_string(), // Magenta
                "#00ffff".to_string(), // Cyan
                "#ffffff".to_string(), // White
            ],
            rectangle_key: "s".to_string(),
        }
    }
}

impl CanvasConfig {
    /// Parsed background color, falling back to white on a bad hex string.
    pub fn background_rgba(&self) -> [f32; 4] {
        parse_hex_color(&self.background).unwrap_or_else(|| {
            log::warn!("Invalid background color {:?}, using white", self.background);
            [1.0, 1.0, 1.0, 1.0]
        })
    }

    /// Parsed pen palette. Invalid entries are skipped with a warning; an
    /// empty or fully invalid palette falls back to black.
    pub fn palette_rgba(&self) -> Vec<[f32; 4]> {
        let mut colors: Vec<[f32; 4]> = Vec::with_capacity(self.palette.len());
        for entry in &self.palette {
            match parse_hex_color(entry) {
                Some(color) => colors.push(color),
                None => log::warn!("Skipping invalid palette color {:?}", entry),
            }
        }
        if colors.is_empty() {
            colors.push([0.0, 0.0, 0.0, 1.0]);
        }
        colors
    }
}

/// Font configuration for text entries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font family names in order of preference
    pub family: Vec<String>,
    /// Default text size in points
    pub size: f32,
    /// Sizes cycled through by the font size keybindings
    pub sizes: Vec<f32>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: vec![
                "Inter".to_string(),
                "Noto Sans".to_string(),
                "DejaVu Sans".to_string(),
                "Arial".to_string(),
            ],
            size: 16.0,
            sizes: vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 28.0, 32.0],
        }
    }
}

/// Keybinding action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    Undo,
    Redo,
    ClearCanvas,
    NextColor,
    PreviousColor,
    SelectColor1,
    SelectColor2,
    SelectColor3,
    SelectColor4,
    SelectColor5,
    SelectColor6,
    SelectColor7,
    SelectColor8,
    IncreaseFontSize,
    DecreaseFontSize,
    NewWindow,
    Quit,
}

impl KeyAction {
    /// Palette index for the select_color_N actions, if this is one.
    pub fn palette_index(&self) -> Option<usize> {
        match self {
            KeyAction::SelectColor1 => Some(0),
            KeyAction::SelectColor2 => Some(1),
            KeyAction::SelectColor3 => Some(2),
            KeyAction::SelectColor4 => Some(3),
            KeyAction::SelectColor5 => Some(4),
            KeyAction::SelectColor6 => Some(5),
            KeyAction::SelectColor7 => Some(6),
            KeyAction::SelectColor8 => Some(7),
            _ => None,
        }
    }
}

/// Key modifier flags
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    #[serde(rename = "super")]
    pub logo: bool, // Command on macOS, Super/Windows elsewhere
}

/// A single keybinding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keybinding {
    pub key: String,
    #[serde(default)]
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
}

/// Keybindings configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub bindings: Vec<Keybinding>,
}

impl KeybindingsConfig {
    /// Look up the action bound to a key with the given modifiers.
    pub fn resolve(&self, key: &str, modifiers: KeyModifiers) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|b| b.key == key && b.modifiers == modifiers)
            .map(|b| b.action)
    }
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        let ctrl = KeyModifiers {
            ctrl: true,
            ..Default::default()
        };
        let ctrl_shift = KeyModifiers {
            ctrl: true,
            shift: true,
            ..Default::default()
        };

        let bind = |key: &str, modifiers: KeyModifiers, action: KeyAction| Keybinding {
            key: key.to_string(),
            modifiers,
            action,
        };

        let mut bindings = vec![
            bind("z", ctrl, KeyAction::Undo),
            bind("z", ctrl_shift, KeyAction::Redo),
            bind("k", ctrl, KeyAction::ClearCanvas),
            bind("]", ctrl, KeyAction::NextColor),
            bind("[", ctrl, KeyAction::PreviousColor),
            bind("=", ctrl, KeyAction::IncreaseFontSize),
            bind("-", ctrl, KeyAction::DecreaseFontSize),
            bind("n", ctrl, KeyAction::NewWindow),
            bind("q", ctrl, KeyAction::Quit),
        ];
        let colors = [
            KeyAction::SelectColor1,
            KeyAction::SelectColor2,
            KeyAction::SelectColor3,
            KeyAction::SelectColor4,
            KeyAction::SelectColor5,
            KeyAction::SelectColor6,
            KeyAction::SelectColor7,
            KeyAction::SelectColor8,
        ];
        for (i, action) in colors.iter().enumerate() {
            bindings.push(bind(&(i + 1).to_string(), ctrl, *action));
        }

        Self { bindings }
    }
}

/// Complete slate configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub canvas: CanvasConfig,
    pub font: FontConfig,
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Get the default configuration directory
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("slate"))
    }

    /// Get the default configuration file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Generate a default config file with comments
    pub fn generate_default_config() -> String {
        r##"# Slate Whiteboard Configuration
# Place this file at ~/.config/slate/config.toml

[window]
title = "Slate"
width = 1024
height = 768

[canvas]
# Background color (#rrggbb or #rrggbbaa)
background = "#ffffff"
# Pen colors, selectable with ctrl+1..8 or next_color/previous_color
palette = [
    "#000000", "#ff0000", "#00ff00", "#0000ff",
    "#ffff00", "#ff00ff", "#00ffff", "#ffffff",
]
# Hold this key while dragging to draw a rectangle
rectangle_key = "s"

[font]
# Font families tried in order for text entries
family = ["Inter", "Noto Sans", "DejaVu Sans", "Arial"]
# Default text size in points
size = 16.0
# Sizes cycled through by increase_font_size / decrease_font_size
sizes = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 28.0, 32.0]

# Keybindings
# Supported actions: undo, redo, clear_canvas, next_color, previous_color,
#   select_color_1 .. select_color_8, increase_font_size, decrease_font_size,
#   new_window, quit

[[keybindings.bindings]]
key = "z"
modifiers = { ctrl = true }
action = "undo"

[[keybindings.bindings]]
key = "z"
modifiers = { ctrl = true, shift = true }
action = "redo"

[[keybindings.bindings]]
key = "k"
modifiers = { ctrl = true }
action = "clear_canvas"

[[keybindings.bindings]]
key = "q"
modifiers = { ctrl = true }
action = "quit"
"##
        .to_string()
    }
}

/// Parse a `#rrggbb` or `#rrggbbaa` hex color into normalized RGBA.
pub fn parse_hex_color(s: &str) -> Option<[f32; 4]> {
    let hex = s.strip_prefix('#')?;
    // Length and slicing below assume one byte per digit
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return None;
    }

    let channel = |i: usize| -> Option<f32> {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };

    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if hex.len() == 8 { channel(6)? } else { 1.0 };
    Some([r, g, b, a])
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
