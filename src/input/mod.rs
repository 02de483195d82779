//! Input handling
//!
//! Translates window events into document edits and tool state changes.
//! The mapping rules live in `mouse` and `keyboard`; the handlers here
//! apply them to a window's state.

pub mod keyboard;
pub mod mouse;

use std::time::Instant;

use slate_config::{Config, KeyAction, KeyModifiers};
use slate_core::{normalized_to_rgba, TextEntry};
use winit::keyboard::Key;

use crate::window::WindowState;

/// Commands the app (not a single window) must carry out
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    NewWindow,
    Quit,
}

pub fn handle_cursor_moved(state: &mut WindowState, x: f32, y: f32) {
    state.cursor_position = (x, y);
    if !state.mouse_pressed {
        return;
    }

    let clip = state.cursor_clip();
    if state.tool.is_rect_drag() {
        state.tool.drag_rect(clip);
    } else {
        state.tool.push_point(clip, state.current_color());
    }
    state.dirty = true;
    state.window.request_redraw();
}

/// Left press starts a stroke, or a rectangle drag while the rectangle key
/// is held.
pub fn handle_left_press(state: &mut WindowState) {
    state.mouse_pressed = true;
    let clip = state.cursor_clip();
    if state.rect_key_held {
        state.tool.begin_rect(clip);
    } else {
        state.tool.begin_stroke(clip, state.current_color());
    }
}

/// Left release commits whatever gesture was in progress.
pub fn handle_left_release(state: &mut WindowState) {
    state.mouse_pressed = false;
    let color = state.current_color();
    if let Some(shape) = state.tool.take_shape(color) {
        state.document.commit_shape(shape);
    }
    state.document.commit_stroke(state.tool.take_stroke());
    state.dirty = true;
    state.window.request_redraw();
}

/// Right press places a new text entry, commits the entry being edited, or
/// (on double-click over existing text) re-opens that entry for editing.
pub fn handle_right_press(state: &mut WindowState) {
    let now = Instant::now();
    let pos = state.cursor_position;
    let double = mouse::is_double_click(state.last_right_click, now, pos);
    state.last_right_click = Some((now, pos));

    if double {
        if let Some(index) = state.document.hit_test_text(pos.0, pos.1) {
            state.editor.commit(&mut state.document);
            state.editor.begin_existing(index, &mut state.document);
            state.reset_cursor_blink();
            state.dirty = true;
            state.window.request_redraw();
            return;
        }
    }

    if state.editor.is_editing() {
        state.editor.commit(&mut state.document);
    } else {
        let color = normalized_to_rgba(state.current_color());
        let entry = TextEntry::new([pos.0, pos.1], color, state.current_font_size());
        state.editor.begin_new(entry);
        state.reset_cursor_blink();
    }
    state.dirty = true;
    state.window.request_redraw();
}

pub fn handle_key_pressed(
    state: &mut WindowState,
    config: &Config,
    key: &Key,
    mods: KeyModifiers,
) -> Option<AppCommand> {
    let binding = keyboard::binding_key(key);

    // Track the rectangle modifier, but not while it would be typed as text
    if !state.editor.is_editing() {
        if binding.as_deref() == Some(config.canvas.rectangle_key.as_str()) {
            state.rect_key_held = true;
        }
    }

    // Plain keys go to the entry under focus; modified keys fall through to
    // the keybindings so undo still works mid-edit
    if state.editor.is_editing() && !mods.ctrl && !mods.logo && !mods.alt {
        match keyboard::edit_key(key) {
            Some(keyboard::EditKey::Insert(text)) => {
                state.editor.insert(&mut state.document, &text);
                state.reset_cursor_blink();
            }
            Some(keyboard::EditKey::Backspace) => {
                state.editor.backspace(&mut state.document);
                state.reset_cursor_blink();
            }
            Some(keyboard::EditKey::Commit) => {
                state.editor.commit(&mut state.document);
            }
            None => return None,
        }
        state.dirty = true;
        state.window.request_redraw();
        return None;
    }

    let action = config.keybindings.resolve(&binding?, mods)?;
    apply_action(state, action)
}

/// Releasing the rectangle key mid-drag commits the rectangle as-is.
pub fn handle_key_released(state: &mut WindowState, config: &Config, key: &Key) {
    if keyboard::binding_key(key).as_deref() != Some(config.canvas.rectangle_key.as_str()) {
        return;
    }
    state.rect_key_held = false;

    if state.mouse_pressed {
        let color = state.current_color();
        if let Some(shape) = state.tool.take_shape(color) {
            state.document.commit_shape(shape);
            state.dirty = true;
            state.window.request_redraw();
        }
    }
}

fn apply_action(state: &mut WindowState, action: KeyAction) -> Option<AppCommand> {
    match action {
        KeyAction::Undo => {
            // Commit the open entry first so undo targets it
            state.editor.commit(&mut state.document);
            state.document.undo();
        }
        KeyAction::Redo => {
            state.document.redo();
        }
        KeyAction::ClearCanvas => {
            state.editor.commit(&mut state.document);
            state.document.clear();
        }
        KeyAction::NextColor => {
            if !state.palette.is_empty() {
                state.palette_index = (state.palette_index + 1) % state.palette.len();
            }
        }
        KeyAction::PreviousColor => {
            if !state.palette.is_empty() {
                state.palette_index =
                    (state.palette_index + state.palette.len() - 1) % state.palette.len();
            }
        }
        KeyAction::IncreaseFontSize => {
            state.font_size_index =
                (state.font_size_index + 1).min(state.font_sizes.len().saturating_sub(1));
        }
        KeyAction::DecreaseFontSize => {
            state.font_size_index = state.font_size_index.saturating_sub(1);
        }
        KeyAction::NewWindow => return Some(AppCommand::NewWindow),
        KeyAction::Quit => return Some(AppCommand::Quit),
        other => {
            if let Some(index) = other.palette_index() {
                if index < state.palette.len() {
                    state.palette_index = index;
                }
            }
        }
    }
    state.dirty = true;
    state.window.request_redraw();
    None
}

/// Reconfigure the surface after a resize. Zero-sized surfaces are skipped
/// (minimized windows report 0x0).
pub fn handle_resize(state: &mut WindowState, device: &wgpu::Device, width: u32, height: u32) {
    if width == 0 || height == 0 {
        return;
    }
    state.gpu.config.width = width;
    state.gpu.config.height = height;
    state.gpu.surface.configure(device, &state.gpu.config);
    state.dirty = true;
    state.window.request_redraw();
}
