//! Keyboard input translation
//!
//! Maps winit key events onto the two things the app cares about: text
//! editing commands for the entry under focus, and the key/modifier strings
//! the keybinding config resolves against.

use slate_config::KeyModifiers;
use winit::keyboard::{Key, ModifiersState, NamedKey};

/// Editing command for the text entry under focus
#[derive(Debug, Clone, PartialEq)]
pub enum EditKey {
    Insert(String),
    Backspace,
    Commit,
}

/// Map a logical key to a text editing command
pub fn edit_key(key: &Key) -> Option<EditKey> {
    match key {
        Key::Character(c) => Some(EditKey::Insert(c.to_string())),
        Key::Named(NamedKey::Space) => Some(EditKey::Insert(" ".to_string())),
        Key::Named(NamedKey::Backspace) | Key::Named(NamedKey::Delete) => Some(EditKey::Backspace),
        Key::Named(NamedKey::Enter) | Key::Named(NamedKey::Escape) => Some(EditKey::Commit),
        _ => None,
    }
}

/// Map a logical key to the lowercase string keybindings are declared with.
/// Named keys are not bindable.
pub fn binding_key(key: &Key) -> Option<String> {
    match key {
        Key::Character(c) => Some(c.to_lowercase()),
        _ => None,
    }
}

/// Convert winit modifier state to the config representation
pub fn modifiers(state: ModifiersState) -> KeyModifiers {
    KeyModifiers {
        ctrl: state.control_key(),
        alt: state.alt_key(),
        shift: state.shift_key(),
        logo: state.super_key(),
    }
}
