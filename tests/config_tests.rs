//! Configuration loading functional tests
//!
//! Exercises file loading, partial configs, and keybinding resolution
//! against real files in a temp directory.

mod common;

use common::TestEnvironment;
use slate_config::{Config, ConfigError, KeyAction, KeyModifiers};

const CTRL: KeyModifiers = KeyModifiers {
    ctrl: true,
    alt: false,
    shift: false,
    logo: false,
};

#[test]
fn test_load_full_config_file() {
    let env = TestEnvironment::new();
    let path = env.write_config(
        r##"
[window]
title = "Scratchpad"
width = 800
height = 600

[canvas]
background = "#202020"
palette = ["#ffffff", "#ff8800"]
rectangle_key = "r"

[font]
family = ["Fira Sans"]
size = 14.0
sizes = [12.0, 14.0, 18.0]

[[keybindings.bindings]]
key = "u"
modifiers = { ctrl = true }
action = "undo"
"##,
    );

    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.window.title, "Scratchpad");
    assert_eq!(config.window.width, 800);
    assert_eq!(config.canvas.rectangle_key, "r");
    assert_eq!(config.canvas.palette_rgba().len(), 2);
    assert_eq!(config.font.sizes, vec![12.0, 14.0, 18.0]);

    // Custom bindings replace the defaults entirely
    assert_eq!(config.keybindings.resolve("u", CTRL), Some(KeyAction::Undo));
    assert_eq!(config.keybindings.resolve("z", CTRL), None);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let env = TestEnvironment::new();
    let path = env.write_config("[canvas]\nbackground = \"#000000\"\n");

    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.canvas.background_rgba(), [0.0, 0.0, 0.0, 1.0]);
    // Everything else stays at defaults
    assert_eq!(config.window.title, "Slate");
    assert_eq!(config.canvas.palette.len(), 8);
    assert_eq!(config.keybindings.resolve("z", CTRL), Some(KeyAction::Undo));
}

#[test]
fn test_missing_file_is_io_error() {
    let env = TestEnvironment::new();
    let path = env.config_dir.join("does-not-exist.toml");
    match Config::load_from(&path) {
        Err(ConfigError::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_malformed_file_is_parse_error() {
    let env = TestEnvironment::new();
    let path = env.write_config("[window\ntitle = ");
    match Config::load_from(&path) {
        Err(ConfigError::Parse(_)) => {}
        other => panic!("expected Parse error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_save_and_reload_roundtrip() {
    let env = TestEnvironment::new();
    let path = env.config_dir.join("saved.toml");

    let mut config = Config::default();
    config.window.title = "Roundtrip".to_string();
    config.canvas.rectangle_key = "x".to_string();
    config.save_to(&path).expect("config should save");

    let reloaded = Config::load_from(&path).expect("config should reload");
    assert_eq!(reloaded.window.title, "Roundtrip");
    assert_eq!(reloaded.canvas.rectangle_key, "x");
    assert_eq!(
        reloaded.keybindings.bindings.len(),
        config.keybindings.bindings.len()
    );
}

#[test]
fn test_generated_default_config_loads() {
    let env = TestEnvironment::new();
    let path = env.write_config(&Config::generate_default_config());

    let config = Config::load_from(&path).expect("generated config should load");
    assert_eq!(config.window.width, 1024);
    assert_eq!(config.keybindings.resolve("k", CTRL), Some(KeyAction::ClearCanvas));
    assert_eq!(config.keybindings.resolve("q", CTRL), Some(KeyAction::Quit));
}
