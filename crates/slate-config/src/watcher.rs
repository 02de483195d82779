//! Configuration file watcher for hot-reloading
//!
//! Watches ~/.config/slate/config.toml for changes.

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::sync::mpsc::{Receiver, channel};
use std::time::Instant;

use crate::Config;

/// Debounce window in milliseconds
const DEBOUNCE_MS: u128 = 100;

/// Events from the config watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigEvent {
    /// config.toml was modified
    ConfigChanged,
}

/// Watches the config directory for changes
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<ConfigEvent>,
    last_event: Option<Instant>,
}

impl ConfigWatcher {
    /// Create a new config watcher. Returns None when the config directory
    /// cannot be determined or watched.
    pub fn new() -> Option<Self> {
        let config_dir = Config::config_dir()?;
        let config_path = config_dir.join("config.toml");

        let (tx, rx) = channel();

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, _>| {
            if let Ok(event) = res {
                if event.kind.is_modify() || event.kind.is_create() {
                    for path in &event.paths {
                        if path == &config_path {
                            let _ = tx.send(ConfigEvent::ConfigChanged);
                        }
                    }
                }
            }
        })
        .ok()?;

        watcher
            .watch(&config_dir, RecursiveMode::NonRecursive)
            .ok()?;

        log::info!("Watching {:?} for config changes", config_dir);

        Some(Self {
            _watcher: watcher,
            receiver: rx,
            last_event: None,
        })
    }

    /// Poll for config events (non-blocking) with debouncing
    pub fn poll(&mut self) -> Option<ConfigEvent> {
        while let Ok(event) = self.receiver.try_recv() {
            let now = Instant::now();
            if let Some(last) = self.last_event {
                if now.duration_since(last).as_millis() < DEBOUNCE_MS {
                    continue;
                }
            }
            self.last_event = Some(now);
            return Some(event);
        }
        None
    }
}
