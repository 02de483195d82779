//! Common test utilities
//!
//! Isolated temp directories for config file tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated config directory
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub config_dir: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            config_dir,
        }
    }

    /// Write a config file and return its path
    pub fn write_config(&self, content: &str) -> PathBuf {
        let config_path = self.config_dir.join("config.toml");
        std::fs::write(&config_path, content).expect("Failed to write test config");
        config_path
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
