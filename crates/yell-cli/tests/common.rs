//! Shared helpers for the CLI integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    temp_dir: TempDir,
    config: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = temp_dir.path().join("yell.toml");
        fs::write(&config, "").expect("Failed to write config");
        Self { temp_dir, config }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_config(&self, content: &str) {
        fs::write(&self.config, content).expect("Failed to write config");
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write input");
        path
    }

    /// `yell` with the fixture's private config and no timestamps.
    pub fn base_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("yell").expect("Failed to find binary");
        cmd.current_dir(self.temp_dir.path())
            .arg("--config")
            .arg(&self.config)
            .arg("--no-timestamp");
        cmd
    }

    /// [`base_command`](Self::base_command) without color at a fixed width.
    pub fn command(&self) -> Command {
        let mut cmd = self.base_command();
        cmd.arg("--color")
            .arg("never")
            .arg("--width")
            .arg("60");
        cmd
    }
}
