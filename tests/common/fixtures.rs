//! Test fixture creation utilities

use smart_conserve::config::CONFIG_FILE_NAME;
use std::fs;
use tempfile::TempDir;

/// Empty working directory with no config file
#[allow(dead_code)]
pub fn empty_workdir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Working directory containing a `.smart-conserve.toml` with `contents`
#[allow(dead_code)]
pub fn workdir_with_config(contents: &str) -> TempDir {
    let dir = empty_workdir();
    fs::write(dir.path().join(CONFIG_FILE_NAME), contents).expect("Failed to write config");
    dir
}
