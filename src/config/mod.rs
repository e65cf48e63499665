//! Configuration management for smart-conserve
//!
//! This module provides:
//! - .smart-conserve.toml config file support
//! - Loading and saving through the [`FileSystem`](crate::infra::FileSystem) seam

pub mod file;
pub mod loader;

pub use file::{ConfigFile, LogLevel, ReportFormat, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
