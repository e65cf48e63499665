//! Configuration file data structures

use serde::{Deserialize, Serialize};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".smart-conserve.toml";

/// smart-conserve configuration file structure
///
/// Every field is optional; an empty file is equivalent to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Fixed RNG seed for reproducible simulations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// How the final report is emitted
    #[serde(default)]
    pub format: ReportFormat,

    /// Default log verbosity (overridden by `RUST_LOG`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Report through log lines only
    #[default]
    Log,
    /// Log lines on stderr, pretty JSON report on stdout
    Json,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Pipeline report (default)
    #[default]
    Info,
    /// Per-stage details
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Matching `log` filter
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
