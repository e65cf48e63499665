//! Process-wide logger setup
//!
//! Log lines are `{timestamp} - {LEVEL} - {message}`. `RUST_LOG` overrides
//! the configured default level.

use env_logger::{Builder, Env, Target};
use std::io::Write;

use crate::config::LogLevel;

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard output (default report channel)
    Stdout,
    /// Standard error (keeps stdout free for JSON reports)
    Stderr,
}

/// Logger builder for the given level and target, ignoring the environment
pub fn logger_builder(level: LogLevel, target: LogTarget) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level.to_filter())
        .target(match target {
            LogTarget::Stdout => Target::Stdout,
            LogTarget::Stderr => Target::Stderr,
        })
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        });
    builder
}

/// Install the global logger
///
/// Only the first call takes effect; later calls are ignored so tests and
/// embedders can call this freely.
pub fn init_logging(level: LogLevel, target: LogTarget) {
    let mut builder = logger_builder(level, target);
    builder.parse_env(Env::default());

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
