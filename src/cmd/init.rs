//! Init command implementation
//!
//! Handles the `smart-conserve init` command which writes a starter
//! configuration file to the current directory.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{self, ConfigFile, ConfigLoader, LogLevel};
use crate::fmt::{CHECKMARK, INFO, ROCKET, WARNING};

/// Starter configuration written by `init`
pub fn starter_config() -> ConfigFile {
    ConfigFile {
        log_level: Some(LogLevel::Info),
        ..ConfigFile::default()
    }
}

/// Initialize smart-conserve configuration in the current directory
///
/// # Examples
///
/// ```no_run
/// use smart_conserve::cmd::init::cmd_init;
///
/// cmd_init()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init() -> Result<()> {
    let project_root = env::current_dir()?;
    init_in(&project_root)?;
    Ok(())
}

/// Write the starter config into `project_root`
///
/// Returns `false` without touching anything if a config already exists.
pub fn init_in(project_root: &Path) -> Result<bool> {
    println!(
        "{} {} Initializing smart-conserve",
        ROCKET,
        style("smart-conserve init").bold()
    );
    println!();

    if ConfigLoader::exists(project_root) {
        println!(
            "{} Config file already exists: {}",
            WARNING,
            style(config::CONFIG_FILE_NAME).cyan()
        );
        println!("   Delete it first or edit manually to update.");
        return Ok(false);
    }

    ConfigLoader::save(&starter_config(), project_root)?;

    println!(
        "{} Created {}",
        CHECKMARK,
        style(config::CONFIG_FILE_NAME).cyan().bold()
    );
    println!();
    println!("{}  Settings:", INFO);
    println!(
        "   {} seed       fix the simulation for reproducible runs",
        style("•").dim()
    );
    println!("   {} format     \"log\" or \"json\"", style("•").dim());
    println!(
        "   {} log-level  error, warn, info, debug or trace",
        style("•").dim()
    );
    println!();
    println!(
        "   Run {} to simulate a week of usage",
        style("smart-conserve run").cyan()
    );

    Ok(true)
}
