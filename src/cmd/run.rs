//! Run command implementation
//!
//! Handles `smart-conserve run` (also the default when no subcommand is
//! given): merges CLI flags over the config file, installs the logger and
//! runs the pipeline once.

use anyhow::Result;
use std::env;

use crate::config::{ConfigFile, ConfigLoader, LogLevel, ReportFormat};
use crate::error::ConserveError;
use crate::logging::{init_logging, LogTarget};
use crate::pipeline::{run_smart_conserve, Report, RunOptions};

/// Flags accepted by the run command
#[derive(Debug, Clone, Copy, Default)]
pub struct RunArgs {
    /// Fixed RNG seed
    pub seed: Option<u64>,
    /// Emit the report as JSON on stdout
    pub json: bool,
    /// Only log warnings and errors
    pub quiet: bool,
}

/// Resolve run options, output format and log level
///
/// CLI flags win over the config file, which wins over defaults.
pub fn resolve_options(
    args: &RunArgs,
    config: &ConfigFile,
) -> (RunOptions, ReportFormat, LogLevel) {
    let format = if args.json {
        ReportFormat::Json
    } else {
        config.format
    };
    let level = if args.quiet {
        LogLevel::Warn
    } else {
        config.log_level.unwrap_or_default()
    };

    (
        RunOptions {
            seed: args.seed.or(config.seed),
        },
        format,
        level,
    )
}

/// Render the stdout payload for a finished run
///
/// `None` for the log format, whose report already went through the logger.
pub fn render_report(
    report: &Report,
    format: ReportFormat,
) -> Result<Option<String>, ConserveError> {
    match format {
        ReportFormat::Json => report.to_json().map(Some),
        ReportFormat::Log => Ok(None),
    }
}

/// Run the simulation pipeline once
///
/// Only configuration problems are returned as errors; pipeline failures are
/// logged and the command still succeeds.
///
/// # Examples
///
/// ```no_run
/// use smart_conserve::cmd::run::{cmd_run, RunArgs};
///
/// cmd_run(RunArgs { seed: Some(42), ..Default::default() })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = ConfigLoader::load(&project_root)?;

    let (options, format, level) = resolve_options(&args, &config);
    let target = match format {
        ReportFormat::Json => LogTarget::Stderr,
        ReportFormat::Log => LogTarget::Stdout,
    };
    init_logging(level, target);

    if let Some(seed) = options.seed {
        log::debug!("Using fixed seed {}", seed);
    }

    if let Some(report) = run_smart_conserve(options) {
        match render_report(&report, format) {
            Ok(Some(json)) => println!("{}", json),
            Ok(None) => {}
            Err(e) => log::error!("Error running smart-conserve: {}", e),
        }
    }
    Ok(())
}
