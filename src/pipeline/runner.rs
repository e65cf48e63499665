//! Pipeline runner
//!
//! Sequences generate → analyze → recommend → report. Failures at any stage
//! end the run with a logged error instead of propagating.

use crate::analyzer::analyze_usage;
use crate::error::ConserveError;
use crate::generator::{generate_readings, ReadingSource, UniformSimulator};

use super::report::Report;

/// Per-run settings, after CLI and config file are merged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Fixed RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

/// Runs one simulated week through the pipeline
///
/// # Examples
///
/// ```
/// use smart_conserve::pipeline::{RunOptions, Runner};
///
/// let mut runner = Runner::new(RunOptions { seed: Some(3) });
/// let report = runner.run()?;
/// assert!(!report.recommendations.is_empty());
/// # Ok::<(), smart_conserve::error::ConserveError>(())
/// ```
pub struct Runner<S: ReadingSource = UniformSimulator> {
    source: S,
}

impl Runner {
    /// Runner backed by the uniform simulator
    pub fn new(options: RunOptions) -> Self {
        Self::with_source(UniformSimulator::new(options.seed))
    }
}

impl<S: ReadingSource> Runner<S> {
    /// Runner drawing readings from a custom source
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Run the pipeline once
    ///
    /// # Errors
    /// - [`ConserveError::NoReadings`] if the generator produced nothing
    /// - [`ConserveError::EmptySeries`] if analysis failed
    pub fn run(&mut self) -> Result<Report, ConserveError> {
        let readings = generate_readings(&mut self.source);
        if readings.is_empty() {
            return Err(ConserveError::NoReadings);
        }
        log::debug!("Generated {} hourly readings", readings.len());

        let insights = analyze_usage(&readings).ok_or(ConserveError::EmptySeries)?;

        let report = Report::new(insights);
        report.log();

        Ok(report)
    }
}

/// Run the pipeline, logging any failure instead of returning it
pub fn run_smart_conserve(options: RunOptions) -> Option<Report> {
    match Runner::new(options).run() {
        Ok(report) => Some(report),
        Err(e) => {
            log::error!("Error running smart-conserve: {}", e);
            None
        }
    }
}
