//! Error types with contextual suggestions
//!
//! Pipeline stages surface failures as [`ConserveError`]. The runner logs them
//! and carries on, so nothing here maps to a process exit code.
//!
//! # Examples
//!
//! ```
//! use smart_conserve::analyzer::Insights;
//! use smart_conserve::error::ConserveError;
//!
//! match Insights::from_readings(&[]) {
//!     Ok(insights) => println!("average: {}", insights.average),
//!     Err(ConserveError::EmptySeries) => eprintln!("nothing to analyze"),
//!     Err(e) => eprintln!("analysis failed: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the simulate/analyze/recommend pipeline and its config layer
#[derive(Error, Debug)]
pub enum ConserveError {
    /// Generator produced no readings
    #[error("No energy data available.")]
    NoReadings,

    /// Analyzer was handed an empty series
    #[error("Could not analyze energy data: series is empty")]
    EmptySeries,

    /// Reading source failed to produce a sample
    #[error("reading source failed at hour {hour}: {reason}")]
    Source {
        /// Hour index being sampled
        hour: usize,
        /// Failure description from the source
        reason: String,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration file: {path}")]
    Config {
        /// Path to the config file
        path: PathBuf,
        #[source]
        /// TOML parse error
        source: toml_edit::de::Error,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Configuration could not be serialized
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml_edit::ser::Error),

    /// Report could not be serialized
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl ConserveError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use smart_conserve::error::ConserveError;
    ///
    /// let suggestion = ConserveError::NoReadings.suggestion();
    /// assert!(suggestion.unwrap().contains("--seed"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::NoReadings | Self::Source { .. } => Some(
                "Re-run the simulation, or pass --seed to reproduce a specific run".to_string(),
            ),
            Self::EmptySeries => {
                Some("The analyzer needs at least one reading to compute insights".to_string())
            }
            Self::Config { path, .. } => Some(format!(
                "Fix or delete {}, or run 'smart-conserve init' to regenerate it",
                path.display()
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
            Self::ConfigSerialize(_) => {
                Some("Seeds must fit in a signed 64-bit TOML integer".to_string())
            }
            Self::Report(_) => None,
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = error
            .downcast_ref::<ConserveError>()
            .and_then(ConserveError::suggestion)
        {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }
}
