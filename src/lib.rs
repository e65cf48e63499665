#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! smart-conserve library
//!
//! Simulates a week of household power readings, summarizes them and picks
//! conservation tips by usage band. The CLI is a thin wrapper around
//! [`pipeline::Runner`]; everything here can be used programmatically.
//!
//! # Basic Example
//!
//! ```
//! use smart_conserve::analyzer::Insights;
//! use smart_conserve::generator::{generate_readings, UniformSimulator};
//! use smart_conserve::recommender::provide_recommendations;
//!
//! let readings = generate_readings(&mut UniformSimulator::seeded(1));
//! let insights = Insights::from_readings(&readings).unwrap();
//! assert!(insights.max >= insights.average && insights.average >= insights.min);
//!
//! let tips = provide_recommendations(insights.average);
//! assert!(!tips.is_empty());
//! ```
//!
//! # Custom Reading Sources
//!
//! ```
//! use smart_conserve::error::ConserveError;
//! use smart_conserve::generator::{Reading, ReadingSource};
//! use smart_conserve::pipeline::Runner;
//!
//! struct Flat;
//!
//! impl ReadingSource for Flat {
//!     fn sample(&mut self, _hour: usize) -> Result<Reading, ConserveError> {
//!         Ok(650.0)
//!     }
//! }
//!
//! let report = Runner::with_source(Flat).run().unwrap();
//! assert_eq!(report.recommendations[0], "Unplug devices when not in use.");
//! ```

/// Summary statistics over reading series
pub mod analyzer;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Synthetic reading generation
pub mod generator;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Logger setup
pub mod logging;
/// Pipeline orchestration
pub mod pipeline;
/// Threshold-based conservation tips
pub mod recommender;
