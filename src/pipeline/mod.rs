//! Energy analysis pipeline
//!
//! Implements the simulation run:
//! 1. generate a week of hourly readings
//! 2. reduce them to average/max/min insights
//! 3. pick conservation tips by usage band
//! 4. report through the logger

pub mod report;
pub mod runner;

pub use report::Report;
pub use runner::{run_smart_conserve, RunOptions, Runner};
