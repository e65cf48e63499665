//! Summary statistics over a reading series

use serde::Serialize;
use std::fmt;

use crate::error::ConserveError;
use crate::fmt::format_watts;
use crate::generator::Reading;

/// Average, peak and lowest usage over a series
///
/// # Examples
///
/// ```
/// use smart_conserve::analyzer::Insights;
///
/// let insights = Insights::from_readings(&[300.0, 600.0, 900.0]).unwrap();
/// assert_eq!(insights.average, 600.0);
/// assert_eq!(insights.max, 900.0);
/// assert_eq!(insights.min, 300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Insights {
    /// Arithmetic mean of all readings (watts)
    #[serde(rename = "average_usage")]
    pub average: f64,
    /// Highest reading (watts)
    #[serde(rename = "max_usage")]
    pub max: f64,
    /// Lowest reading (watts)
    #[serde(rename = "min_usage")]
    pub min: f64,
}

impl Insights {
    /// Compute insights, failing on an empty series
    pub fn from_readings(readings: &[Reading]) -> Result<Self, ConserveError> {
        if readings.is_empty() {
            return Err(ConserveError::EmptySeries);
        }

        // Running mean: each step adds r/n - mean/n, which cannot overflow
        // for finite readings and never drifts on a constant series.
        let (mean, max, min, _) = readings.iter().fold(
            (0.0, f64::NEG_INFINITY, f64::INFINITY, 0.0),
            |(mean, max, min, n), &r| {
                let n = n + 1.0;
                (mean + (r / n - mean / n), max.max(r), min.min(r), n)
            },
        );

        // Rounding can still leave the mean an ulp outside the observed range
        let average = if min <= max {
            mean.clamp(min, max)
        } else {
            mean
        };

        Ok(Self { average, max, min })
    }

    /// Peak-to-trough range
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

impl fmt::Display for Insights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "average_usage: {}, max_usage: {}, min_usage: {}",
            format_watts(self.average),
            format_watts(self.max),
            format_watts(self.min)
        )
    }
}

/// Compute insights, logging and returning `None` on failure
pub fn analyze_usage(readings: &[Reading]) -> Option<Insights> {
    match Insights::from_readings(readings) {
        Ok(insights) => Some(insights),
        Err(e) => {
            log::error!("Error analyzing energy usage: {}", e);
            None
        }
    }
}
