//! Threshold-based conservation tips
//!
//! The average reading is mapped to one of three non-overlapping usage
//! bands, each owning a fixed, ordered list of tips.

use serde::Serialize;

/// Averages strictly above this are high usage (watts)
pub const HIGH_USAGE_WATTS: f64 = 750.0;

/// Averages strictly above this, up to [`HIGH_USAGE_WATTS`], are moderate (watts)
pub const MODERATE_USAGE_WATTS: f64 = 500.0;

const HIGH_USAGE_TIPS: &[&str] = &[
    "Consider using energy-efficient appliances.",
    "Check insulation in your home to reduce heating/cooling costs.",
];

const MODERATE_USAGE_TIPS: &[&str] = &[
    "Unplug devices when not in use.",
    "Use programmable thermostats to reduce energy consumption.",
];

const LOW_USAGE_TIPS: &[&str] =
    &["You're doing great! Continue monitoring for further improvements."];

/// Usage band an average reading falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageBand {
    /// Average above 750 W
    High,
    /// Average in (500 W, 750 W]
    Moderate,
    /// Average at or below 500 W
    Low,
}

impl UsageBand {
    /// Classify an average reading
    ///
    /// Total over all `f64` values: anything that is not above either
    /// threshold, NaN included, is `Low`.
    ///
    /// # Examples
    ///
    /// ```
    /// use smart_conserve::recommender::UsageBand;
    ///
    /// assert_eq!(UsageBand::classify(751.0), UsageBand::High);
    /// assert_eq!(UsageBand::classify(750.0), UsageBand::Moderate);
    /// assert_eq!(UsageBand::classify(500.0), UsageBand::Low);
    /// ```
    pub fn classify(average: f64) -> Self {
        if average > HIGH_USAGE_WATTS {
            Self::High
        } else if average > MODERATE_USAGE_WATTS {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Tips for this band, in presentation order
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            Self::High => HIGH_USAGE_TIPS,
            Self::Moderate => MODERATE_USAGE_TIPS,
            Self::Low => LOW_USAGE_TIPS,
        }
    }

    /// Short label for reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

/// Conservation tips for an average reading
pub fn provide_recommendations(average: f64) -> Vec<String> {
    UsageBand::classify(average)
        .tips()
        .iter()
        .map(|tip| tip.to_string())
        .collect()
}
