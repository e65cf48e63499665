//! Final run report

use serde::Serialize;

use crate::analyzer::Insights;
use crate::error::ConserveError;
use crate::recommender::UsageBand;

/// Insights plus the tips selected for them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Summary statistics of the simulated week
    pub insights: Insights,
    /// Band the average usage falls into
    pub band: UsageBand,
    /// Conservation tips, in presentation order
    pub recommendations: Vec<String>,
}

impl Report {
    /// Build the report for a set of insights
    pub fn new(insights: Insights) -> Self {
        let band = UsageBand::classify(insights.average);
        Self {
            insights,
            band,
            recommendations: band.tips().iter().map(|tip| tip.to_string()).collect(),
        }
    }

    /// Emit the report through the logger
    pub fn log(&self) {
        log::info!("Energy Usage Insights: {{{}}}", self.insights);
        log::debug!(
            "Usage band: {} (spread {:.2} W)",
            self.band.label(),
            self.insights.spread()
        );
        log::info!("Energy Conservation Recommendations:");
        for rec in &self.recommendations {
            log::info!("- {}", rec);
        }
    }

    /// Pretty JSON rendering
    pub fn to_json(&self) -> Result<String, ConserveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
