//! Pipeline integration tests
//!
//! Exercises generator → analyzer → recommender through the public API.

use smart_conserve::analyzer::{analyze_usage, Insights};
use smart_conserve::error::ConserveError;
use smart_conserve::generator::{
    generate_readings, Reading, ReadingSource, UniformSimulator, HOURS_PER_WEEK,
};
use smart_conserve::pipeline::{run_smart_conserve, RunOptions, Runner};
use smart_conserve::recommender::{provide_recommendations, UsageBand};

mod common;
use common::assertions::{assert_approx_eq, assert_reading_in_range};

/// Replays a fixed list of readings, then fails
struct Replay {
    readings: Vec<Reading>,
}

impl ReadingSource for Replay {
    fn sample(&mut self, hour: usize) -> Result<Reading, ConserveError> {
        self.readings
            .get(hour)
            .copied()
            .ok_or_else(|| ConserveError::Source {
                hour,
                reason: "replay exhausted".to_string(),
            })
    }
}

#[test]
fn test_generated_week_has_expected_shape() {
    let readings = generate_readings(&mut UniformSimulator::from_entropy());
    assert_eq!(readings.len(), HOURS_PER_WEEK);
    for reading in readings {
        assert_reading_in_range(reading);
    }
}

#[test]
fn test_insights_match_manual_mean() {
    let readings = generate_readings(&mut UniformSimulator::seeded(8));
    let insights = analyze_usage(&readings).expect("non-empty series");

    let mean = readings.iter().sum::<f64>() / readings.len() as f64;
    assert_approx_eq(insights.average, mean, 1e-9);
    assert!(insights.max >= insights.average);
    assert!(insights.average >= insights.min);
}

#[test]
fn test_empty_series_yields_sentinel() {
    assert!(analyze_usage(&[]).is_none());
    assert!(matches!(
        Insights::from_readings(&[]),
        Err(ConserveError::EmptySeries)
    ));
}

#[test]
fn test_replayed_week_drives_band_selection() {
    let mut readings = vec![700.0; HOURS_PER_WEEK];
    readings[0] = 250.0;
    readings[1] = 990.0;

    let mut runner = Runner::with_source(Replay { readings });
    let report = runner.run().unwrap();

    assert_eq!(report.insights.min, 250.0);
    assert_eq!(report.insights.max, 990.0);
    assert_eq!(report.band, UsageBand::Moderate);
    assert_eq!(
        report.recommendations,
        provide_recommendations(report.insights.average)
    );
}

#[test]
fn test_short_replay_aborts_run() {
    let replay = Replay {
        readings: vec![400.0; 10],
    };
    let mut runner = Runner::with_source(replay);
    assert!(matches!(runner.run(), Err(ConserveError::NoReadings)));
}

#[test]
fn test_swallowing_runner_always_produces_tips() {
    for seed in 0..20 {
        let report = run_smart_conserve(RunOptions { seed: Some(seed) })
            .expect("simulated runs should not fail");
        assert!(!report.recommendations.is_empty());
    }
}
