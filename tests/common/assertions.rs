//! Test assertion helpers

/// Assert that two floating-point values are approximately equal
///
/// Use this instead of `assert_eq!` for f64 comparisons to avoid
/// floating-point precision issues.
#[allow(dead_code)]
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not approximately equal:\n  actual: {}\n  expected: {}\n  diff: {} (epsilon: {})",
        actual, expected, diff, epsilon
    );
}

/// Assert that a reading lies in the simulated range `[200, 1000)`
#[allow(dead_code)]
pub fn assert_reading_in_range(watts: f64) {
    assert!(
        (200.0..1000.0).contains(&watts),
        "Reading {} W outside simulated range [200, 1000)",
        watts
    );
}
