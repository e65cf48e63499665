//! Shared formatting utilities for power display and console output

use console::Emoji;

/// Rocket emoji for launch/start operations
pub const ROCKET: Emoji = Emoji("🚀", ">");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Format a power value in watts
///
/// # Examples
///
/// ```
/// use smart_conserve::fmt::format_watts;
///
/// assert_eq!(format_watts(512.0), "512.00 W");
/// assert_eq!(format_watts(999.999), "1000.00 W");
/// ```
pub fn format_watts(watts: f64) -> String {
    format!("{:.2} W", watts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_watts_various_values() {
        assert_eq!(format_watts(0.0), "0.00 W");
        assert_eq!(format_watts(200.0), "200.00 W");
        assert_eq!(format_watts(750.126), "750.13 W");
    }
}
