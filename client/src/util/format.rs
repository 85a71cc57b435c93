//! Numeric formatting for display.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a `[0, 1]` probability as a percentage with one decimal place.
#[must_use]
pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Format an ε value compactly: `5` and `0.1`, no trailing zeros.
#[must_use]
pub fn format_epsilon(epsilon: f64) -> String {
    format!("{epsilon}")
}
