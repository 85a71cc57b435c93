//! Severity styling derived from prediction outputs.
//!
//! The thresholds are fixed display policy: a probability far from 0.5 is a
//! decisive answer, close to 0.5 is uncertain. All comparisons are strict
//! inequalities.

#[cfg(test)]
#[path = "severity_test.rs"]
mod severity_test;

use schema::Confidence;

/// How decisively the probability separates the two classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    /// `> 0.8` or `< 0.2`.
    Strong,
    /// `> 0.7` or `< 0.3`.
    Moderate,
    /// Everything near 0.5.
    Weak,
}

/// Classify a probability into its display tier.
#[must_use]
pub fn probability_tier(probability: f64) -> Tier {
    if probability > 0.8 || probability < 0.2 {
        Tier::Strong
    } else if probability > 0.7 || probability < 0.3 {
        Tier::Moderate
    } else {
        Tier::Weak
    }
}

/// CSS modifier class for a tier.
#[must_use]
pub fn tier_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Strong => "metric--good",
        Tier::Moderate => "metric--warn",
        Tier::Weak => "metric--bad",
    }
}

/// CSS modifier class for a probability value.
#[must_use]
pub fn probability_class(probability: f64) -> &'static str {
    tier_class(probability_tier(probability))
}

/// CSS modifier class for a backend confidence bucket.
#[must_use]
pub fn confidence_class(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => "metric--good",
        Confidence::Medium => "metric--warn",
        Confidence::Low => "metric--bad",
    }
}

/// Headline text for the single-prediction card.
#[must_use]
pub fn prediction_label(prediction: u8) -> &'static str {
    if prediction == 1 {
        "Needs mental health treatment"
    } else {
        "No immediate treatment needed"
    }
}

/// CSS modifier class for the headline; the positive class gets the
/// high-severity color.
#[must_use]
pub fn prediction_class(prediction: u8) -> &'static str {
    if prediction == 1 {
        "metric--bad"
    } else {
        "metric--good"
    }
}

/// Short label used by the comparison table rows.
#[must_use]
pub fn comparison_label(prediction: u8) -> &'static str {
    if prediction == 1 {
        "Treatment Needed"
    } else {
        "No Treatment"
    }
}
