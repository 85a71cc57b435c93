use super::*;

// =============================================================
// Probability tiers
// =============================================================

#[test]
fn decisive_probabilities_are_strong() {
    assert_eq!(probability_tier(0.85), Tier::Strong);
    assert_eq!(probability_tier(0.15), Tier::Strong);
}

#[test]
fn leaning_probabilities_are_moderate() {
    assert_eq!(probability_tier(0.75), Tier::Moderate);
    assert_eq!(probability_tier(0.25), Tier::Moderate);
}

#[test]
fn central_probabilities_are_weak() {
    assert_eq!(probability_tier(0.5), Tier::Weak);
    assert_eq!(probability_tier(0.35), Tier::Weak);
    assert_eq!(probability_tier(0.65), Tier::Weak);
}

#[test]
fn tier_boundaries_are_strict() {
    // Exactly 0.8 is not > 0.8, so it falls to the > 0.7 band.
    assert_eq!(probability_tier(0.8), Tier::Moderate);
    assert_eq!(probability_tier(0.2), Tier::Moderate);
    // Exactly 0.7 / 0.3 are not past either strict bound.
    assert_eq!(probability_tier(0.7), Tier::Weak);
    assert_eq!(probability_tier(0.3), Tier::Weak);
}

#[test]
fn probability_class_maps_tiers_to_modifiers() {
    assert_eq!(probability_class(0.85), "metric--good");
    assert_eq!(probability_class(0.75), "metric--warn");
    assert_eq!(probability_class(0.5), "metric--bad");
}

// =============================================================
// Confidence and prediction styling
// =============================================================

#[test]
fn confidence_classes_follow_bucket_severity() {
    assert_eq!(confidence_class(Confidence::High), "metric--good");
    assert_eq!(confidence_class(Confidence::Medium), "metric--warn");
    assert_eq!(confidence_class(Confidence::Low), "metric--bad");
}

#[test]
fn positive_prediction_gets_treatment_label_and_severe_color() {
    assert_eq!(prediction_label(1), "Needs mental health treatment");
    assert_eq!(prediction_class(1), "metric--bad");
}

#[test]
fn negative_prediction_gets_alternate_label_and_color() {
    assert_eq!(prediction_label(0), "No immediate treatment needed");
    assert_eq!(prediction_class(0), "metric--good");
}

#[test]
fn comparison_labels_are_short_forms() {
    assert_eq!(comparison_label(1), "Treatment Needed");
    assert_eq!(comparison_label(0), "No Treatment");
}
