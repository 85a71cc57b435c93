use super::*;
use schema::catalog;

fn field(name: &str) -> &'static catalog::FeatureDescriptor {
    catalog::find(name).unwrap()
}

// =============================================================
// FormSelection defaults
// =============================================================

#[test]
fn selection_defaults_match_the_form() {
    let selection = FormSelection::default();
    assert_eq!(selection.model, ModelKind::Mlp);
    assert_eq!(selection.privacy_budget, PrivacyBudget::LowPrivacy);
    assert!(!selection.compare_all);
}

// =============================================================
// set_field
// =============================================================

#[test]
fn set_field_parses_numeric_input() {
    let mut values = FeatureValues::new();
    set_field(&mut values, field("age"), "42.5");
    assert_eq!(values.get("age"), Some(&FeatureValue::Number(42.5)));
}

#[test]
fn set_field_coerces_unparsable_numbers_to_zero() {
    let mut values = FeatureValues::new();
    set_field(&mut values, field("age"), "forty");
    assert_eq!(values.get("age"), Some(&FeatureValue::Number(0.0)));
}

#[test]
fn set_field_passes_select_codes_through() {
    let mut values = FeatureValues::new();
    set_field(&mut values, field("gender"), "2");
    assert_eq!(values.get("gender"), Some(&FeatureValue::Code("2".to_owned())));
}

#[test]
fn set_field_removes_entry_on_empty_input() {
    let mut values = FeatureValues::new();
    set_field(&mut values, field("age"), "30");
    set_field(&mut values, field("age"), "");
    assert!(values.get("age").is_none());
    assert!(values.is_empty());
}

#[test]
fn set_field_replaces_without_duplicating() {
    let mut values = FeatureValues::new();
    set_field(&mut values, field("age"), "30");
    set_field(&mut values, field("age"), "31");
    assert_eq!(values.len(), 1);
    assert_eq!(values.get("age"), Some(&FeatureValue::Number(31.0)));
}

#[test]
fn set_field_trims_surrounding_whitespace() {
    let mut values = FeatureValues::new();
    set_field(&mut values, field("age"), "  29 ");
    assert_eq!(values.get("age"), Some(&FeatureValue::Number(29.0)));
}

// =============================================================
// missing_required
// =============================================================

#[test]
fn missing_required_lists_every_field_when_blank() {
    let values = FeatureValues::new();
    let missing = missing_required(catalog::FEATURES, &values);
    assert_eq!(missing.len(), catalog::FEATURES.len());
    assert_eq!(missing[0], "age");
}

#[test]
fn missing_required_is_empty_once_every_field_is_answered() {
    let mut values = FeatureValues::new();
    for descriptor in catalog::FEATURES {
        set_field(&mut values, descriptor, "1");
    }
    assert!(missing_required(catalog::FEATURES, &values).is_empty());
}

#[test]
fn missing_required_names_the_one_unanswered_field() {
    let mut values = FeatureValues::new();
    for descriptor in catalog::FEATURES {
        if descriptor.name != "stress_level" {
            set_field(&mut values, descriptor, "1");
        }
    }
    assert_eq!(
        missing_required(catalog::FEATURES, &values),
        vec!["stress_level"]
    );
}

// =============================================================
// request_plan
// =============================================================

#[test]
fn plain_submission_hits_predict_only() {
    assert_eq!(request_plan(false), &[Endpoint::Predict]);
}

#[test]
fn compare_submission_hits_both_endpoints_in_order() {
    assert_eq!(request_plan(true), &[Endpoint::Predict, Endpoint::Compare]);
}
