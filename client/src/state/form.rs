//! Form-state core: field parsing, validation, and the request plan.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use schema::catalog::{FeatureDescriptor, FieldKind};
use schema::{FeatureValue, FeatureValues, ModelKind, PrivacyBudget};

/// Model, privacy, and compare-mode choices beside the survey fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormSelection {
    pub model: ModelKind,
    pub privacy_budget: PrivacyBudget,
    pub compare_all: bool,
}

impl Default for FormSelection {
    fn default() -> Self {
        Self {
            model: ModelKind::Mlp,
            privacy_budget: PrivacyBudget::LowPrivacy,
            compare_all: false,
        }
    }
}

/// Store a raw input value under the field's name.
///
/// Numeric kinds parse to `f64`; an unparsable non-empty entry stores `0.0`
/// rather than failing, matching the backend's own zero-substitution for
/// absent features. Select/text kinds pass the code through untouched. An
/// empty value removes the entry, so an unanswered field stays absent and
/// [`missing_required`] keeps blocking submission.
pub fn set_field(values: &mut FeatureValues, field: &FeatureDescriptor, raw: &str) {
    let raw = raw.trim();
    if raw.is_empty() {
        values.remove(field.name);
        return;
    }
    let value = match field.kind {
        FieldKind::Number | FieldKind::Date => {
            FeatureValue::Number(raw.parse::<f64>().unwrap_or(0.0))
        }
        FieldKind::Select | FieldKind::Text => FeatureValue::Code(raw.to_owned()),
    };
    values.insert(field.name, value);
}

/// Names of catalog fields that have no value yet, in catalog order.
///
/// Every field is required; submission is blocked while this is non-empty.
#[must_use]
pub fn missing_required<'a>(
    catalog: &'a [FeatureDescriptor],
    values: &FeatureValues,
) -> Vec<&'a str> {
    catalog
        .iter()
        .filter(|field| !values.contains_key(field.name))
        .map(|field| field.name)
        .collect()
}

/// Which endpoint(s) one submission hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Predict,
    Compare,
}

/// Resolve the compare-all toggle into the sequence of calls to make.
///
/// Compare mode still fetches the single prediction first so the results
/// card and the comparison table update together.
#[must_use]
pub fn request_plan(compare_all: bool) -> &'static [Endpoint] {
    if compare_all {
        &[Endpoint::Predict, Endpoint::Compare]
    } else {
        &[Endpoint::Predict]
    }
}
