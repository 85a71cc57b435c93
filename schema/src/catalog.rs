//! Static catalog of the survey fields driving a prediction.
//!
//! DESIGN
//! ======
//! The catalog is the single source of truth for the form: field order,
//! labels, input kinds, numeric bounds, and select options all live here so
//! the form component stays a pure rendering of this table. Every field is
//! required. Option codes are what the backend expects in the request body.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// How a survey field is entered and parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free numeric entry, parsed to `f64`.
    Number,
    /// One option code from a fixed list.
    Select,
    /// Calendar date, parsed numerically.
    Date,
    /// Free text, passed through untouched.
    Text,
}

/// One selectable option of a [`FieldKind::Select`] field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureOption {
    /// Code sent on the wire.
    pub code: &'static str,
    /// Human-readable option text.
    pub display: &'static str,
}

/// Descriptor for one survey input field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureDescriptor {
    /// Unique key, used as the feature name in the request body.
    pub name: &'static str,
    /// Label shown above the input.
    pub label: &'static str,
    /// Input kind, driving both rendering and parsing.
    pub kind: FieldKind,
    /// Lower bound for numeric entry.
    pub min: Option<f64>,
    /// Upper bound for numeric entry.
    pub max: Option<f64>,
    /// Options for select entry; empty for other kinds.
    pub options: &'static [FeatureOption],
}

const fn number(name: &'static str, label: &'static str, min: f64, max: f64) -> FeatureDescriptor {
    FeatureDescriptor {
        name,
        label,
        kind: FieldKind::Number,
        min: Some(min),
        max: Some(max),
        options: &[],
    }
}

const fn select(
    name: &'static str,
    label: &'static str,
    options: &'static [FeatureOption],
) -> FeatureDescriptor {
    FeatureDescriptor {
        name,
        label,
        kind: FieldKind::Select,
        min: None,
        max: None,
        options,
    }
}

const fn opt(code: &'static str, display: &'static str) -> FeatureOption {
    FeatureOption { code, display }
}

const GENDER: &[FeatureOption] = &[opt("0", "Male"), opt("1", "Female"), opt("2", "Other")];

const EDUCATION: &[FeatureOption] = &[
    opt("0", "High School"),
    opt("1", "College"),
    opt("2", "Bachelor"),
    opt("3", "Master"),
    opt("4", "PhD"),
];

const EMPLOYMENT: &[FeatureOption] = &[
    opt("0", "Unemployed"),
    opt("1", "Part-time"),
    opt("2", "Full-time"),
    opt("3", "Self-employed"),
];

const MARITAL_STATUS: &[FeatureOption] = &[
    opt("0", "Single"),
    opt("1", "Married"),
    opt("2", "Divorced"),
    opt("3", "Widowed"),
];

const YES_NO: &[FeatureOption] = &[opt("0", "No"), opt("1", "Yes")];

/// The survey fields, in presentation order.
pub const FEATURES: &[FeatureDescriptor] = &[
    number("age", "Age", 18.0, 100.0),
    select("gender", "Gender", GENDER),
    select("education", "Education Level", EDUCATION),
    select("employment", "Employment Status", EMPLOYMENT),
    number("income", "Annual Income ($)", 0.0, 500_000.0),
    select("marital_status", "Marital Status", MARITAL_STATUS),
    number("children", "Number of Children", 0.0, 10.0),
    number("alcohol_consumption", "Alcohol Consumption (0-10)", 0.0, 10.0),
    number("drug_use", "Drug Use (0-10)", 0.0, 10.0),
    number("sleep_hours", "Average Sleep Hours", 0.0, 24.0),
    number("exercise_hours", "Exercise Hours/Week", 0.0, 40.0),
    number("stress_level", "Stress Level (0-10)", 0.0, 10.0),
    number("social_support", "Social Support (0-10)", 0.0, 10.0),
    select("therapy_history", "Previous Therapy", YES_NO),
    number("symptom_severity", "Symptom Severity (0-10)", 0.0, 10.0),
];

/// Look a field up by its wire name.
#[must_use]
pub fn find(name: &str) -> Option<&'static FeatureDescriptor> {
    FEATURES.iter().find(|field| field.name == name)
}
