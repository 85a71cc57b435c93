//! Shared wire schema for the FedMind prediction API.
//!
//! This crate owns every type that crosses the client/backend boundary:
//! the survey feature catalog, the request body shared by `POST /predict`
//! and `POST /compare`, and both response shapes. The backend is external;
//! nothing here is interpreted beyond what the client renders.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod catalog;

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

/// Model architectures served by the backend's trained grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    /// Logistic regression.
    #[serde(rename = "LR")]
    Lr,
    /// Multi-layer perceptron.
    #[serde(rename = "MLP")]
    Mlp,
    /// Deep multi-layer perceptron.
    #[serde(rename = "DeepMLP")]
    DeepMlp,
}

impl ModelKind {
    /// Every architecture, in the backend's own ordering.
    pub const ALL: [Self; 3] = [Self::Lr, Self::Mlp, Self::DeepMlp];

    /// Exact identifier used on the wire (`model_name` field).
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Lr => "LR",
            Self::Mlp => "MLP",
            Self::DeepMlp => "DeepMLP",
        }
    }

    /// Human-readable selector label.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Lr => "Logistic Regression",
            Self::Mlp => "MLP",
            Self::DeepMlp => "Deep MLP",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Error returned when a string is not a known model architecture.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown model architecture: {0}")]
pub struct ParseModelError(String);

impl FromStr for ModelKind {
    type Err = ParseModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LR" => Ok(Self::Lr),
            "MLP" => Ok(Self::Mlp),
            "DeepMLP" => Ok(Self::DeepMlp),
            other => Err(ParseModelError(other.to_owned())),
        }
    }
}

/// Privacy budget ε the backend trained its model grid under.
///
/// The grid is fixed: ε = 0.1 (strong privacy, noisier models) and ε = 5.0
/// (weak privacy, more accurate models). On the wire this is the bare
/// number, never a string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrivacyBudget {
    /// ε = 0.1.
    HighPrivacy,
    /// ε = 5.0.
    #[default]
    LowPrivacy,
}

impl PrivacyBudget {
    /// Both grid entries, strongest privacy first.
    pub const ALL: [Self; 2] = [Self::HighPrivacy, Self::LowPrivacy];

    /// Numeric ε sent on the wire.
    #[must_use]
    pub fn epsilon(self) -> f64 {
        match self {
            Self::HighPrivacy => 0.1,
            Self::LowPrivacy => 5.0,
        }
    }

    /// Match a wire value back to a grid entry.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn from_epsilon(value: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|budget| budget.epsilon() == value)
    }

    /// Selector label, e.g. `"ε = 0.1 (High Privacy)"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::HighPrivacy => "ε = 0.1 (High Privacy)",
            Self::LowPrivacy => "ε = 5.0 (Low Privacy)",
        }
    }
}

impl Serialize for PrivacyBudget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.epsilon())
    }
}

impl<'de> Deserialize<'de> for PrivacyBudget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::from_epsilon(value)
            .ok_or_else(|| D::Error::custom(format!("unsupported privacy budget: {value}")))
    }
}

/// Confidence bucket assigned by the backend, rendered as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// The bucket text exactly as the backend writes it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answered survey field.
///
/// Numeric fields carry the parsed number; select/text fields carry the
/// option code untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Code(String),
}

/// Insertion-ordered mapping of feature name to answered value.
///
/// One entry per answered field; unanswered fields have no entry.
pub type FeatureValues = OrderedMap<FeatureValue>;

/// Request body shared by `POST /predict` and `POST /compare`.
///
/// Constructed fresh per submission and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Answered survey fields.
    pub features: FeatureValues,
    /// Architecture to run.
    pub model_name: ModelKind,
    /// ε the selected model was trained under.
    pub privacy_budget: PrivacyBudget,
}

/// Prediction returned by the backend for one model/ε pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Class label: `0` = no treatment needed, `1` = treatment needed.
    pub prediction: u8,
    /// Positive-class probability in `[0, 1]`.
    pub probability: f64,
    /// Echo of the model that produced the prediction.
    pub model_name: String,
    /// Echo of the ε the model was trained under.
    pub privacy_budget: f64,
    /// Confidence bucket derived by the backend.
    pub confidence: Confidence,
}

impl PredictionResult {
    /// Whether the backend predicted the positive (treatment-needed) class.
    #[must_use]
    pub fn needs_treatment(&self) -> bool {
        self.prediction == 1
    }
}

/// Response body of `POST /compare`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResponse {
    /// One entry per model/ε grid cell, keyed like `"MLP_eps5.0"`, in the
    /// backend's emission order.
    pub comparison: OrderedMap<PredictionResult>,
}

/// Minimal insertion-ordered, string-keyed map.
///
/// JSON objects round-trip in document order, which is the order the
/// comparison panel renders rows in. Lookups are linear; maps here hold at
/// most a few dozen entries.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert or replace a value. Replacement keeps the key's original
    /// position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Drop a key if present.
    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|(existing, _)| existing != key);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut out = OrderedMap {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    out.insert(key, value);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}
