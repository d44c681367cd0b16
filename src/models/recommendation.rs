use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single recommendation returned to the client
///
/// `title` and `kind` are always non-empty; the remaining text fields may be
/// empty strings but are never null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Unique within one response, not persisted
    pub id: String,
    pub title: String,
    /// Genre or category label
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub year: String,
    pub rating: String,
}

/// Where a set of recommendations came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    /// Parsed from a JSON array in the model reply
    Generative,
    /// Scraped from bold markers in a prose reply
    FreeText,
    /// Curated catalog, the model call did not yield usable data
    Fallback,
}

impl RecommendationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationSource::Generative => "generative",
            RecommendationSource::FreeText => "free_text",
            RecommendationSource::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for RecommendationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loosely-typed record as emitted by the text model
///
/// Models are inconsistent about value types (`"year": 2010` vs
/// `"year": "2010"`), so every field is kept as raw JSON until normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default, rename = "type")]
    pub kind: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub rating: Option<Value>,
}

/// Renders a scalar JSON value as text; null, arrays and objects yield `None`
pub fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
