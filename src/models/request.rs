use serde::{Deserialize, Serialize};

/// Body of a generative recommendation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    /// One of `books`, `movies`, `tv`, `podcast`; anything else is served as movies
    #[serde(rename = "type", alias = "contentType")]
    pub content_type: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub preferences: Option<String>,
    #[serde(default, rename = "watchHistory")]
    pub watch_history: Vec<WatchHistoryItem>,
}

/// Something the user has already watched, read or listened to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchHistoryItem {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// 0–5 scale
    #[serde(default)]
    pub rating: Option<f64>,
}

/// A (category, genre) pair forwarded to the ML scoring service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInterest {
    pub category: String,
    pub genre: String,
}
