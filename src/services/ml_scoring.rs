use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    models::UserInterest,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoringRequest<'a> {
    user_interests: &'a [UserInterest],
    category_filter: &'a str,
}

/// One item scored by the ML service
///
/// The service's schema is owned elsewhere, so items are kept as raw JSON
/// objects and passed through untouched. Accessors read the commonly used
/// fields leniently: a field of an unexpected type reads as `None` instead of
/// failing the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ScoredItem(pub Map<String, Value>);

impl ScoredItem {
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn genre(&self) -> Option<&str> {
        self.0.get("genre").and_then(Value::as_str)
    }

    pub fn score(&self) -> Option<f64> {
        self.number("score")
    }

    pub fn rating(&self) -> Option<f64> {
        self.number("rating")
    }

    /// Numbers, or strings holding a number
    fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Client for the remote ML scoring service
#[derive(Clone)]
pub struct MlScoringClient {
    http_client: HttpClient,
    url: String,
}

impl MlScoringClient {
    pub fn new(url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http_client, url })
    }

    /// Scores content for the given interests
    ///
    /// Failures are logged and produce an empty list; callers treat "no ML
    /// results" and "ML unavailable" the same way.
    pub async fn recommend(
        &self,
        user_interests: &[UserInterest],
        category_filter: &str,
    ) -> Vec<ScoredItem> {
        match self.fetch(user_interests, category_filter).await {
            Ok(items) => {
                tracing::info!(
                    category = %category_filter,
                    results = items.len(),
                    "ML recommendations fetched"
                );
                items
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    url = %self.url,
                    "Error calling ML scoring service"
                );
                Vec::new()
            }
        }
    }

    async fn fetch(
        &self,
        user_interests: &[UserInterest],
        category_filter: &str,
    ) -> AppResult<Vec<ScoredItem>> {
        let response = self
            .http_client
            .post(&self.url)
            .json(&ScoringRequest {
                user_interests,
                category_filter,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "ML service returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}
