//! Generative recommendation pipeline
//!
//! prompt -> text model -> JSON extraction -> normalization, with the curated
//! catalog standing in whenever any step fails. Nothing here returns an error
//! to the caller: the only observable output is a recommendation list plus
//! the [`RecommendationSource`] it came from.

use std::sync::Arc;

use crate::{
    error::GenerationFailure,
    models::{Recommendation, RecommendationRequest, RecommendationSource, WatchHistoryItem},
    services::providers::TextModel,
};

pub mod catalog;
pub mod extract;
pub mod normalize;
pub mod prompt;

pub use catalog::lookup as fallback_recommendations;
pub use extract::extract_json;
pub use normalize::{from_free_text, normalize};
pub use prompt::build_prompt;

/// Outcome of one resolution call
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub recommendations: Vec<Recommendation>,
    pub source: RecommendationSource,
}

/// Orchestrates the generative path and its catalog fallback
#[derive(Clone)]
pub struct RecommendationResolver {
    model: Arc<dyn TextModel>,
}

impl RecommendationResolver {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Resolves recommendations for a typed request
    pub async fn resolve(
        &self,
        request: &RecommendationRequest,
        api_key: &str,
        endpoint_url: &str,
    ) -> Resolution {
        self.resolve_parts(
            &request.content_type,
            request.genre.as_deref(),
            request.preferences.as_deref(),
            &request.watch_history,
            api_key,
            endpoint_url,
        )
        .await
    }

    /// Returns recommendations for the given inputs, never failing
    pub async fn resolve_generative_recommendations(
        &self,
        content_type: &str,
        genre: Option<&str>,
        preferences: Option<&str>,
        watch_history: &[WatchHistoryItem],
        api_key: &str,
        endpoint_url: &str,
    ) -> Vec<Recommendation> {
        self.resolve_parts(
            content_type,
            genre,
            preferences,
            watch_history,
            api_key,
            endpoint_url,
        )
        .await
        .recommendations
    }

    async fn resolve_parts(
        &self,
        content_type: &str,
        genre: Option<&str>,
        preferences: Option<&str>,
        watch_history: &[WatchHistoryItem],
        api_key: &str,
        endpoint_url: &str,
    ) -> Resolution {
        let prompt = build_prompt(content_type, genre, preferences, watch_history);

        match self.generate(&prompt, api_key, endpoint_url).await {
            Ok(resolution) => {
                tracing::info!(
                    content_type = %content_type,
                    provider = self.model.name(),
                    source = %resolution.source,
                    count = resolution.recommendations.len(),
                    "Generative recommendations resolved"
                );
                resolution
            }
            Err(failure) => {
                let recommendations = fallback_recommendations(content_type, genre);
                tracing::warn!(
                    content_type = %content_type,
                    genre = ?genre,
                    provider = self.model.name(),
                    reason = %failure,
                    count = recommendations.len(),
                    "Falling back to curated catalog"
                );
                Resolution {
                    recommendations,
                    source: RecommendationSource::Fallback,
                }
            }
        }
    }

    async fn generate(
        &self,
        prompt: &str,
        api_key: &str,
        endpoint_url: &str,
    ) -> Result<Resolution, GenerationFailure> {
        let reply = self.model.generate(prompt, api_key, endpoint_url).await?;

        let Some(json_text) = extract_json(&reply) else {
            tracing::debug!("No JSON found in model reply, scanning free text");
            return Ok(Resolution {
                recommendations: from_free_text(&reply),
                source: RecommendationSource::FreeText,
            });
        };

        let recommendations = normalize(json_text)?;
        if recommendations.is_empty() {
            return Err(GenerationFailure::NoUsableRecommendations);
        }

        Ok(Resolution {
            recommendations,
            source: RecommendationSource::Generative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockTextModel;

    const API_KEY: &str = "test_key";
    const ENDPOINT: &str = "http://test.local/generate";

    fn resolver_replying<F>(reply: F) -> RecommendationResolver
    where
        F: Fn() -> Result<String, GenerationFailure> + Send + 'static,
    {
        let mut model = MockTextModel::new();
        model.expect_name().return_const("mock");
        model
            .expect_generate()
            .times(1)
            .returning(move |_, _, _| reply());
        RecommendationResolver::new(Arc::new(model))
    }

    fn request(content_type: &str, genre: Option<&str>) -> RecommendationRequest {
        RecommendationRequest {
            content_type: content_type.to_string(),
            genre: genre.map(str::to_string),
            preferences: None,
            watch_history: vec![],
        }
    }

    #[tokio::test]
    async fn test_rate_limited_falls_back_to_unfiltered_movies() {
        let resolver = resolver_replying(|| Err(GenerationFailure::RateLimited));

        let resolution = resolver.resolve(&request("movies", None), API_KEY, ENDPOINT).await;

        assert_eq!(resolution.source, RecommendationSource::Fallback);
        assert_eq!(resolution.recommendations.len(), 5);
        assert!(resolution
            .recommendations
            .iter()
            .any(|r| r.title == "The Godfather"));
    }

    #[tokio::test]
    async fn test_fenced_json_reply_is_normalized() {
        let resolver = resolver_replying(|| {
            Ok("```json\n[{\"title\":\"X\",\"type\":\"Horror\"}]\n```".to_string())
        });

        let resolution = resolver
            .resolve(&request("books", Some("Horror")), API_KEY, ENDPOINT)
            .await;

        assert_eq!(resolution.source, RecommendationSource::Generative);
        let recs = &resolution.recommendations;
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "X");
        assert_eq!(recs[0].kind, "Horror");
        assert_eq!(recs[0].description, "");
        assert_eq!(recs[0].year, "");
        assert_eq!(recs[0].rating, "");
        assert!(!recs[0].id.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_reply_falls_back_with_requested_genre() {
        let resolver = resolver_replying(|| {
            Err(GenerationFailure::MalformedReply("no candidates".to_string()))
        });

        let resolution = resolver
            .resolve(&request("books", Some("Horror")), API_KEY, ENDPOINT)
            .await;

        assert_eq!(resolution.source, RecommendationSource::Fallback);
        assert_eq!(resolution.recommendations.len(), 1);
        assert_eq!(resolution.recommendations[0].title, "The Shining");
    }

    #[tokio::test]
    async fn test_bold_lines_without_brackets_use_free_text() {
        let resolver = resolver_replying(|| Ok("Try these:\n**Dune**\n**Hyperion**\n".to_string()));

        let recs = resolver
            .resolve_generative_recommendations("books", None, None, &[], API_KEY, ENDPOINT)
            .await;

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].id, "1");
        assert_eq!(recs[1].id, "2");
        assert!(recs.iter().all(|r| r.kind == "AI Generated"));
    }

    #[tokio::test]
    async fn test_unparseable_json_falls_back() {
        let resolver = resolver_replying(|| Ok("Here: [{\"title\": \"X\", oops]".to_string()));

        let resolution = resolver.resolve(&request("tv", None), API_KEY, ENDPOINT).await;

        assert_eq!(resolution.source, RecommendationSource::Fallback);
        assert_eq!(resolution.recommendations, fallback_recommendations("tv", None));
    }

    #[tokio::test]
    async fn test_json_without_usable_records_falls_back() {
        let resolver = resolver_replying(|| Ok("[{\"name\": \"missing fields\"}]".to_string()));

        let resolution = resolver.resolve(&request("podcast", None), API_KEY, ENDPOINT).await;

        assert_eq!(resolution.source, RecommendationSource::Fallback);
        assert_eq!(resolution.recommendations.len(), 5);
    }

    #[tokio::test]
    async fn test_timeout_with_unknown_type_uses_default_catalog() {
        let resolver = resolver_replying(|| Err(GenerationFailure::Timeout));

        let recs = resolver
            .resolve_generative_recommendations("games", Some("mixed"), None, &[], API_KEY, ENDPOINT)
            .await;

        assert_eq!(recs, fallback_recommendations("movies", None));
    }

    #[tokio::test]
    async fn test_prompt_and_credentials_are_forwarded() {
        let mut model = MockTextModel::new();
        model.expect_name().return_const("mock");
        model
            .expect_generate()
            .withf(|prompt, api_key, endpoint_url| {
                prompt.contains("Content Type: tv")
                    && prompt.contains("Preferred Genre: Drama")
                    && prompt.contains("- Breaking Bad (Drama) - Rating: 5/5")
                    && api_key.to_string() == API_KEY
                    && endpoint_url.to_string() == ENDPOINT
            })
            .times(1)
            .returning(|_, _, _| Ok("[{\"title\":\"The Wire\",\"type\":\"Drama\"}]".to_string()));
        let resolver = RecommendationResolver::new(Arc::new(model));

        let history = vec![WatchHistoryItem {
            title: "Breaking Bad".to_string(),
            kind: "Drama".to_string(),
            rating: Some(5.0),
        }];
        let recs = resolver
            .resolve_generative_recommendations("tv", Some("Drama"), None, &history, API_KEY, ENDPOINT)
            .await;

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "The Wire");
    }
}
