use crate::{
    config::Config,
    error::AppResult,
    services::{GeminiClient, MlScoringClient, RecommendationResolver},
};
use std::sync::Arc;

/// Shared application state
///
/// Everything here is immutable after startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub resolver: RecommendationResolver,
    pub ml_client: MlScoringClient,
    pub gemini_api_key: Arc<str>,
    pub gemini_api_url: Arc<str>,
}

impl AppState {
    /// Builds the state from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let gemini = GeminiClient::new(config.gemini_timeout())?;
        let ml_client = MlScoringClient::new(config.ml_service_url.clone(), config.ml_timeout())?;

        Ok(Self {
            resolver: RecommendationResolver::new(Arc::new(gemini)),
            ml_client,
            gemini_api_key: Arc::from(config.gemini_api_key.as_str()),
            gemini_api_url: Arc::from(config.gemini_api_url.as_str()),
        })
    }
}
