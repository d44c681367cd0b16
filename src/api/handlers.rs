use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{RecommendationRequest, UserInterest},
    services::ScoredItem,
};

use super::AppState;

/// Response header telling callers whether results are personalized or curated
pub const RECOMMENDATION_SOURCE_HEADER: &str = "x-recommendation-source";

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Generative recommendations for a content type
///
/// Always answers 200 with a non-empty list once the request is valid; a
/// degraded (catalog) answer is only visible through the source header.
pub async fn gemini_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<impl IntoResponse> {
    if request.content_type.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Content type cannot be empty".to_string(),
        ));
    }

    tracing::info!(
        request_id = %request_id,
        content_type = %request.content_type,
        genre = ?request.genre,
        history_len = request.watch_history.len(),
        "Processing generative recommendation request"
    );

    let resolution = state
        .resolver
        .resolve(&request, &state.gemini_api_key, &state.gemini_api_url)
        .await;

    tracing::info!(
        request_id = %request_id,
        source = %resolution.source,
        count = resolution.recommendations.len(),
        "Generative recommendations returned"
    );

    Ok((
        [(RECOMMENDATION_SOURCE_HEADER, resolution.source.as_str())],
        Json(resolution.recommendations),
    ))
}

/// ML-scored recommendations for a single (category, genre) interest
pub async fn ml_recommendations(
    State(state): State<AppState>,
    Path((category, genre)): Path<(String, String)>,
) -> Json<Vec<ScoredItem>> {
    let interests = vec![UserInterest {
        category: category.clone(),
        genre,
    }];
    Json(state.ml_client.recommend(&interests, &category).await)
}
