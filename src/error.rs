use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::HttpClient(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Reasons the generative path could not produce recommendations
///
/// Never surfaced to callers: the resolver turns every variant into a
/// fallback catalog lookup.
#[derive(thiserror::Error, Debug)]
pub enum GenerationFailure {
    #[error("text model rate limit exceeded")]
    RateLimited,

    #[error("text model returned status {0}")]
    Status(u16),

    #[error("text model request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed model reply: {0}")]
    MalformedReply(String),

    #[error("extracted JSON could not be parsed: {0}")]
    Extraction(#[from] serde_json::Error),

    #[error("model reply contained no usable recommendations")]
    NoUsableRecommendations,
}

impl From<reqwest::Error> for GenerationFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GenerationFailure::Timeout
        } else if err.is_decode() {
            GenerationFailure::MalformedReply(err.to_string())
        } else {
            GenerationFailure::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let response = AppError::InvalidInput("type is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_external_api_maps_to_bad_gateway() {
        let response = AppError::ExternalApi("upstream down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_extraction_failure_wraps_serde_error() {
        let err = serde_json::from_str::<Vec<serde_json::Value>>("[{").unwrap_err();
        let failure = GenerationFailure::from(err);
        assert!(matches!(failure, GenerationFailure::Extraction(_)));
        assert!(failure.to_string().starts_with("extracted JSON could not be parsed"));
    }
}
