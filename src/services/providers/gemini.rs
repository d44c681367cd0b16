/// Gemini `generateContent` provider
///
/// Request: POST `<endpoint>?key=<api_key>` with a single user part and a
/// fixed generation config. Reply text is read from
/// `candidates[0].content.parts[0].text`.
use crate::{
    error::{AppResult, GenerationFailure},
    services::providers::TextModel,
};
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const TEMPERATURE: f32 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 2048;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
}

#[derive(Debug, Deserialize)]
struct ApiCandidate {
    #[serde(default)]
    content: Option<ApiContent>,
}

#[derive(Debug, Deserialize)]
struct ApiContent {
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(Debug, Deserialize)]
struct ApiPart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Result<String, GenerationFailure> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GenerationFailure::MalformedReply("no candidates".to_string()))?;

        candidate
            .content
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| {
                GenerationFailure::MalformedReply("candidate has no text part".to_string())
            })
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    http_client: HttpClient,
}

impl GeminiClient {
    /// Creates a client whose every request is bounded by `timeout`
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http_client })
    }

    pub fn with_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

#[async_trait::async_trait]
impl TextModel for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        api_key: &str,
        endpoint_url: &str,
    ) -> Result<String, GenerationFailure> {
        let response = self
            .http_client
            .post(endpoint_url)
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::TOO_MANY_REQUESTS => return Err(GenerationFailure::RateLimited),
            status => {
                let body = response.text().await.unwrap_or_default();
                tracing::debug!(status = %status, body = %body, "Gemini API error body");
                return Err(GenerationFailure::Status(status.as_u16()));
            }
        }

        let reply: GenerateContentResponse = response.json().await?;
        let text = reply.into_text()?;

        tracing::info!(
            reply_chars = text.chars().count(),
            provider = "gemini",
            "Text generation completed"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
