/// Text-generation provider abstraction
///
/// The resolver only needs "prompt in, raw reply text out"; everything
/// provider-specific (request envelope, reply unwrapping, status handling)
/// lives behind this trait so a provider can be swapped or mocked.
use crate::error::GenerationFailure;

pub mod gemini;

pub use gemini::GeminiClient;

/// Trait for text-generation providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextModel: Send + Sync {
    /// Sends one prompt and returns the model's raw reply text
    ///
    /// Must not retry. Every non-success outcome, including rate limiting,
    /// timeouts and replies without text, is reported as a
    /// [`GenerationFailure`] rather than a panic.
    async fn generate(
        &self,
        prompt: &str,
        api_key: &str,
        endpoint_url: &str,
    ) -> Result<String, GenerationFailure>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
