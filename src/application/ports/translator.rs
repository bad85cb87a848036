//! Translation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::translation::TranslationPrompt;

/// Translation errors
#[derive(Debug, Clone, Error)]
pub enum TranslationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty translation response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for the external translation backend.
///
/// Latency and failure modes are opaque to callers; the backend must be
/// treated as untrusted and unbounded.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` according to the prompt.
    ///
    /// # Returns
    /// The translated text or an error
    async fn translate(
        &self,
        text: &str,
        prompt: &TranslationPrompt,
    ) -> Result<String, TranslationError>;
}
