//! Keyword service port - AI-backed SEO tagging and topic suggestion.
//!
//! Both operations are best-effort: adapters resolve most failures to fixed
//! fallback values internally, and callers that still see an error must
//! substitute their own fallback rather than fail the primary operation.

use async_trait::async_trait;

/// Errors from the AI collaborator.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("AI service request failed: {0}")]
    Request(String),

    #[error("AI service returned a malformed response: {0}")]
    MalformedResponse(String),
}

/// Port for AI keyword and topic generation.
#[async_trait]
pub trait KeywordService: Send + Sync {
    /// Suggest up to 5 SEO keywords for an article.
    async fn seo_keywords(&self, title: &str, content: &str) -> Result<Vec<String>, AiError>;

    /// Suggest one sentence of blog topic inspiration.
    async fn suggest_topic(&self) -> Result<String, AiError>;
}
