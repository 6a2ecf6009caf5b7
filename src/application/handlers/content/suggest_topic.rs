//! SuggestTopicHandler - fetch one sentence of content inspiration.

use std::sync::Arc;

use crate::ports::{AiError, KeywordService};

pub struct SuggestTopicHandler {
    keywords: Arc<dyn KeywordService>,
}

impl SuggestTopicHandler {
    pub fn new(keywords: Arc<dyn KeywordService>) -> Self {
        Self { keywords }
    }

    /// The production adapter resolves its own failures to a fixed fallback
    /// sentence, so an `Err` here means a collaborator without that
    /// guarantee was wired in.
    pub async fn handle(&self) -> Result<String, AiError> {
        self.keywords.suggest_topic().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockKeywordService;

    #[tokio::test]
    async fn returns_the_suggestion() {
        let mock = MockKeywordService::with_keywords(&[]).with_topic("예술과 부의 연결");
        let handler = SuggestTopicHandler::new(Arc::new(mock));
        assert_eq!(handler.handle().await.unwrap(), "예술과 부의 연결");
    }
}
