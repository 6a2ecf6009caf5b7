//! PublishArticleHandler - create an article from a dashboard draft.

use std::sync::Arc;

use super::SharedRepository;
use crate::domain::content::{Article, ArticleDraft, ContentError};
use crate::ports::KeywordService;

/// Handler for publishing a new article.
///
/// Tag generation is delegated to the keyword service; its failure never
/// blocks publication.
pub struct PublishArticleHandler {
    repository: SharedRepository,
    keywords: Arc<dyn KeywordService>,
}

impl PublishArticleHandler {
    pub fn new(repository: SharedRepository, keywords: Arc<dyn KeywordService>) -> Self {
        Self {
            repository,
            keywords,
        }
    }

    pub async fn handle(&self, draft: ArticleDraft) -> Result<Article, ContentError> {
        let mut repo = self.repository.lock().await;
        repo.publish(draft, &*self.keywords).await
    }
}
