//! DeleteArticleHandler - remove an article from the dashboard.

use super::SharedRepository;
use crate::domain::content::ContentError;
use crate::domain::foundation::ArticleId;

pub struct DeleteArticleHandler {
    repository: SharedRepository,
}

impl DeleteArticleHandler {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    /// Deleting an unknown id is a no-op, not an error.
    pub async fn handle(&self, id: ArticleId) -> Result<(), ContentError> {
        let mut repo = self.repository.lock().await;
        repo.remove(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryBlobStore;
    use crate::domain::content::ContentRepository;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[tokio::test]
    async fn deletes_by_id() {
        let store = Arc::new(InMemoryBlobStore::new());
        let repository = Arc::new(Mutex::new(ContentRepository::load_or_default(store).await));
        let id = repository.lock().await.articles()[0].id;

        let handler = DeleteArticleHandler::new(repository.clone());
        handler.handle(id).await.unwrap();

        assert!(repository.lock().await.article(id).is_none());
    }
}
