//! UpdateSettingsHandler - save the site settings wholesale.

use super::SharedRepository;
use crate::domain::content::{ContentError, SiteSettings};

pub struct UpdateSettingsHandler {
    repository: SharedRepository,
}

impl UpdateSettingsHandler {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, settings: SiteSettings) -> Result<(), ContentError> {
        let mut repo = self.repository.lock().await;
        repo.save_settings(settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryBlobStore;
    use crate::domain::content::{default_settings, ContentRepository};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[tokio::test]
    async fn replaces_the_singleton() {
        let store = Arc::new(InMemoryBlobStore::new());
        let repository = Arc::new(Mutex::new(ContentRepository::load_or_default(store).await));
        let handler = UpdateSettingsHandler::new(repository.clone());

        let mut next = default_settings();
        next.accent_color = "#ff0000".to_string();
        handler.handle(next.clone()).await.unwrap();

        assert_eq!(repository.lock().await.settings(), &next);
    }
}
