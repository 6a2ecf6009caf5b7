//! Content repository - the ordered article collection and the singleton
//! site settings, persisted through the blob store.
//!
//! The repository is the sole writer of both store slots. Every mutating
//! operation updates memory first and persists before returning, so the
//! store always reflects the in-memory state once a call completes.

use chrono::Utc;
use std::sync::Arc;
use tracing::warn;

use super::{
    default_articles, default_settings, Article, ArticleDraft, SiteSettings, FALLBACK_SEO_TAGS,
};
use crate::domain::foundation::{ArticleId, ValidationError};
use crate::ports::{BlobStore, KeywordService, StoreError, StoreSlot};

/// Maximum number of SEO tags kept per article.
const MAX_SEO_TAGS: usize = 5;

/// Errors from content mutations.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owner of the article collection and site settings.
pub struct ContentRepository {
    store: Arc<dyn BlobStore>,
    articles: Vec<Article>,
    settings: SiteSettings,
}

impl ContentRepository {
    /// Load both slots from the store, falling back to the built-in
    /// defaults per slot.
    ///
    /// A slot that is missing, unreadable, or structurally invalid yields
    /// exactly the default value for that slot; the other slot is
    /// unaffected and nothing is ever partially applied.
    pub async fn load_or_default(store: Arc<dyn BlobStore>) -> Self {
        let articles = match Self::read_slot::<Vec<Article>>(&*store, StoreSlot::Articles).await {
            Some(list) => list,
            None => default_articles(),
        };
        let settings = match Self::read_slot::<SiteSettings>(&*store, StoreSlot::Settings).await {
            Some(settings) => settings,
            None => default_settings(),
        };
        Self {
            store,
            articles,
            settings,
        }
    }

    async fn read_slot<T: serde::de::DeserializeOwned>(
        store: &dyn BlobStore,
        slot: StoreSlot,
    ) -> Option<T> {
        let blob = match store.read(slot).await {
            Ok(Some(blob)) => blob,
            Ok(None) => return None,
            Err(err) => {
                warn!(slot = slot.key(), error = %err, "store read failed, using defaults");
                return None;
            }
        };
        match serde_json::from_str(&blob) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(slot = slot.key(), error = %err, "stored data malformed, using defaults");
                None
            }
        }
    }

    /// The full article collection, newest first.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Articles in one category, preserving collection order.
    pub fn articles_in(&self, category: super::ArticleCategory) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    /// Look up an article by id.
    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// The current site settings.
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Publish a draft: assign a fresh id and today's date, ask the keyword
    /// service for SEO tags, and prepend the article to the collection.
    ///
    /// Tagging failure never blocks publication; the fixed fallback pair is
    /// used instead. The articles slot is persisted before this returns.
    pub async fn publish(
        &mut self,
        draft: ArticleDraft,
        keywords: &dyn KeywordService,
    ) -> Result<Article, ContentError> {
        draft.validate()?;

        let mut seo_tags = match keywords.seo_keywords(&draft.title, &draft.content).await {
            Ok(tags) => tags,
            Err(err) => {
                warn!(error = %err, "keyword generation failed, using fallback tags");
                FALLBACK_SEO_TAGS.iter().map(|s| s.to_string()).collect()
            }
        };
        seo_tags.truncate(MAX_SEO_TAGS);

        let article = Article {
            id: ArticleId::new(),
            title: draft.title,
            content: draft.content,
            category: draft.category,
            image_url: draft.image_url,
            created_at: Utc::now().date_naive(),
            seo_tags,
        };

        self.articles.insert(0, article.clone());
        self.persist_articles().await?;
        Ok(article)
    }

    /// Remove an article by id. Absent ids are a no-op, not an error; the
    /// slot is persisted either way.
    pub async fn remove(&mut self, id: ArticleId) -> Result<(), ContentError> {
        self.articles.retain(|a| a.id != id);
        self.persist_articles().await?;
        Ok(())
    }

    /// Replace the settings record wholesale and persist it.
    pub async fn save_settings(&mut self, new_settings: SiteSettings) -> Result<(), ContentError> {
        self.settings = new_settings;
        let blob = serde_json::to_string(&self.settings)
            .map_err(|e| StoreError::Io(e.to_string()))?;
        self.store.write(StoreSlot::Settings, &blob).await?;
        Ok(())
    }

    async fn persist_articles(&self) -> Result<(), StoreError> {
        let blob =
            serde_json::to_string(&self.articles).map_err(|e| StoreError::Io(e.to_string()))?;
        self.store.write(StoreSlot::Articles, &blob).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockKeywordService;
    use crate::adapters::storage::InMemoryBlobStore;
    use crate::domain::content::ArticleCategory;

    fn draft(title: &str) -> ArticleDraft {
        ArticleDraft {
            title: title.to_string(),
            content: "본문".to_string(),
            category: ArticleCategory::Art,
            image_url: "https://picsum.photos/seed/x/800/600".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_store_yields_defaults() {
        let store = Arc::new(InMemoryBlobStore::new());
        let repo = ContentRepository::load_or_default(store).await;
        assert_eq!(repo.articles().len(), 3);
        assert_eq!(repo.settings(), &default_settings());
    }

    #[tokio::test]
    async fn malformed_slot_falls_back_independently() {
        let store = Arc::new(InMemoryBlobStore::new());
        store
            .write(StoreSlot::Articles, "{not json")
            .await
            .unwrap();
        let custom = {
            let mut s = default_settings();
            s.site_name = "커스텀".to_string();
            s
        };
        store
            .write(
                StoreSlot::Settings,
                &serde_json::to_string(&custom).unwrap(),
            )
            .await
            .unwrap();

        let repo = ContentRepository::load_or_default(store).await;
        // corrupt articles slot -> built-in seed, valid settings slot kept
        assert_eq!(repo.articles().len(), 3);
        assert_eq!(repo.settings().site_name, "커스텀");
    }

    #[tokio::test]
    async fn wrong_shape_is_discarded_not_merged() {
        let store = Arc::new(InMemoryBlobStore::new());
        // valid JSON, but not a sequence
        store
            .write(StoreSlot::Articles, "{\"title\":\"lone\"}")
            .await
            .unwrap();
        let repo = ContentRepository::load_or_default(store).await;
        assert_eq!(repo.articles(), default_articles().as_slice());
    }

    #[tokio::test]
    async fn publish_prepends_and_persists() {
        let store = Arc::new(InMemoryBlobStore::new());
        let keywords = MockKeywordService::with_keywords(&["x", "y"]);
        let mut repo = ContentRepository::load_or_default(store.clone()).await;
        let before = repo.articles().len();

        let article = repo.publish(draft("T"), &keywords).await.unwrap();
        assert_eq!(repo.articles().len(), before + 1);
        assert_eq!(repo.articles()[0].id, article.id);
        assert_eq!(article.seo_tags, vec!["x", "y"]);

        // the store reflects the new state before publish returned
        let blob = store.read(StoreSlot::Articles).await.unwrap().unwrap();
        let stored: Vec<Article> = serde_json::from_str(&blob).unwrap();
        assert_eq!(stored[0].title, "T");
    }

    #[tokio::test]
    async fn publish_survives_keyword_failure() {
        let store = Arc::new(InMemoryBlobStore::new());
        let keywords = MockKeywordService::failing();
        let mut repo = ContentRepository::load_or_default(store).await;

        let article = repo.publish(draft("T"), &keywords).await.unwrap();
        let expected: Vec<String> = FALLBACK_SEO_TAGS.iter().map(|s| s.to_string()).collect();
        assert_eq!(article.seo_tags, expected);
    }

    #[tokio::test]
    async fn publish_caps_tags_at_five() {
        let store = Arc::new(InMemoryBlobStore::new());
        let keywords = MockKeywordService::with_keywords(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut repo = ContentRepository::load_or_default(store).await;
        let article = repo.publish(draft("T"), &keywords).await.unwrap();
        assert_eq!(article.seo_tags.len(), 5);
    }

    #[tokio::test]
    async fn publish_rejects_blank_title() {
        let store = Arc::new(InMemoryBlobStore::new());
        let keywords = MockKeywordService::with_keywords(&[]);
        let mut repo = ContentRepository::load_or_default(store).await;
        let result = repo.publish(draft("  "), &keywords).await;
        assert!(matches!(result, Err(ContentError::Validation(_))));
    }

    #[tokio::test]
    async fn remove_is_noop_for_unknown_id() {
        let store = Arc::new(InMemoryBlobStore::new());
        let mut repo = ContentRepository::load_or_default(store).await;
        let before = repo.articles().len();
        repo.remove(ArticleId::new()).await.unwrap();
        assert_eq!(repo.articles().len(), before);
    }

    #[tokio::test]
    async fn remove_drops_existing_article() {
        let store = Arc::new(InMemoryBlobStore::new());
        let mut repo = ContentRepository::load_or_default(store.clone()).await;
        let id = repo.articles()[0].id;
        repo.remove(id).await.unwrap();
        assert!(repo.article(id).is_none());

        let blob = store.read(StoreSlot::Articles).await.unwrap().unwrap();
        let stored: Vec<Article> = serde_json::from_str(&blob).unwrap();
        assert!(stored.iter().all(|a| a.id != id));
    }

    #[tokio::test]
    async fn save_settings_replaces_wholesale() {
        let store = Arc::new(InMemoryBlobStore::new());
        let mut repo = ContentRepository::load_or_default(store.clone()).await;
        let mut next = default_settings();
        next.hero_title = "새 제목".to_string();
        repo.save_settings(next.clone()).await.unwrap();
        assert_eq!(repo.settings(), &next);

        let blob = store.read(StoreSlot::Settings).await.unwrap().unwrap();
        let stored: SiteSettings = serde_json::from_str(&blob).unwrap();
        assert_eq!(stored, next);
    }

    #[tokio::test]
    async fn articles_in_filters_by_category() {
        let store = Arc::new(InMemoryBlobStore::new());
        let repo = ContentRepository::load_or_default(store).await;
        let club = repo.articles_in(ArticleCategory::Club);
        assert_eq!(club.len(), 1);
        assert!(club
            .iter()
            .all(|a| a.category == ArticleCategory::Club));
    }
}
