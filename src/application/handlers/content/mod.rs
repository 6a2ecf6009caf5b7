//! Content management handlers (the dashboard's operations).

mod delete_article;
mod publish_article;
mod suggest_topic;
mod update_settings;

pub use delete_article::DeleteArticleHandler;
pub use publish_article::PublishArticleHandler;
pub use suggest_topic::SuggestTopicHandler;
pub use update_settings::UpdateSettingsHandler;

use crate::domain::content::ContentRepository;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to the single content repository.
pub type SharedRepository = Arc<Mutex<ContentRepository>>;
