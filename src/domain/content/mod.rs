//! Content domain - articles and site settings.

mod article;
mod defaults;
mod repository;
mod settings;

pub use article::{Article, ArticleCategory, ArticleDraft};
pub use defaults::{default_articles, default_settings, FALLBACK_SEO_TAGS};
pub use repository::{ContentError, ContentRepository};
pub use settings::{SiteSettings, SocialLinks};
