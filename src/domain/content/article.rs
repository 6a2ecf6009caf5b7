//! Article value types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ArticleId, ValidationError};

/// The partition key for filtered views and the membership gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleCategory {
    Art,
    Club,
    Notice,
}

impl ArticleCategory {
    /// Whether articles in this category are restricted to VIP members.
    ///
    /// Club reports are the paid content; art and notice posts are free.
    pub fn requires_membership(&self) -> bool {
        matches!(self, ArticleCategory::Club)
    }
}

/// A published article.
///
/// Field names serialize in camelCase to stay compatible with payloads
/// persisted by earlier releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub category: ArticleCategory,
    pub image_url: String,
    pub created_at: NaiveDate,
    pub seo_tags: Vec<String>,
}

/// An article as submitted from the dashboard, before id, date, and SEO
/// tags are assigned.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub category: ArticleCategory,
    pub image_url: String,
}

impl ArticleDraft {
    /// Required-field validation, enforced before publication.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_club_requires_membership() {
        assert!(ArticleCategory::Club.requires_membership());
        assert!(!ArticleCategory::Art.requires_membership());
        assert!(!ArticleCategory::Notice.requires_membership());
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ArticleCategory::Notice).unwrap(),
            "\"notice\""
        );
    }

    #[test]
    fn article_serializes_camel_case() {
        let article = Article {
            id: ArticleId::new(),
            title: "T".to_string(),
            content: "C".to_string(),
            category: ArticleCategory::Art,
            image_url: "https://example.com/a.jpg".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            seo_tags: vec!["아트".to_string()],
        };
        let json = serde_json::to_value(&article).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("seoTags").is_some());
        assert_eq!(json["createdAt"], "2024-05-01");
    }

    #[test]
    fn draft_requires_title_and_content() {
        let draft = ArticleDraft {
            title: String::new(),
            content: "body".to_string(),
            category: ArticleCategory::Art,
            image_url: String::new(),
        };
        assert!(draft.validate().is_err());
    }
}
