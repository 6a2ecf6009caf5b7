//! Mock keyword service for tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::ports::{AiError, KeywordService};

/// Scripted keyword service with call capture.
#[derive(Debug, Default)]
pub struct MockKeywordService {
    keywords: Vec<String>,
    topic: String,
    fail: bool,
    /// (title, content) pairs seen by `seo_keywords`.
    calls: Mutex<Vec<(String, String)>>,
}

impl MockKeywordService {
    /// Returns the given keywords for every call.
    pub fn with_keywords(keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            topic: "테스트 주제".to_string(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_keywords(&[])
        }
    }

    /// Sets the topic suggestion.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Titles and contents this mock was asked about.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("mock poisoned").clone()
    }
}

#[async_trait]
impl KeywordService for MockKeywordService {
    async fn seo_keywords(&self, title: &str, content: &str) -> Result<Vec<String>, AiError> {
        self.calls
            .lock()
            .expect("mock poisoned")
            .push((title.to_string(), content.to_string()));
        if self.fail {
            return Err(AiError::Request("mock failure".to_string()));
        }
        Ok(self.keywords.clone())
    }

    async fn suggest_topic(&self) -> Result<String, AiError> {
        if self.fail {
            return Err(AiError::Request("mock failure".to_string()));
        }
        Ok(self.topic.clone())
    }
}
