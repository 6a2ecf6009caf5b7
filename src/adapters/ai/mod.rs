//! Keyword service adapters.

mod gemini_keyword_service;
mod mock_keyword_service;

pub use gemini_keyword_service::{GeminiConfig, GeminiKeywordService};
pub use mock_keyword_service::MockKeywordService;
