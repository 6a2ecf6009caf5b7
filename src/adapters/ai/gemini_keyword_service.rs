//! Gemini keyword service - SEO tagging and topic suggestion via the
//! Gemini `generateContent` API.
//!
//! Failures never propagate to publishing: a missing credential, a
//! malformed response, and a transport fault each resolve to their own
//! fixed fallback value.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::ports::{AiError, KeywordService};

/// Fallback keywords when no API credential is configured.
const FALLBACK_NO_KEY: [&str; 2] = ["아트", "부자"];
/// Fallback keywords when the model returns an empty or unusable body.
const FALLBACK_EMPTY: [&str; 2] = ["아트테크", "컬렉팅"];
/// Fallback keywords on request failure.
const FALLBACK_ERROR: [&str; 2] = ["아트온톡", "재테크"];

const TOPIC_FALLBACK_NO_KEY: &str = "당신의 가치를 높이는 아트 컬렉션";
const TOPIC_FALLBACK_EMPTY: &str = "미술 시장의 흐름과 투자 전략";
const TOPIC_FALLBACK_ERROR: &str = "당신만의 예술적 취향을 찾는 법";

/// Configuration for the Gemini adapter.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; absent means every call resolves to fallbacks.
    api_key: Option<Secret<String>>,
    /// Model name, e.g. "gemini-3-flash-preview".
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.map(Secret::new),
            model: "gemini-3-flash-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

/// Gemini-backed keyword service.
pub struct GeminiKeywordService {
    config: GeminiConfig,
    client: Client,
}

impl GeminiKeywordService {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self { config, client }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    async fn generate(&self, api_key: &str, request: &GeminiRequest) -> Result<String, AiError> {
        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AiError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AiError::Request(format!(
                "Gemini returned status {}",
                response.status()
            )));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AiError::MalformedResponse(e.to_string()))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();
        Ok(text)
    }
}

#[async_trait]
impl KeywordService for GeminiKeywordService {
    async fn seo_keywords(&self, title: &str, content: &str) -> Result<Vec<String>, AiError> {
        let Some(api_key) = self.config.api_key() else {
            warn!("Gemini API key missing, using fallback keywords");
            return Ok(owned(&FALLBACK_NO_KEY));
        };
        let api_key = api_key.to_string();

        let prompt = format!(
            "다음 게시글의 제목과 내용을 바탕으로 한국어 SEO 키워드 5개를 JSON 형식으로 추출해줘.\n\
             제목: {}\n내용: {}",
            title, content
        );
        let request = GeminiRequest::json_keywords(&prompt);

        match self.generate(&api_key, &request).await {
            Ok(text) if text.is_empty() => Ok(owned(&FALLBACK_EMPTY)),
            Ok(text) => match serde_json::from_str::<KeywordPayload>(&text) {
                Ok(payload) if !payload.keywords.is_empty() => Ok(payload.keywords),
                _ => {
                    warn!("Gemini keyword payload unusable, using fallback keywords");
                    Ok(owned(&FALLBACK_NO_KEY))
                }
            },
            Err(err) => {
                warn!(error = %err, "Gemini keyword request failed");
                Ok(owned(&FALLBACK_ERROR))
            }
        }
    }

    async fn suggest_topic(&self) -> Result<String, AiError> {
        let Some(api_key) = self.config.api_key() else {
            return Ok(TOPIC_FALLBACK_NO_KEY.to_string());
        };
        let api_key = api_key.to_string();

        let request = GeminiRequest::plain(
            "아트코칭 웹사이트를 위한 영감을 주는 블로그 주제를 한 문장으로 추천해줘. \
             부와 예술의 연결고리에 대해 강조해줘.",
        );

        match self.generate(&api_key, &request).await {
            Ok(text) if text.is_empty() => Ok(TOPIC_FALLBACK_EMPTY.to_string()),
            Ok(text) => Ok(text),
            Err(err) => {
                warn!(error = %err, "Gemini topic request failed");
                Ok(TOPIC_FALLBACK_ERROR.to_string())
            }
        }
    }
}

fn owned(pair: &[&str; 2]) -> Vec<String> {
    pair.iter().map(|s| s.to_string()).collect()
}

// ── Wire types ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GeminiRequest {
    fn plain(prompt: &str) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: None,
        }
    }

    /// A request constrained to a `{"keywords": [...]}` JSON response.
    fn json_keywords(prompt: &str) -> Self {
        let schema = serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "keywords": { "type": "ARRAY", "items": { "type": "STRING" } }
            },
            "required": ["keywords"]
        });
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
struct KeywordPayload {
    #[serde(default)]
    keywords: Vec<String>,
}
