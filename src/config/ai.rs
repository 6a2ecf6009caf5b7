//! AI (Gemini) configuration

use serde::Deserialize;

/// Gemini keyword service configuration
///
/// The API key is optional: without one the service runs on its fixed
/// fallback values and publishing still works.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub api_key: Option<String>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
        }
    }
}

impl AiConfig {
    /// Whether a credential is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().map_or(false, |k| !k.is_empty())
    }
}
