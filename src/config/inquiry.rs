//! Inquiry endpoint configuration

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Lead-capture form endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InquiryConfig {
    /// Form endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    "https://formspree.io/f/mwvvvanz".to_string()
}

impl Default for InquiryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl InquiryConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.endpoint.is_empty() {
            return Err(ConfigValidationError::MissingRequired("INQUIRY__ENDPOINT"));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigValidationError::InvalidInquiryEndpoint);
        }
        Ok(())
    }
}
