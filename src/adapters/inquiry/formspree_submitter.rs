//! Formspree inquiry submitter.
//!
//! POSTs the inquiry as a JSON body to the configured form endpoint. Any
//! acknowledging (2xx) response is success; everything else surfaces as an
//! error the caller shows to the user.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use crate::ports::{InquiryError, InquiryRequest, InquirySubmitter};

/// Reqwest-backed form endpoint client.
pub struct FormspreeSubmitter {
    endpoint: String,
    client: Client,
}

impl FormspreeSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl InquirySubmitter for FormspreeSubmitter {
    async fn submit(&self, request: &InquiryRequest) -> Result<(), InquiryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| InquiryError::Transport(e.to_string()))?;

        if response.status().is_success() {
            info!(inquiry_type = %request.inquiry_type, "inquiry submitted");
            Ok(())
        } else {
            Err(InquiryError::Rejected(format!(
                "form endpoint returned status {}",
                response.status()
            )))
        }
    }
}
