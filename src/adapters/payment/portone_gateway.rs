//! PortOne gateway adapter.
//!
//! Sends the payment request to the configured PortOne endpoint and decodes
//! the nullable-error-code verdict. User cancellation also arrives as an
//! error-coded response, not a transport fault.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use crate::ports::{GatewayError, GatewayResponse, PaymentGateway, PaymentRequest};

/// Reqwest-backed PortOne client.
pub struct PortOneGateway {
    endpoint: String,
    client: Client,
}

impl PortOneGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl PaymentGateway for PortOneGateway {
    async fn request_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<GatewayResponse, GatewayError> {
        info!(payment_id = %request.payment_id, "sending payment request to gateway");
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        // Business failure travels in the body's error code; decode it even
        // on non-2xx statuses before giving up.
        response
            .json::<GatewayResponse>()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))
    }
}
