//! Payment gateway port - the PortOne V2 payment collaborator.
//!
//! The gateway is an injected capability, never looked up from ambient
//! scope, so the orchestrator can be exercised against a scripted double.
//!
//! A response carrying a non-null `code` is a business failure regardless of
//! transport-level success; only a response with no code grants membership.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Gateway-level payment method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayMethod {
    /// Direct credit/check card charge.
    #[serde(rename = "CARD")]
    Card,
    /// Third-party wallet ("easy pay") charge.
    #[serde(rename = "EASY_PAY")]
    EasyPay,
}

/// Nested easy-pay detail; the provider here must agree with the top-level
/// `pg_provider` on the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasyPayDetail {
    pub provider: String,
}

/// Customer stub sent with every payment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayCustomer {
    pub full_name: String,
    pub phone_number: String,
}

/// A gateway payment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Merchant identifier.
    pub store_id: String,
    /// Fresh order/payment identifier, never reused across attempts.
    pub payment_id: String,
    pub order_name: String,
    pub total_amount: u64,
    pub currency: String,
    pub customer: GatewayCustomer,
    pub pay_method: PayMethod,
    pub pg_provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easy_pay: Option<EasyPayDetail>,
}

/// A gateway payment response.
///
/// PortOne V2 signals failure (including user cancellation) through a
/// non-null error code; absence of a code is success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl GatewayResponse {
    /// A successful response (no error code).
    pub fn success() -> Self {
        Self::default()
    }

    /// A failed response with an error code and user-facing message.
    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: Some(message.into()),
        }
    }

    /// Whether the gateway reported success.
    pub fn is_success(&self) -> bool {
        self.code.is_none()
    }
}

/// Transport-level gateway faults.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Payment gateway unreachable: {0}")]
    Transport(String),

    #[error("Payment gateway returned a malformed response: {0}")]
    MalformedResponse(String),
}

/// Port for the external payment gateway.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Execute a payment request and return the gateway's verdict.
    async fn request_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<GatewayResponse, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn success_has_no_code() {
        assert!(GatewayResponse::success().is_success());
        assert!(!GatewayResponse::failure("PG_ERROR", "declined").is_success());
    }

    #[test]
    fn easy_pay_detail_serializes_only_when_present() {
        let req = PaymentRequest {
            store_id: "store-x".to_string(),
            payment_id: "order_1".to_string(),
            order_name: "membership".to_string(),
            total_amount: 99_000,
            currency: "CURRENCY_KRW".to_string(),
            customer: GatewayCustomer {
                full_name: "고객".to_string(),
                phone_number: "010-0000-0000".to_string(),
            },
            pay_method: PayMethod::Card,
            pg_provider: "PG_PROVIDER_TOSSPAYMENTS".to_string(),
            easy_pay: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["payMethod"], "CARD");
        assert!(json.get("easyPay").is_none());
    }
}
