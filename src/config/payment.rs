//! Payment configuration

use serde::Deserialize;

use super::error::ConfigValidationError;
use crate::domain::membership::MembershipOffer;

/// Membership payment configuration (PortOne)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Merchant identifier
    #[serde(default = "default_store_id")]
    pub store_id: String,

    /// Fixed order name shown in the payment window
    #[serde(default = "default_order_name")]
    pub order_name: String,

    /// Fixed price of the monthly membership
    #[serde(default = "default_amount")]
    pub amount: u64,

    /// Gateway currency code
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Seconds the success screen stays up before auto-close
    #[serde(default = "default_success_close_secs")]
    pub success_close_secs: u64,
}

fn default_store_id() -> String {
    "store-d443f747-cc48-4a29-94d8-64af2fd81488".to_string()
}

fn default_order_name() -> String {
    "아트온톡 VIP 멤버십 (1개월)".to_string()
}

fn default_amount() -> u64 {
    99_000
}

fn default_currency() -> String {
    "CURRENCY_KRW".to_string()
}

fn default_success_close_secs() -> u64 {
    3
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            store_id: default_store_id(),
            order_name: default_order_name(),
            amount: default_amount(),
            currency: default_currency(),
            success_close_secs: default_success_close_secs(),
        }
    }
}

impl PaymentConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.store_id.is_empty() {
            return Err(ConfigValidationError::MissingRequired("PAYMENT__STORE_ID"));
        }
        if self.amount == 0 {
            return Err(ConfigValidationError::InvalidPaymentAmount);
        }
        Ok(())
    }

    /// The offer the orchestrator sells.
    pub fn offer(&self) -> MembershipOffer {
        MembershipOffer {
            store_id: self.store_id.clone(),
            order_name: self.order_name.clone(),
            amount: self.amount,
            currency: self.currency.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_offer() {
        let offer = PaymentConfig::default().offer();
        assert_eq!(offer.amount, 99_000);
        assert_eq!(offer.currency, "CURRENCY_KRW");
    }

    #[test]
    fn zero_amount_is_rejected() {
        let config = PaymentConfig {
            amount: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
