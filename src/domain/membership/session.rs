//! Payment session types and the gateway request shapes per method.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::foundation::StateMachine;
use crate::ports::{EasyPayDetail, GatewayCustomer, PayMethod, PaymentRequest};

/// Generic user-visible message for failures with no gateway message.
pub const GENERIC_PAYMENT_FAILURE: &str = "결제 중 문제가 발생했습니다. 다시 시도해 주세요.";

/// The fixed membership product being sold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipOffer {
    pub store_id: String,
    pub order_name: String,
    pub amount: u64,
    pub currency: String,
}

impl Default for MembershipOffer {
    fn default() -> Self {
        Self {
            store_id: "store-d443f747-cc48-4a29-94d8-64af2fd81488".to_string(),
            order_name: "아트온톡 VIP 멤버십 (1개월)".to_string(),
            amount: 99_000,
            currency: "CURRENCY_KRW".to_string(),
        }
    }
}

/// The enumerated payment methods a member can choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    KakaoPay,
    NaverPay,
}

impl PaymentMethod {
    /// Top-level PG provider identifier for this method.
    fn pg_provider(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "PG_PROVIDER_TOSSPAYMENTS",
            PaymentMethod::KakaoPay => "PG_PROVIDER_KAKAOPAY",
            PaymentMethod::NaverPay => "PG_PROVIDER_NAVERPAY",
        }
    }

    /// Nested easy-pay provider identifier; None for direct card charges.
    ///
    /// For wallet methods both provider fields derive from the same match,
    /// so they agree by construction.
    fn easy_pay_provider(&self) -> Option<&'static str> {
        match self {
            PaymentMethod::Card => None,
            PaymentMethod::KakaoPay => Some("EASY_PAY_PROVIDER_KAKAOPAY"),
            PaymentMethod::NaverPay => Some("EASY_PAY_PROVIDER_NAVERPAY"),
        }
    }

    /// Build the gateway request for one attempt, using a freshly generated
    /// payment id (never reused across retries).
    pub fn build_request(&self, offer: &MembershipOffer) -> PaymentRequest {
        let (pay_method, easy_pay) = match self.easy_pay_provider() {
            Some(provider) => (
                PayMethod::EasyPay,
                Some(EasyPayDetail {
                    provider: provider.to_string(),
                }),
            ),
            None => (PayMethod::Card, None),
        };
        PaymentRequest {
            store_id: offer.store_id.clone(),
            payment_id: fresh_payment_id(),
            order_name: offer.order_name.clone(),
            total_amount: offer.amount,
            currency: offer.currency.clone(),
            customer: GatewayCustomer {
                full_name: "아트온톡 고객".to_string(),
                phone_number: "010-0000-0000".to_string(),
            },
            pay_method,
            pg_provider: self.pg_provider().to_string(),
            easy_pay,
        }
    }
}

/// Idempotency token for a payment attempt: `order_<unix-ms>_<suffix>`.
fn fresh_payment_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "order_{}_{}",
        Utc::now().timestamp_millis(),
        &suffix[..6]
    )
}

/// Steps of the join flow.
///
/// There is no terminal failure state: any failure returns to `Selecting`
/// so the user can always retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStep {
    Selecting,
    Processing,
    Succeeded,
}

impl StateMachine for PaymentStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PaymentStep::*;
        matches!(
            (self, target),
            (Selecting, Processing) | (Processing, Succeeded) | (Processing, Selecting)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PaymentStep::*;
        match self {
            Selecting => vec![Processing],
            Processing => vec![Succeeded, Selecting],
            Succeeded => vec![],
        }
    }
}

/// The live join-flow session. Created when the membership modal opens,
/// discarded when it closes or a new one replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSession {
    pub method: PaymentMethod,
    pub step: PaymentStep,
    pub amount: u64,
    pub currency: String,
}

impl PaymentSession {
    pub fn new(offer: &MembershipOffer) -> Self {
        Self {
            method: PaymentMethod::Card,
            step: PaymentStep::Selecting,
            amount: offer.amount,
            currency: offer.currency.clone(),
        }
    }
}
