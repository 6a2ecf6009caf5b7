//! Membership domain - the VIP gate and the payment flow that grants it.

mod gate;
mod orchestrator;
mod session;

pub use gate::VipStatus;
pub use orchestrator::{
    ArticleAccess, AttemptResolution, AttemptToken, PaymentFlowError, PaymentOrchestrator,
};
pub use session::{MembershipOffer, PaymentMethod, PaymentSession, PaymentStep, GENERIC_PAYMENT_FAILURE};
