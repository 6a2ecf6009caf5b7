//! JoinClubHandler - run one payment attempt against the gateway.
//!
//! Glues the orchestrator's two-phase flow to the gateway port: begin the
//! attempt, await the gateway, apply the outcome. While the call is in
//! flight the session sits in the processing step, which is what disables
//! the pay button.

use std::sync::Arc;

use crate::domain::membership::{AttemptResolution, PaymentFlowError, PaymentOrchestrator};
use crate::ports::PaymentGateway;

pub struct JoinClubHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl JoinClubHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        orchestrator: &mut PaymentOrchestrator,
    ) -> Result<AttemptResolution, PaymentFlowError> {
        let (token, request) = orchestrator.begin_attempt()?;
        let outcome = self.gateway.request_payment(&request).await;
        Ok(orchestrator.complete_attempt(token, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::payment::MockPaymentGateway;
    use crate::domain::membership::{MembershipOffer, PaymentMethod, PaymentStep};

    #[tokio::test]
    async fn failure_then_retry_then_success() {
        let gateway = Arc::new(
            MockPaymentGateway::new()
                .then_failure("PG_ERROR", "한도 초과")
                .then_success(),
        );
        let handler = JoinClubHandler::new(gateway.clone());
        let mut orch = PaymentOrchestrator::new(MembershipOffer::default());
        orch.open();
        orch.select_method(PaymentMethod::KakaoPay).unwrap();

        let first = handler.handle(&mut orch).await.unwrap();
        assert!(matches!(first, AttemptResolution::Failed { .. }));
        assert_eq!(orch.session().unwrap().step, PaymentStep::Selecting);
        assert!(!orch.vip().is_vip());

        let second = handler.handle(&mut orch).await.unwrap();
        assert_eq!(second, AttemptResolution::Succeeded);
        assert!(orch.vip().is_vip());

        // each attempt sent a fresh payment id
        let requests = gateway.requests();
        assert_eq!(requests.len(), 2);
        assert_ne!(requests[0].payment_id, requests[1].payment_id);
    }

    #[tokio::test]
    async fn wallet_method_shapes_the_request() {
        let gateway = Arc::new(MockPaymentGateway::succeeding());
        let handler = JoinClubHandler::new(gateway.clone());
        let mut orch = PaymentOrchestrator::new(MembershipOffer::default());
        orch.open();
        orch.select_method(PaymentMethod::NaverPay).unwrap();

        handler.handle(&mut orch).await.unwrap();

        let request = &gateway.requests()[0];
        assert_eq!(request.pg_provider, "PG_PROVIDER_NAVERPAY");
        assert_eq!(
            request.easy_pay.as_ref().unwrap().provider,
            "EASY_PAY_PROVIDER_NAVERPAY"
        );
    }
}
