//! Mock payment gateway for tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::ports::{GatewayError, GatewayResponse, PaymentGateway, PaymentRequest};

/// A scripted gateway outcome.
#[derive(Debug)]
pub enum MockOutcome {
    Respond(GatewayResponse),
    Fault(String),
}

/// Scripted gateway with request capture. Outcomes are consumed in order;
/// once the script runs dry every call succeeds.
#[derive(Debug, Default)]
pub struct MockPaymentGateway {
    script: Mutex<VecDeque<MockOutcome>>,
    requests: Mutex<Vec<PaymentRequest>>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always succeeds.
    pub fn succeeding() -> Self {
        Self::new()
    }

    /// Queue an error-coded response.
    pub fn then_failure(self, code: &str, message: &str) -> Self {
        self.script
            .lock()
            .expect("mock poisoned")
            .push_back(MockOutcome::Respond(GatewayResponse::failure(code, message)));
        self
    }

    /// Queue a success response.
    pub fn then_success(self) -> Self {
        self.script
            .lock()
            .expect("mock poisoned")
            .push_back(MockOutcome::Respond(GatewayResponse::success()));
        self
    }

    /// Queue a transport fault.
    pub fn then_fault(self, message: &str) -> Self {
        self.script
            .lock()
            .expect("mock poisoned")
            .push_back(MockOutcome::Fault(message.to_string()));
        self
    }

    /// Every request the gateway has seen.
    pub fn requests(&self) -> Vec<PaymentRequest> {
        self.requests.lock().expect("mock poisoned").clone()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn request_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<GatewayResponse, GatewayError> {
        self.requests
            .lock()
            .expect("mock poisoned")
            .push(request.clone());
        let outcome = self.script.lock().expect("mock poisoned").pop_front();
        match outcome {
            Some(MockOutcome::Respond(response)) => Ok(response),
            Some(MockOutcome::Fault(message)) => Err(GatewayError::Transport(message)),
            None => Ok(GatewayResponse::success()),
        }
    }
}
