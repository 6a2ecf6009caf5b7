//! Payment orchestrator - drives the join flow state machine.
//!
//! The flow is two-phase so the caller owns the actual gateway call:
//! `begin_attempt` hands back a token and the gateway request, the caller
//! awaits the gateway, then `complete_attempt` applies the outcome. An
//! outcome whose token no longer matches the live attempt is dropped, so a
//! modal dismissed mid-flight is never resurrected by the task's eventual
//! completion.

use tracing::{info, warn};

use super::{
    MembershipOffer, PaymentMethod, PaymentSession, PaymentStep, VipStatus,
    GENERIC_PAYMENT_FAILURE,
};
use crate::domain::content::Article;
use crate::domain::foundation::{StateMachine, ValidationError};
use crate::ports::{GatewayError, GatewayResponse, PaymentRequest};

/// Identifies one payment attempt; stale tokens are ignored on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptToken(u64);

/// Errors from misusing the join flow.
#[derive(Debug, thiserror::Error)]
pub enum PaymentFlowError {
    #[error("No membership session is open")]
    NoSession,

    #[error(transparent)]
    InvalidTransition(#[from] ValidationError),
}

/// What happened when an attempt's outcome was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptResolution {
    /// Membership granted; the session shows the success screen.
    Succeeded,
    /// Back to method selection with a user-visible message.
    Failed { message: String },
    /// The attempt no longer matters (modal closed or superseded).
    Stale,
}

/// Result of trying to open an article from the club screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleAccess {
    /// The caller may show the article.
    Granted,
    /// Ungated access to restricted content; the join flow was opened
    /// instead of the article.
    JoinFlowOpened,
}

/// Owns the membership flag and the at-most-one payment session.
#[derive(Debug, Clone)]
pub struct PaymentOrchestrator {
    offer: MembershipOffer,
    session: Option<PaymentSession>,
    attempt_seq: u64,
    live_attempt: Option<AttemptToken>,
    vip: VipStatus,
}

impl PaymentOrchestrator {
    pub fn new(offer: MembershipOffer) -> Self {
        Self {
            offer,
            session: None,
            attempt_seq: 0,
            live_attempt: None,
            vip: VipStatus::new(),
        }
    }

    /// The session membership flag.
    pub fn vip(&self) -> VipStatus {
        self.vip
    }

    /// The live session, if the modal is open.
    pub fn session(&self) -> Option<&PaymentSession> {
        self.session.as_ref()
    }

    /// Route an article click: VIP-visible articles open, restricted ones
    /// open the join flow instead.
    pub fn open_article(&mut self, article: &Article) -> ArticleAccess {
        if self.vip.can_view(article) {
            ArticleAccess::Granted
        } else {
            self.open();
            ArticleAccess::JoinFlowOpened
        }
    }

    /// Open the join modal with a fresh session (replacing any existing
    /// one) in the selecting step.
    pub fn open(&mut self) {
        self.session = Some(PaymentSession::new(&self.offer));
        self.live_attempt = None;
    }

    /// Close the modal, discarding the session. In-flight gateway work is
    /// not cancelled; its outcome will resolve as stale.
    pub fn close(&mut self) {
        self.session = None;
        self.live_attempt = None;
    }

    /// Choose the payment method. Valid only while selecting.
    pub fn select_method(&mut self, method: PaymentMethod) -> Result<(), PaymentFlowError> {
        let session = self.session.as_mut().ok_or(PaymentFlowError::NoSession)?;
        if session.step != PaymentStep::Selecting {
            return Err(ValidationError::invalid_format(
                "payment_method",
                format!("Cannot change method at step {:?}", session.step),
            )
            .into());
        }
        session.method = method;
        Ok(())
    }

    /// Enter processing and produce the gateway request for this attempt.
    ///
    /// Every call generates a fresh idempotency token and payment id;
    /// nothing is reused across retries.
    pub fn begin_attempt(&mut self) -> Result<(AttemptToken, PaymentRequest), PaymentFlowError> {
        let offer = self.offer.clone();
        let session = self.session.as_mut().ok_or(PaymentFlowError::NoSession)?;
        session.step = session.step.transition_to(PaymentStep::Processing)?;

        self.attempt_seq += 1;
        let token = AttemptToken(self.attempt_seq);
        self.live_attempt = Some(token);

        let request = session.method.build_request(&offer);
        info!(payment_id = %request.payment_id, method = ?session.method, "payment attempt started");
        Ok((token, request))
    }

    /// Apply a gateway outcome to the attempt identified by `token`.
    ///
    /// A non-null error code is a failure regardless of transport success;
    /// transport faults take the same edge with a generic message. Either
    /// way the session returns to selecting and membership is untouched.
    /// Success grants membership and moves to the succeeded step.
    pub fn complete_attempt(
        &mut self,
        token: AttemptToken,
        outcome: Result<GatewayResponse, GatewayError>,
    ) -> AttemptResolution {
        if self.live_attempt != Some(token) {
            return AttemptResolution::Stale;
        }
        let session = match self.session.as_mut() {
            Some(session) if session.step == PaymentStep::Processing => session,
            _ => return AttemptResolution::Stale,
        };
        self.live_attempt = None;

        let failure_message = match outcome {
            Ok(response) if response.is_success() => {
                self.vip.grant();
                session.step = PaymentStep::Succeeded;
                info!("payment succeeded, membership granted");
                return AttemptResolution::Succeeded;
            }
            Ok(response) => {
                warn!(code = ?response.code, "gateway reported payment failure");
                response
                    .message
                    .unwrap_or_else(|| GENERIC_PAYMENT_FAILURE.to_string())
            }
            Err(err) => {
                warn!(error = %err, "payment transport fault");
                GENERIC_PAYMENT_FAILURE.to_string()
            }
        };

        session.step = PaymentStep::Selecting;
        AttemptResolution::Failed {
            message: failure_message,
        }
    }

    /// Acknowledge the success screen, closing the modal. The caller may
    /// also invoke this from a timer for the fixed auto-close delay.
    pub fn acknowledge_success(&mut self) {
        if matches!(
            self.session.as_ref().map(|s| s.step),
            Some(PaymentStep::Succeeded)
        ) {
            self.close();
        }
    }
}
