//! SubmitInquiryHandler - send a lead inquiry to the form endpoint.
//!
//! Required fields are enforced before any submission is attempted, and a
//! submitting flag blocks re-entrant triggering while a submission is in
//! flight (the UI disables its button off the same state).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::ports::{InquiryError, InquiryRequest, InquirySubmitter};

#[derive(Debug, thiserror::Error)]
pub enum SubmitInquiryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A submission is already in flight")]
    AlreadySubmitting,

    #[error(transparent)]
    Inquiry(#[from] InquiryError),
}

pub struct SubmitInquiryHandler {
    submitter: Arc<dyn InquirySubmitter>,
    submitting: AtomicBool,
}

impl SubmitInquiryHandler {
    pub fn new(submitter: Arc<dyn InquirySubmitter>) -> Self {
        Self {
            submitter,
            submitting: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    pub async fn handle(&self, request: InquiryRequest) -> Result<(), SubmitInquiryError> {
        request.validate()?;

        if self.submitting.swap(true, Ordering::SeqCst) {
            return Err(SubmitInquiryError::AlreadySubmitting);
        }
        let result = self.submitter.submit(&request).await;
        self.submitting.store(false, Ordering::SeqCst);

        result?;
        Ok(())
    }
}
