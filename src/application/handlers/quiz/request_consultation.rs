//! RequestConsultationHandler - submit the quiz result with contact info.
//!
//! The submission carries the full answer set plus the derived profile
//! label; on success the quiz resets to its intro screen.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::quiz::{QuizEngine, QuizStep};
use crate::ports::{InquiryError, InquiryRequest, InquirySubmitter};

/// Contact details from the consultation form.
#[derive(Debug, Clone)]
pub struct ConsultationContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Optional free-form question from the form.
    pub memo: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConsultationError {
    #[error("The quiz has no result to submit yet")]
    NoResult,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Inquiry(#[from] InquiryError),
}

pub struct RequestConsultationHandler {
    submitter: Arc<dyn InquirySubmitter>,
}

impl RequestConsultationHandler {
    pub fn new(submitter: Arc<dyn InquirySubmitter>) -> Self {
        Self { submitter }
    }

    pub async fn handle(
        &self,
        engine: &mut QuizEngine,
        contact: ConsultationContact,
    ) -> Result<(), ConsultationError> {
        if engine.step() != QuizStep::Form {
            return Err(ConsultationError::NoResult);
        }
        let profile = engine.result().ok_or(ConsultationError::NoResult)?;

        let mut request = InquiryRequest::new(
            contact.name,
            contact.phone,
            contact.email,
            contact.memo,
            "coaching",
        )
        .with_field("result", profile.label)
        .with_field("program", "1:1 Coaching");
        for (question, answer) in engine.answers() {
            request = request.with_field(question.to_string(), answer.clone());
        }
        request.validate()?;

        self.submitter.submit(&request).await?;
        engine.restart();
        Ok(())
    }
}
