//! Inquiry submitter port - the lead-capture endpoint.
//!
//! Several screens (the inquiry modal, the quiz consultation form) funnel
//! into the same external form endpoint. The request is free-form named
//! fields plus a composed subject line; success is any acknowledging
//! response.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::ValidationError;

/// A lead-capture submission.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InquiryRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    /// Inquiry category (coaching, dealer, club, auction, other).
    #[serde(rename = "type")]
    pub inquiry_type: String,
    /// Human-readable subject line shown to the operator.
    pub subject: String,
    /// Extra named fields (quiz answers, resolved profile label).
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl InquiryRequest {
    /// Build a request from the standard contact fields, composing the
    /// fixed subject line from the contact name.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
        inquiry_type: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let subject = format!("[아트온톡] 새로운 통합 문의: {}", name);
        Self {
            name,
            phone: phone.into(),
            email: email.into(),
            message: message.into(),
            inquiry_type: inquiry_type.into(),
            subject,
            extra: BTreeMap::new(),
        }
    }

    /// Attach an extra named field to the JSON body.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Enforce the required form fields before any submission is attempted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::empty_field("phone"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::empty_field("message"));
        }
        Ok(())
    }
}

/// Errors from inquiry submission.
#[derive(Debug, thiserror::Error)]
pub enum InquiryError {
    #[error("Inquiry was rejected: {0}")]
    Rejected(String),

    #[error("Inquiry transport failed: {0}")]
    Transport(String),
}

/// Port for submitting inquiries to the external form endpoint.
#[async_trait]
pub trait InquirySubmitter: Send + Sync {
    /// Submit an inquiry. Success is any acknowledging response.
    async fn submit(&self, request: &InquiryRequest) -> Result<(), InquiryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> InquiryRequest {
        InquiryRequest::new("홍길동", "010-0000-0000", "a@b.c", "상담 문의", "coaching")
    }

    #[test]
    fn subject_line_includes_name() {
        assert!(request().subject.contains("홍길동"));
    }

    #[test]
    fn validate_accepts_complete_form() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_required_fields() {
        let mut req = request();
        req.email = "  ".to_string();
        assert_eq!(req.validate(), Err(ValidationError::empty_field("email")));
    }

    #[test]
    fn extra_fields_flatten_into_body() {
        let req = request().with_field("q2", "invest");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["q2"], "invest");
        assert_eq!(json["type"], "coaching");
    }
}
