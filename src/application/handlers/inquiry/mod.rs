//! Inquiry handlers.

mod submit_inquiry;

pub use submit_inquiry::{SubmitInquiryError, SubmitInquiryHandler};
