//! Ports - interfaces to external collaborators.
//!
//! Each port is an async trait implemented by an adapter; application code
//! depends on the trait only, so every collaborator can be substituted with
//! a test double.

mod blob_store;
mod inquiry_submitter;
mod keyword_service;
mod payment_gateway;

pub use blob_store::{BlobStore, StoreError, StoreSlot};
pub use inquiry_submitter::{InquiryError, InquiryRequest, InquirySubmitter};
pub use keyword_service::{AiError, KeywordService};
pub use payment_gateway::{
    EasyPayDetail, GatewayCustomer, GatewayError, GatewayResponse, PayMethod, PaymentGateway,
    PaymentRequest,
};
