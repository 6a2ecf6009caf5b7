//! Inquiry submitter adapters.

mod formspree_submitter;
mod mock_submitter;

pub use formspree_submitter::FormspreeSubmitter;
pub use mock_submitter::MockInquirySubmitter;
