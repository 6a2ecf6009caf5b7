//! Mock inquiry submitter for tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::ports::{InquiryError, InquiryRequest, InquirySubmitter};

/// Captures submissions; optionally fails.
#[derive(Debug, Default)]
pub struct MockInquirySubmitter {
    fail: bool,
    submissions: Mutex<Vec<InquiryRequest>>,
}

impl MockInquirySubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Everything submitted so far.
    pub fn submissions(&self) -> Vec<InquiryRequest> {
        self.submissions.lock().expect("mock poisoned").clone()
    }
}

#[async_trait]
impl InquirySubmitter for MockInquirySubmitter {
    async fn submit(&self, request: &InquiryRequest) -> Result<(), InquiryError> {
        if self.fail {
            return Err(InquiryError::Transport("mock transport fault".to_string()));
        }
        self.submissions
            .lock()
            .expect("mock poisoned")
            .push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_submissions() {
        let mock = MockInquirySubmitter::new();
        let request = InquiryRequest::new("이름", "010", "a@b.c", "문의", "club");
        mock.submit(&request).await.unwrap();
        assert_eq!(mock.submissions().len(), 1);
        assert_eq!(mock.submissions()[0].inquiry_type, "club");
    }
}
