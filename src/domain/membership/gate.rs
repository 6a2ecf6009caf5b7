//! The VIP membership gate.

use crate::domain::content::Article;

/// Session-scoped membership flag.
///
/// Never persisted; it becomes true only when a payment attempt succeeds
/// and resets with the session. Membership is granted on the
/// client-observed gateway result with no server-side confirmation, so
/// this flag is a convenience gate, not a tamper-resistant one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VipStatus(bool);

impl VipStatus {
    pub fn new() -> Self {
        Self(false)
    }

    /// Whether the session holds VIP membership.
    pub fn is_vip(&self) -> bool {
        self.0
    }

    /// Grant membership. Called only by the payment orchestrator.
    pub(crate) fn grant(&mut self) {
        self.0 = true;
    }

    /// The gate predicate: VIP members see everything; others see only
    /// categories that do not require membership.
    pub fn can_view(&self, article: &Article) -> bool {
        self.0 || !article.category.requires_membership()
    }
}
