use crate::models::AppliedCoupon;
use dashmap::DashMap;
use std::sync::Arc;

/// Caller-held ephemeral session state. The storefront keeps the applied
/// coupon here while the user edits the cart; production backends persist to
/// whatever the host platform offers, tests use the in-memory store. Nothing
/// behind this trait is authoritative: the applied coupon is re-validated at
/// checkout confirmation, outside the core.
pub trait SessionStore: Send + Sync {
    fn applied_coupon(&self, session_id: &str) -> Option<AppliedCoupon>;
    fn set_applied_coupon(&self, session_id: &str, applied: AppliedCoupon);
    /// Removes and returns the session's coupon, if any.
    fn clear_applied_coupon(&self, session_id: &str) -> Option<AppliedCoupon>;
}

#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    coupons: Arc<DashMap<String, AppliedCoupon>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn applied_coupon(&self, session_id: &str) -> Option<AppliedCoupon> {
        self.coupons.get(session_id).map(|entry| entry.value().clone())
    }

    fn set_applied_coupon(&self, session_id: &str, applied: AppliedCoupon) {
        self.coupons.insert(session_id.to_string(), applied);
    }

    fn clear_applied_coupon(&self, session_id: &str) -> Option<AppliedCoupon> {
        self.coupons.remove(session_id).map(|(_, applied)| applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiscountType;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn applied() -> AppliedCoupon {
        AppliedCoupon {
            code: "SAVE10".into(),
            discount_type: DiscountType::Percentage,
            discount_value: dec!(10),
            discount_amount: 120,
            applied_at: Utc::now(),
        }
    }

    #[test]
    fn sessions_are_isolated() {
        let store = InMemorySessionStore::new();
        store.set_applied_coupon("alice", applied());
        assert!(store.applied_coupon("alice").is_some());
        assert!(store.applied_coupon("bob").is_none());
    }

    #[test]
    fn clear_returns_the_removed_coupon() {
        let store = InMemorySessionStore::new();
        store.set_applied_coupon("alice", applied());
        let removed = store.clear_applied_coupon("alice").unwrap();
        assert_eq!(removed.code, "SAVE10");
        assert!(store.applied_coupon("alice").is_none());
    }
}
