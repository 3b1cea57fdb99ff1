use crate::{errors::ServiceError, models::Coupon};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;

/// Read/write contract against the coupon store. The core never talks to a
/// database directly; production backends wrap whatever store the
/// application uses, and tests use [`InMemoryCouponRepository`].
///
/// `increment_usage` is read-modify-write at this seam. Remote
/// implementations may be best-effort under concurrent redemptions unless
/// the underlying store supports a guarded atomic increment; callers own
/// retry and backoff policy.
#[async_trait]
pub trait CouponRepository: Send + Sync {
    /// Fetches one coupon by code, matched case-insensitively.
    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, ServiceError>;

    /// Active, unexpired, unexhausted coupons ordered by discount value
    /// descending (for the "available coupons" display).
    async fn list_available(&self, now: DateTime<Utc>) -> Result<Vec<Coupon>, ServiceError>;

    /// Records one redemption, returning the updated coupon. Fails with
    /// `Conflict` when the usage cap is already reached and `NotFound` for
    /// an unknown code.
    async fn increment_usage(&self, code: &str) -> Result<Coupon, ServiceError>;
}

/// DashMap-backed repository, keyed by lowercased code. The usage increment
/// here is guarded: the cap check and the write happen under the map entry
/// lock, so `used_count` cannot exceed `max_uses` through this backend.
#[derive(Clone, Default)]
pub struct InMemoryCouponRepository {
    coupons: Arc<DashMap<String, Coupon>>,
}

impl InMemoryCouponRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds or replaces a coupon. This is the admin collaborator's write
    /// path in tests.
    pub fn insert(&self, coupon: Coupon) {
        self.coupons.insert(coupon.code.to_lowercase(), coupon);
    }
}

#[async_trait]
impl CouponRepository for InMemoryCouponRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, ServiceError> {
        Ok(self
            .coupons
            .get(&code.to_lowercase())
            .map(|entry| entry.value().clone()))
    }

    async fn list_available(&self, now: DateTime<Utc>) -> Result<Vec<Coupon>, ServiceError> {
        let mut available: Vec<Coupon> = self
            .coupons
            .iter()
            .filter(|entry| {
                let c = entry.value();
                c.is_active && !c.is_expired(now) && !c.is_exhausted()
            })
            .map(|entry| entry.value().clone())
            .collect();
        available.sort_by(|a, b| b.discount_value.cmp(&a.discount_value));
        Ok(available)
    }

    async fn increment_usage(&self, code: &str) -> Result<Coupon, ServiceError> {
        let mut entry = self
            .coupons
            .get_mut(&code.to_lowercase())
            .ok_or_else(|| ServiceError::NotFound(format!("coupon {}", code)))?;
        if entry.is_exhausted() {
            return Err(ServiceError::Conflict(format!(
                "coupon {} usage limit reached",
                entry.code
            )));
        }
        entry.used_count += 1;
        entry.updated_at = Utc::now();
        Ok(entry.value().clone())
    }
}
