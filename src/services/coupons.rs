use crate::{
    errors::{CouponError, ServiceError},
    events::{Event, EventSender},
    models::{AppliedCoupon, Coupon, DiscountType},
    repositories::CouponRepository,
};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;
use tracing::{debug, warn};

/// Computes the discount for a cart total in the caller's smallest display
/// unit. Percentage values round half away from zero; the result is clamped
/// so it never exceeds the cart total.
fn discount_amount(
    discount_type: DiscountType,
    discount_value: Decimal,
    cart_total: i64,
) -> i64 {
    let raw = match discount_type {
        DiscountType::Percentage => {
            Decimal::from(cart_total) * discount_value / Decimal::from(100)
        }
        DiscountType::Fixed => discount_value,
    };
    let amount = raw
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
        .max(0);
    amount.min(cart_total)
}

/// Validates a coupon against a cart total and computes the discount.
///
/// Checks short-circuit in a fixed order so the user sees the most relevant
/// failure: inactive, then expired (the expiry instant itself counts as
/// expired), then exhausted, then below-minimum. A coupon that is absent
/// from the store surfaces as `InvalidCode` at the service layer.
pub fn evaluate(
    coupon: &Coupon,
    cart_total: i64,
    now: DateTime<Utc>,
) -> Result<AppliedCoupon, CouponError> {
    if !coupon.is_active {
        return Err(CouponError::InvalidCode);
    }
    if coupon.is_expired(now) {
        return Err(CouponError::Expired);
    }
    if coupon.is_exhausted() {
        return Err(CouponError::UsageLimitReached);
    }
    if cart_total < coupon.min_order_amount {
        return Err(CouponError::BelowMinimum {
            shortfall: coupon.min_order_amount - cart_total,
        });
    }
    Ok(AppliedCoupon {
        code: coupon.code.clone(),
        discount_type: coupon.discount_type,
        discount_value: coupon.discount_value,
        discount_amount: discount_amount(coupon.discount_type, coupon.discount_value, cart_total),
        applied_at: now,
    })
}

/// Re-derives the discount for a new cart total using the type and value
/// captured at apply time. No re-validation happens here: removing items may
/// drop the cart below the coupon minimum without revoking it mid-edit, and
/// eligibility is re-checked at checkout confirmation by the calling layer.
pub fn recompute(applied: &AppliedCoupon, new_cart_total: i64) -> AppliedCoupon {
    AppliedCoupon {
        discount_amount: discount_amount(
            applied.discount_type,
            applied.discount_value,
            new_cart_total,
        ),
        ..applied.clone()
    }
}

/// Coupon operations against an injected store, plus event emission.
#[derive(Clone)]
pub struct CouponService {
    repository: Arc<dyn CouponRepository>,
    event_sender: EventSender,
}

impl CouponService {
    pub fn new(repository: Arc<dyn CouponRepository>, event_sender: EventSender) -> Self {
        Self {
            repository,
            event_sender,
        }
    }

    /// Looks up a coupon by code and evaluates it against the cart total.
    pub async fn apply(
        &self,
        code: &str,
        cart_total: i64,
        now: DateTime<Utc>,
    ) -> Result<AppliedCoupon, CouponError> {
        let coupon = self
            .repository
            .find_by_code(code)
            .await
            .map_err(CouponError::from)?
            .ok_or_else(|| {
                debug!("Coupon code {} not found", code);
                CouponError::InvalidCode
            })?;

        let applied = evaluate(&coupon, cart_total, now).map_err(|err| {
            match &err {
                CouponError::UsageLimitReached => {
                    warn!("Coupon {} has reached its usage limit", coupon.code)
                }
                other => debug!("Coupon {} rejected: {}", coupon.code, other),
            }
            err
        })?;

        if let Err(e) = self
            .event_sender
            .send(Event::CouponApplied {
                code: applied.code.clone(),
                discount_amount: applied.discount_amount,
                timestamp: applied.applied_at,
            })
            .await
        {
            warn!("Failed to emit CouponApplied event: {}", e);
        }

        Ok(applied)
    }

    /// Records one redemption after checkout completes. Intended to run
    /// at most once per order; exactly-once across processes is the
    /// backing store's concern, not this service's.
    pub async fn redeem(&self, code: &str) -> Result<Coupon, CouponError> {
        let coupon = self
            .repository
            .increment_usage(code)
            .await
            .map_err(CouponError::from)?;

        debug!(
            "Coupon {} redeemed ({}/{} uses)",
            coupon.code, coupon.used_count, coupon.max_uses
        );

        if let Err(e) = self
            .event_sender
            .send(Event::CouponRedeemed {
                code: coupon.code.clone(),
                used_count: coupon.used_count,
                timestamp: coupon.updated_at,
            })
            .await
        {
            warn!("Failed to emit CouponRedeemed event: {}", e);
        }

        Ok(coupon)
    }

    /// Active, unexpired coupons for the "available coupons" display,
    /// best discount first.
    pub async fn list_available(&self, now: DateTime<Utc>) -> Result<Vec<Coupon>, ServiceError> {
        self.repository.list_available(now).await
    }
}
