use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// A discount rule identified by a code, with eligibility and usage
/// constraints. Created and edited by the admin collaborator; read-only to
/// the core except `used_count`, which moves only through redemption.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: Uuid,
    /// Unique, matched case-insensitively.
    pub code: String,
    pub discount_type: DiscountType,
    /// Non-negative; 0..=100 when the type is `Percentage`, otherwise an
    /// amount in the caller's smallest display unit.
    pub discount_value: Decimal,
    /// Cart total must be >= this to qualify.
    pub min_order_amount: i64,
    pub max_uses: u32,
    /// Monotonically increasing, incremented once per successful redemption.
    pub used_count: u32,
    /// Invalid at or after this instant (inclusive).
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Coupon {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_exhausted(&self) -> bool {
        self.used_count >= self.max_uses
    }

    /// Remaining redemptions before the usage cap is hit.
    pub fn remaining_uses(&self) -> u32 {
        self.max_uses.saturating_sub(self.used_count)
    }
}

/// Input for creating a coupon. Validation mirrors the constraints the
/// storefront admin form enforces.
#[derive(Clone, Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_discount_bounds"))]
pub struct NewCoupon {
    #[validate(length(min = 1, max = 64))]
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    #[validate(range(min = 0))]
    pub min_order_amount: i64,
    #[validate(range(min = 1))]
    pub max_uses: u32,
    pub expires_at: DateTime<Utc>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

fn validate_discount_bounds(input: &NewCoupon) -> Result<(), ValidationError> {
    if input.discount_value.is_sign_negative() {
        return Err(ValidationError::new("discount_value_negative"));
    }
    if input.discount_type == DiscountType::Percentage
        && input.discount_value > Decimal::from(100)
    {
        return Err(ValidationError::new("percentage_over_100"));
    }
    Ok(())
}

impl From<NewCoupon> for Coupon {
    fn from(input: NewCoupon) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            code: input.code,
            discount_type: input.discount_type,
            discount_value: input.discount_value,
            min_order_amount: input.min_order_amount,
            max_uses: input.max_uses,
            used_count: 0,
            expires_at: input.expires_at,
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A coupon as applied to a session's cart. `discount_amount` depends on the
/// cart total and is recomputed on every cart mutation; it is never
/// persisted. The type and value are copied from the coupon at apply time so
/// recomputation does not need another store round-trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppliedCoupon {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub discount_amount: i64,
    pub applied_at: DateTime<Utc>,
}
