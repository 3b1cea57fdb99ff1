use serde::Serialize;
use thiserror::Error;

/// Infrastructure faults from the backing store or event channel. These are
/// the unexpected failures; coupon validation outcomes are `CouponError`.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Event error: {0}")]
    EventError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

/// User-facing coupon outcomes. All recoverable; the caller owns messaging
/// and retry. Ordering of checks in the engine determines which of these a
/// given coupon surfaces first.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponError {
    /// Code not found or the coupon is inactive.
    #[error("coupon code is invalid")]
    InvalidCode,

    #[error("coupon has expired")]
    Expired,

    #[error("coupon usage limit has been reached")]
    UsageLimitReached,

    /// Cart total is below the coupon minimum; carries the shortfall so the
    /// UI can say how much more to add.
    #[error("add {shortfall} more to use this coupon")]
    BelowMinimum { shortfall: i64 },

    /// Store or channel failure, distinct from the validation kinds above.
    #[error("store error: {0}")]
    Store(String),
}

impl From<ServiceError> for CouponError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => CouponError::InvalidCode,
            ServiceError::Conflict(_) => CouponError::UsageLimitReached,
            other => CouponError::Store(other.to_string()),
        }
    }
}
