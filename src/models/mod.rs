// Core value objects consumed and produced by the computation services.
pub mod coupon;
pub mod variant;

pub use coupon::{AppliedCoupon, Coupon, DiscountType, NewCoupon};
pub use variant::{PricedOption, VariantImages, VariantSelection};
