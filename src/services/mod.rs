// Computation services. Each is deterministic over its inputs; the coupon
// service additionally drives the repository and event seams.
pub mod coupons;
pub mod pricing;
pub mod variant_images;

pub use coupons::CouponService;
pub use pricing::DisplayPrice;
