//! Storefront commerce core
//!
//! Pure computation behind a storefront UI: coupon validation and discount
//! math, variant-aware image resolution, and display-price composition.
//! The UI layer, payment handshake, and persistence are external
//! collaborators; they inject storage backends through the repository
//! traits and consume the value objects in `models`.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod errors;
pub mod events;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::AppConfig;
pub use errors::{CouponError, ServiceError};
pub use models::{AppliedCoupon, Coupon, DiscountType, PricedOption, VariantImages, VariantSelection};
pub use services::coupons::CouponService;
pub use services::pricing::DisplayPrice;
