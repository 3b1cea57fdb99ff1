// Storage seams. The core owns no persistence; callers inject a backend.
pub mod coupons;
pub mod session;

pub use coupons::{CouponRepository, InMemoryCouponRepository};
pub use session::{InMemorySessionStore, SessionStore};
