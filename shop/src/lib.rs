//! Domain model for the Stride storefront page.
//!
//! Everything in this crate is plain Rust with no browser dependencies, so the
//! cart bookkeeping, carousel index arithmetic and scroll math can be tested
//! natively. The `storefront` crate binds these types to the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`cart`] | Line items keyed by name/size/color, quantities, checkout |
//! | [`money`] | Satang-denominated prices, parsing and `฿` display |
//! | [`catalog`] | Product/color to image path lookup table |
//! | [`scroll`] | Video container transform as a function of scroll position |
//! | [`carousel`] | Slide index state machine and swipe tracking |
//! | [`menu`] | Mobile navigation drawer state |
//! | [`copy`] | User-facing Thai and English strings |
//! | [`consts`] | Shared tunables (caps, thresholds, intervals) |

pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod consts;
pub mod copy;
pub mod menu;
pub mod money;
pub mod scroll;

pub use cart::{Cart, CartError, CartItem, CheckoutOutcome, CheckoutSummary, LineId, QuantityChange, Selection};
pub use money::{Money, PriceError};
