//! Value types shared by the arithmetic core.

pub mod currency;
pub mod rounding;

pub use currency::{Currency, CurrencyCode, MAX_FRACTION_DIGITS};
pub use rounding::RoundingPolicy;
