//! Money and ratio arithmetic for Coinage.
//!
//! This crate contains pure value types with ZERO I/O dependencies.
//! Amounts are always held at their currency's scale; ratios defer decimal
//! conversion until the caller picks a scale and a rounding policy.
//!
//! # Modules
//!
//! - `money` - Currency-aware amounts, arithmetic and allocation
//! - `ratio` - Deferred-precision numerator/denominator pairs
//! - `currency` - Explicit currency registry

pub mod currency;
pub mod money;
pub mod ratio;

pub use currency::CurrencyRegistry;
pub use money::Money;
pub use ratio::Ratio;

pub use coinage_shared::{Currency, CurrencyCode, MoneyError, MoneyResult, RoundingPolicy};
