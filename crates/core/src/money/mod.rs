//! Currency-aware monetary amounts.
//!
//! This module implements the money value type:
//! - Construction with rounding to the currency scale
//! - Same-currency arithmetic and comparison
//! - Conversion to and from deferred-precision ratios
//! - Proportional allocation without losing increments

pub mod allocation;
pub mod arithmetic;
pub mod types;

#[cfg(test)]
mod props;

pub use types::{DEFAULT_ROUNDING, Money};
