//! Deferred-precision ratios.

pub mod types;

#[cfg(test)]
mod props;

pub use types::Ratio;
