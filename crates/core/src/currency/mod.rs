//! Currency lookup.

pub mod registry;

pub use registry::{CurrencyRegistry, CurrencyRegistryBuilder};
