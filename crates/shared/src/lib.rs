//! Shared types, errors, and configuration for Coinage.
//!
//! This crate provides the leaf types the arithmetic core builds on:
//! - Currency descriptors with a fixed scale per currency
//! - Rounding policies
//! - The money error taxonomy
//! - Currency registry configuration

pub mod config;
pub mod error;
pub mod types;

pub use config::{CurrencyConfig, CurrencyEntry};
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, CurrencyCode, RoundingPolicy};
