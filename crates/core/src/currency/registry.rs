//! Currency registry: an explicit lookup table from ISO code to descriptor.
//!
//! The registry is built once and then only read, so a single instance can
//! be shared across threads by reference or behind an `Arc`.

use std::collections::HashMap;

use coinage_shared::{
    Currency, CurrencyCode, CurrencyConfig, MoneyError, MoneyResult, RoundingPolicy,
};
use rust_decimal::Decimal;

use crate::money::Money;

/// Immutable mapping from currency code to currency descriptor.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistry {
    currencies: HashMap<CurrencyCode, Currency>,
}

/// Builder for [`CurrencyRegistry`]. Later entries replace earlier ones with
/// the same code.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistryBuilder {
    currencies: HashMap<CurrencyCode, Currency>,
}

impl CurrencyRegistryBuilder {
    /// Adds or replaces a currency.
    #[must_use]
    pub fn with(mut self, currency: Currency) -> Self {
        self.currencies.insert(currency.code(), currency);
        self
    }

    /// Adds or replaces every currency in `currencies`.
    #[must_use]
    pub fn with_all(self, currencies: impl IntoIterator<Item = Currency>) -> Self {
        currencies.into_iter().fold(self, Self::with)
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> CurrencyRegistry {
        CurrencyRegistry {
            currencies: self.currencies,
        }
    }
}

impl CurrencyRegistry {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> CurrencyRegistryBuilder {
        CurrencyRegistryBuilder::default()
    }

    /// A registry holding the built-in ISO descriptors.
    #[must_use]
    pub fn iso_defaults() -> Self {
        Self::builder().with_all(Currency::ISO_DEFAULTS).build()
    }

    /// Builds a registry from configuration.
    ///
    /// Configured entries override built-in descriptors with the same code.
    ///
    /// # Errors
    ///
    /// Returns the first invalid entry's error.
    pub fn from_config(config: &CurrencyConfig) -> MoneyResult<Self> {
        let mut builder = Self::builder();
        if config.include_iso_defaults {
            builder = builder.with_all(Currency::ISO_DEFAULTS);
        }
        for entry in &config.currencies {
            let currency = entry.to_currency().inspect_err(|err| {
                tracing::warn!(code = %entry.code, error = %err, "rejected configured currency");
            })?;
            builder = builder.with(currency);
        }
        let registry = builder.build();
        tracing::info!(currencies = registry.len(), "built currency registry");
        Ok(registry)
    }

    /// Looks up a currency by textual code, case-insensitively.
    ///
    /// # Errors
    ///
    /// `InvalidCurrencyCode` for malformed codes, `UnknownCurrency` for
    /// codes that are not registered.
    pub fn get(&self, code: &str) -> MoneyResult<Currency> {
        let parsed: CurrencyCode = code.parse()?;
        self.lookup(parsed)
            .ok_or_else(|| MoneyError::UnknownCurrency(parsed.to_string()))
    }

    /// Looks up a currency by parsed code.
    #[must_use]
    pub fn lookup(&self, code: CurrencyCode) -> Option<Currency> {
        self.currencies.get(&code).copied()
    }

    /// Returns true if `code` is registered.
    #[must_use]
    pub fn contains(&self, code: CurrencyCode) -> bool {
        self.currencies.contains_key(&code)
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if no currency is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Iterates over registered currencies in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.values()
    }

    /// Creates money in the currency registered under `code`, rounded with
    /// banker's rounding.
    ///
    /// # Errors
    ///
    /// Any lookup error of [`CurrencyRegistry::get`], or `Overflow` when
    /// `amount` cannot be held at the currency scale.
    pub fn money(&self, amount: Decimal, code: &str) -> MoneyResult<Money> {
        Money::value_of_with_rounding(amount, self.get(code)?, RoundingPolicy::ToEven)
    }
}
