//! Currency configuration management.

use serde::Deserialize;

use crate::error::MoneyResult;
use crate::types::Currency;

/// Default location of the currency file, without extension.
const DEFAULT_CURRENCY_FILE: &str = "config/currencies";

/// Currency registry configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Whether the built-in ISO descriptors are registered before the
    /// configured entries.
    #[serde(default = "default_include_iso_defaults")]
    pub include_iso_defaults: bool,
    /// Additional or overriding currencies.
    #[serde(default)]
    pub currencies: Vec<CurrencyEntry>,
}

/// A configured currency.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyEntry {
    /// ISO 4217 code.
    pub code: String,
    /// Digits kept to the right of the decimal point.
    pub fraction_digits: u32,
}

fn default_include_iso_defaults() -> bool {
    true
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            include_iso_defaults: default_include_iso_defaults(),
            currencies: Vec::new(),
        }
    }
}

impl CurrencyEntry {
    /// Validates the entry into a currency descriptor.
    pub fn to_currency(&self) -> MoneyResult<Currency> {
        Currency::try_new(&self.code, self.fraction_digits)
    }
}

impl CurrencyConfig {
    /// Loads configuration from a `.env` file, the currency file and the
    /// environment.
    ///
    /// The file defaults to `config/currencies` and can be moved with
    /// `COINAGE_CURRENCY_FILE`. Environment variables prefixed with
    /// `COINAGE__` override file values.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let path = std::env::var("COINAGE_CURRENCY_FILE")
            .unwrap_or_else(|_| DEFAULT_CURRENCY_FILE.to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name(&path).required(false))
            .add_source(
                config::Environment::with_prefix("COINAGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        tracing::debug!(
            path = %path,
            currencies = loaded.currencies.len(),
            include_iso_defaults = loaded.include_iso_defaults,
            "loaded currency configuration"
        );
        Ok(loaded)
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
