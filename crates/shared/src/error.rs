//! Error types for money and ratio arithmetic.
//!
//! Every variant is a logic error surfaced to the immediate caller. None of
//! them is transient, so nothing in the workspace retries on them.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::CurrencyCode;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money, ratio and currency operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Arithmetic Errors ==========
    /// A binary operation was attempted across two currencies.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency of the receiver.
        expected: CurrencyCode,
        /// Currency of the operand.
        found: CurrencyCode,
    },

    /// Division with a zero divisor or a ratio with a zero denominator.
    #[error("Division by zero")]
    DivideByZero,

    /// Rounding was forbidden but the value is not exact at the requested scale.
    #[error("Rounding necessary: {value} is not representable with {scale} fractional digits")]
    UnrepresentableRounding {
        /// The unrounded value.
        value: Decimal,
        /// The requested scale.
        scale: u32,
    },

    /// The result does not fit in a decimal.
    #[error("Arithmetic overflow")]
    Overflow,

    /// A floating point input was NaN or infinite.
    #[error("Amount is not a finite number")]
    NonFiniteAmount,

    /// Weights given to an allocation cannot be used.
    #[error("Invalid allocation: {0}")]
    InvalidAllocation(String),

    // ========== Currency Errors ==========
    /// A currency code is not three ASCII letters.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    /// A currency was declared with more fraction digits than a decimal can hold.
    #[error("Invalid fraction digits for {code}: {digits}")]
    InvalidFractionDigits {
        /// Currency code.
        code: CurrencyCode,
        /// Declared fraction digits.
        digits: u32,
    },

    /// No currency with this code is registered.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

impl MoneyError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::DivideByZero => "DIVIDE_BY_ZERO",
            Self::UnrepresentableRounding { .. } => "UNREPRESENTABLE_ROUNDING",
            Self::Overflow => "OVERFLOW",
            Self::NonFiniteAmount => "NON_FINITE_AMOUNT",
            Self::InvalidAllocation(_) => "INVALID_ALLOCATION",
            Self::InvalidCurrencyCode(_) => "INVALID_CURRENCY_CODE",
            Self::InvalidFractionDigits { .. } => "INVALID_FRACTION_DIGITS",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
        }
    }

    /// Returns true for errors caused by mixing currencies.
    #[must_use]
    pub const fn is_currency_mismatch(&self) -> bool {
        matches!(self, Self::CurrencyMismatch { .. })
    }
}
