//! The `Money` value type: construction, accessors and comparison.
//!
//! CRITICAL: the amount is always held at the currency's scale. Every
//! constructor rounds, and every arithmetic result goes back through a
//! constructor. An amount whose integer part leaves no room for the currency
//! scale in 28 digits (e.g. anything above 7.92 with 28 fraction digits) is
//! rejected rather than stored at a coarser scale.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

use coinage_shared::{Currency, MoneyError, MoneyResult, RoundingPolicy};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounding applied when the caller does not choose a policy.
pub const DEFAULT_ROUNDING: RoundingPolicy = RoundingPolicy::ToEven;

/// Significant digits kept when converting a binary double to a decimal.
const F64_SIGNIFICANT_DIGITS: u32 = 15;

/// A monetary amount tied to a currency.
///
/// Two values are equal when their currencies share a code and their amounts
/// are decimally equal. Ordering is only defined within one currency:
/// `partial_cmp` returns `None` across currencies, and [`Money::compare`]
/// reports the mismatch as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

/// Wire form; deserialized amounts are rounded back to the currency scale.
#[derive(Deserialize)]
struct MoneyRepr {
    amount: Decimal,
    currency: Currency,
}

impl TryFrom<MoneyRepr> for Money {
    type Error = MoneyError;

    fn try_from(repr: MoneyRepr) -> MoneyResult<Self> {
        Self::value_of_with_rounding(repr.amount, repr.currency, DEFAULT_ROUNDING)
    }
}

impl Money {
    /// Creates money rounded to the currency scale with banker's rounding.
    ///
    /// # Panics
    ///
    /// Panics, like `Decimal`'s own operators on overflow, when `amount` is
    /// too large to be held at the currency scale. Use
    /// [`Money::value_of_with_rounding`] to get `Overflow` instead.
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        let rounded = amount.round_dp_with_strategy(
            currency.fraction_digits(),
            RoundingStrategy::MidpointNearestEven,
        );
        match Self::from_rounded(rounded, currency) {
            Ok(money) => money,
            Err(err) => panic!(
                "{err}: {amount} does not fit at {} fraction digits",
                currency.fraction_digits()
            ),
        }
    }

    /// Same as [`Money::new`]; the preferred entry point.
    #[must_use]
    pub fn value_of(amount: Decimal, currency: Currency) -> Self {
        Self::new(amount, currency)
    }

    /// Creates money rounded to the currency scale with `policy`.
    ///
    /// # Errors
    ///
    /// Returns `UnrepresentableRounding` when `policy` is `Unnecessary` and
    /// `amount` has more fraction digits than the currency allows, and
    /// `Overflow` when `amount` is too large to be held at the currency
    /// scale.
    pub fn value_of_with_rounding(
        amount: Decimal,
        currency: Currency,
        policy: RoundingPolicy,
    ) -> MoneyResult<Self> {
        let rounded = policy.round(amount, currency.fraction_digits())?;
        Self::from_rounded(rounded, currency)
    }

    /// Creates money from a binary double.
    ///
    /// WARNING: a double cannot hold most decimal fractions exactly. The
    /// value keeps 15 significant digits before being rounded to the
    /// currency scale, so the result may differ from the literal in the
    /// source code.
    ///
    /// # Errors
    ///
    /// Returns `NonFiniteAmount` for NaN or infinities and `Overflow` for
    /// magnitudes a decimal cannot hold.
    pub fn from_f64(amount: f64, currency: Currency) -> MoneyResult<Self> {
        Self::from_f64_with_rounding(amount, currency, DEFAULT_ROUNDING)
    }

    /// [`Money::from_f64`] with an explicit rounding policy.
    pub fn from_f64_with_rounding(
        amount: f64,
        currency: Currency,
        policy: RoundingPolicy,
    ) -> MoneyResult<Self> {
        Self::value_of_with_rounding(decimal_from_f64(amount)?, currency, policy)
    }

    /// Zero in `currency`.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::new(0, currency.fraction_digits()),
            currency,
        }
    }

    /// US dollars.
    #[must_use]
    pub fn us_dollars(amount: impl Into<Decimal>) -> Self {
        Self::new(amount.into(), Currency::USD)
    }

    /// Canadian dollars.
    #[must_use]
    pub fn ca_dollars(amount: impl Into<Decimal>) -> Self {
        Self::new(amount.into(), Currency::CAD)
    }

    /// Euros.
    #[must_use]
    pub fn euros(amount: impl Into<Decimal>) -> Self {
        Self::new(amount.into(), Currency::EUR)
    }

    /// Japanese yen.
    #[must_use]
    pub fn yen(amount: impl Into<Decimal>) -> Self {
        Self::new(amount.into(), Currency::JPY)
    }

    /// Pads an already rounded amount to exactly the currency scale.
    ///
    /// `rescale` stops short of the requested scale when the padded
    /// mantissa would not fit, which is reported as `Overflow`.
    fn from_rounded(mut amount: Decimal, currency: Currency) -> MoneyResult<Self> {
        amount.rescale(currency.fraction_digits());
        if amount.scale() != currency.fraction_digits() {
            return Err(MoneyError::Overflow);
        }
        if amount.is_zero() {
            amount.set_sign_positive(true);
        }
        Ok(Self { amount, currency })
    }

    /// The amount, at the currency scale.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns true if the amount is zero or above.
    ///
    /// Zero counts as positive here, so `is_positive` and `is_negative`
    /// always disagree.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount >= Decimal::ZERO
    }

    /// The amount with its sign flipped.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::new(-self.amount, self.currency)
    }

    /// The absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs(), self.currency)
    }

    /// The smallest amount representable in this currency, e.g. `0.01` USD.
    #[must_use]
    pub fn minimum_increment(&self) -> Self {
        Self::new(self.currency.minimum_increment(), self.currency)
    }

    /// Orders two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` when the currencies differ.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Returns true if `self` is strictly greater than `other`.
    pub fn is_greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Returns true if `self` is strictly less than `other`.
    pub fn is_less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Returns true if both values are in the same currency.
    #[must_use]
    pub fn has_same_currency_as(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    pub(crate) fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.has_same_currency_as(other) {
            return Ok(());
        }
        tracing::debug!(
            expected = %self.currency,
            found = %other.currency,
            "rejected cross-currency operation"
        );
        Err(MoneyError::CurrencyMismatch {
            expected: self.currency.code(),
            found: other.currency.code(),
        })
    }
}

/// Converts a double to a decimal, keeping the digits a double reliably carries.
pub(crate) fn decimal_from_f64(value: f64) -> MoneyResult<Decimal> {
    if !value.is_finite() {
        return Err(MoneyError::NonFiniteAmount);
    }
    Decimal::from_f64(value)
        .and_then(|decimal| decimal.round_sf(F64_SIGNIFICANT_DIGITS))
        .ok_or(MoneyError::Overflow)
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.has_same_currency_as(other)
            .then(|| self.amount.cmp(&other.amount))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.code(), self.amount)
    }
}
