//! Money arithmetic.
//!
//! Binary operations only accept operands of the receiver's currency. Every
//! result is rebuilt through a constructor, so it lands on the currency
//! scale again.

use std::borrow::Borrow;

use coinage_shared::{Currency, MoneyError, MoneyResult, RoundingPolicy};
use rust_decimal::Decimal;

use super::types::{DEFAULT_ROUNDING, Money, decimal_from_f64};
use crate::ratio::Ratio;

impl Money {
    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` across currencies, `Overflow` if the sum does not
    /// fit in a decimal at the currency scale.
    pub fn plus(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let sum = self
            .amount()
            .checked_add(other.amount())
            .ok_or(MoneyError::Overflow)?;
        Self::value_of_with_rounding(sum, self.currency(), DEFAULT_ROUNDING)
    }

    /// Subtracts `other`; equivalent to `self.plus(&other.negated())`.
    pub fn minus(&self, other: &Self) -> MoneyResult<Self> {
        self.plus(&other.negated())
    }

    /// Adds one minimum increment.
    ///
    /// # Errors
    ///
    /// `Overflow` when the amount is already the largest one the currency
    /// scale can hold.
    pub fn incremented(&self) -> MoneyResult<Self> {
        self.plus(&self.minimum_increment())
    }

    /// Multiplies by `factor`, rounding with the default policy.
    pub fn times(&self, factor: impl Into<Decimal>) -> MoneyResult<Self> {
        self.times_with_rounding(factor, DEFAULT_ROUNDING)
    }

    /// Multiplies by `factor`, rounding with `policy`.
    ///
    /// # Errors
    ///
    /// `Overflow` if the product does not fit in a decimal,
    /// `UnrepresentableRounding` under `Unnecessary`.
    pub fn times_with_rounding(
        &self,
        factor: impl Into<Decimal>,
        policy: RoundingPolicy,
    ) -> MoneyResult<Self> {
        let product = self
            .amount()
            .checked_mul(factor.into())
            .ok_or(MoneyError::Overflow)?;
        Self::value_of_with_rounding(product, self.currency(), policy)
    }

    /// Multiplies by a double factor, converted to a decimal first.
    pub fn times_f64(&self, factor: f64) -> MoneyResult<Self> {
        self.times_f64_with_rounding(factor, DEFAULT_ROUNDING)
    }

    /// [`Money::times_f64`] with an explicit rounding policy.
    pub fn times_f64_with_rounding(
        &self,
        factor: f64,
        policy: RoundingPolicy,
    ) -> MoneyResult<Self> {
        self.times_with_rounding(decimal_from_f64(factor)?, policy)
    }

    /// Divides by `divisor`, rounding with the default policy.
    pub fn divided_by(&self, divisor: impl Into<Decimal>) -> MoneyResult<Self> {
        self.divided_by_with_rounding(divisor, DEFAULT_ROUNDING)
    }

    /// Divides by `divisor`, rounding with `policy`.
    ///
    /// # Errors
    ///
    /// `DivideByZero` for a zero divisor, `Overflow` if the quotient does
    /// not fit in a decimal, `UnrepresentableRounding` under `Unnecessary`
    /// when the exact quotient has digits beyond the currency scale.
    pub fn divided_by_with_rounding(
        &self,
        divisor: impl Into<Decimal>,
        policy: RoundingPolicy,
    ) -> MoneyResult<Self> {
        let quotient = Ratio::of(self.amount(), divisor.into())
            .decimal_value(self.currency().fraction_digits(), policy)?;
        Self::value_of_with_rounding(quotient, self.currency(), policy)
    }

    /// Divides two amounts of the same currency into a unitless ratio.
    ///
    /// Nothing is rounded and a zero divisor is not checked here: the ratio
    /// reports `DivideByZero` when it is converted.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` across currencies.
    pub fn divided_by_money(&self, other: &Self) -> MoneyResult<Ratio> {
        self.ensure_same_currency(other)?;
        Ok(Ratio::of(self.amount(), other.amount()))
    }

    /// Scales this amount by `ratio`, resolving the ratio at the currency
    /// scale.
    pub fn applying(&self, ratio: &Ratio, policy: RoundingPolicy) -> MoneyResult<Self> {
        self.applying_at_scale(ratio, self.currency().fraction_digits(), policy)
    }

    /// Scales this amount by `ratio`.
    ///
    /// The product `ratio * amount` is resolved to `scale` digits with
    /// `policy`, then brought to the currency scale with the default policy.
    ///
    /// # Errors
    ///
    /// Any error of [`Ratio::times`] or [`Ratio::decimal_value`].
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::money::Money;
    /// use coinage_core::ratio::Ratio;
    /// use coinage_shared::RoundingPolicy;
    /// use rust_decimal_macros::dec;
    ///
    /// let third = Money::us_dollars(100)
    ///     .applying_at_scale(&Ratio::of_i64(1, 3), 1, RoundingPolicy::AwayFromZero)
    ///     .unwrap();
    /// assert_eq!(third, Money::us_dollars(dec!(33.3)));
    /// ```
    pub fn applying_at_scale(
        &self,
        ratio: &Ratio,
        scale: u32,
        policy: RoundingPolicy,
    ) -> MoneyResult<Self> {
        let value = ratio.times(self.amount())?.decimal_value(scale, policy)?;
        Self::value_of_with_rounding(value, self.currency(), DEFAULT_ROUNDING)
    }

    /// Adds up `items`, starting from zero in `currency`.
    ///
    /// An empty input sums to zero in `currency`.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` as soon as an item is not in `currency`.
    pub fn sum<I>(items: I, currency: Currency) -> MoneyResult<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        items
            .into_iter()
            .try_fold(Self::zero(currency), |total, item| total.plus(item.borrow()))
    }
}
