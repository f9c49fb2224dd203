//! The `Ratio` value type.

use std::fmt;
use std::ops::Mul;

use coinage_shared::types::MAX_FRACTION_DIGITS;
use coinage_shared::{MoneyError, MoneyResult, RoundingPolicy};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A numerator/denominator pair whose division is deferred until a caller
/// picks a scale and a rounding policy.
///
/// The fraction is never reduced. Multiplying ratios multiplies numerators
/// and denominators independently, so magnitudes grow with every product
/// until [`Ratio::decimal_value`] collapses the pair into a number.
///
/// Equality is literal on the pair: `1/3` and `2/6` are different ratios
/// even though they convert to the same decimal.
///
/// A zero denominator is accepted at construction and only rejected when the
/// ratio is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ratio {
    numerator: Decimal,
    denominator: Decimal,
}

impl Ratio {
    /// Creates a ratio from two decimals.
    #[must_use]
    pub const fn of(numerator: Decimal, denominator: Decimal) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates a ratio from two integers.
    #[must_use]
    pub fn of_i64(numerator: i64, denominator: i64) -> Self {
        Self::of(Decimal::from(numerator), Decimal::from(denominator))
    }

    /// Creates the ratio `value/1`.
    #[must_use]
    pub const fn from_decimal(value: Decimal) -> Self {
        Self::of(value, Decimal::ONE)
    }

    /// The numerator, as given.
    #[must_use]
    pub const fn numerator(&self) -> Decimal {
        self.numerator
    }

    /// The denominator, as given.
    #[must_use]
    pub const fn denominator(&self) -> Decimal {
        self.denominator
    }

    /// Divides numerator by denominator and rounds the quotient to `scale`
    /// fractional digits.
    ///
    /// The division runs at the full precision of `Decimal` (28 significant
    /// digits); rounding only happens once, at the end.
    ///
    /// # Errors
    ///
    /// - `DivideByZero` when the denominator is zero.
    /// - `Overflow` when the quotient does not fit in a decimal.
    /// - `UnrepresentableRounding` when `policy` is `Unnecessary` and the
    ///   exact fraction has non-zero digits beyond `scale`, including digits
    ///   past the 28 a decimal can carry.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::ratio::Ratio;
    /// use coinage_shared::RoundingPolicy;
    /// use rust_decimal_macros::dec;
    ///
    /// let ratio = Ratio::of_i64(9001, 3000);
    /// let value = ratio.decimal_value(6, RoundingPolicy::AwayFromZero).unwrap();
    /// assert_eq!(value, dec!(3.000333));
    /// ```
    pub fn decimal_value(&self, scale: u32, policy: RoundingPolicy) -> MoneyResult<Decimal> {
        if self.denominator.is_zero() {
            return Err(MoneyError::DivideByZero);
        }
        let quotient = self
            .numerator
            .checked_div(self.denominator)
            .ok_or(MoneyError::Overflow)?;
        if policy == RoundingPolicy::Unnecessary && !self.terminates_within(scale)? {
            return Err(MoneyError::UnrepresentableRounding {
                value: quotient,
                scale,
            });
        }
        policy.round(quotient, scale)
    }

    /// Returns true if the exact fraction has no non-zero digit beyond
    /// `scale`. Long division on the remainder, independent of the rounded
    /// 28-digit quotient.
    fn terminates_within(&self, scale: u32) -> MoneyResult<bool> {
        let divisor = self.denominator.abs();
        let mut remainder = self
            .numerator
            .abs()
            .checked_rem(divisor)
            .ok_or(MoneyError::Overflow)?;
        for _ in 0..scale.min(MAX_FRACTION_DIGITS) {
            if remainder.is_zero() {
                break;
            }
            remainder = remainder
                .checked_mul(Decimal::TEN)
                .and_then(|shifted| shifted.checked_rem(divisor))
                .ok_or(MoneyError::Overflow)?;
        }
        Ok(remainder.is_zero())
    }

    /// Multiplies the numerator by `factor`, leaving the denominator alone.
    ///
    /// No rounding is performed.
    pub fn times(&self, factor: Decimal) -> MoneyResult<Self> {
        let numerator = self
            .numerator
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::of(numerator, self.denominator))
    }

    /// Multiplies two ratios term by term: `(n1, d1) * (n2, d2) = (n1*n2, d1*d2)`.
    ///
    /// The product is not reduced.
    pub fn times_ratio(&self, other: &Self) -> MoneyResult<Self> {
        let numerator = self
            .numerator
            .checked_mul(other.numerator)
            .ok_or(MoneyError::Overflow)?;
        let denominator = self
            .denominator
            .checked_mul(other.denominator)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::of(numerator, denominator))
    }
}

impl From<Decimal> for Ratio {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

/// Panics on overflow, like `Decimal`'s own operators. Use [`Ratio::times`]
/// for a checked product.
impl Mul<Decimal> for Ratio {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        Self::of(self.numerator * factor, self.denominator)
    }
}

/// Panics on overflow, like `Decimal`'s own operators. Use
/// [`Ratio::times_ratio`] for a checked product.
impl Mul for Ratio {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::of(
            self.numerator * other.numerator,
            self.denominator * other.denominator,
        )
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
