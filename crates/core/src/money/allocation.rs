//! Proportional allocation using the Largest Remainder Method.
//!
//! Splits an amount into shares that sum EXACTLY to the original:
//! 1. Resolve each weight's fraction of the total weight through a `Ratio`
//! 2. Scale the amount by that fraction and truncate to the currency scale
//! 3. Hand the leftover minimum increments, one each, to the shares with the
//!    largest truncated remainders

use coinage_shared::types::MAX_FRACTION_DIGITS;
use coinage_shared::{MoneyError, MoneyResult, RoundingPolicy};
use rust_decimal::prelude::*;

use super::types::Money;
use crate::ratio::Ratio;

impl Money {
    /// Splits this amount proportionally to `weights`.
    ///
    /// Shares keep the sign of the amount and sum exactly to it. Ties
    /// between equal remainders favour the earlier share. An empty slice
    /// yields no shares.
    ///
    /// Weights are divided by their total before they touch the amount, so
    /// any weights whose sum fits in a decimal are accepted regardless of
    /// their magnitude. Fractions carry 28 digits.
    ///
    /// # Errors
    ///
    /// `InvalidAllocation` for negative weights or weights summing to zero,
    /// `Overflow` when the weights do not sum within a decimal.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// // 100 split 70/30
    /// let shares = Money::us_dollars(100).allocate(&[dec!(70), dec!(30)]).unwrap();
    /// assert_eq!(shares, vec![Money::us_dollars(70), Money::us_dollars(30)]);
    /// ```
    pub fn allocate(&self, weights: &[Decimal]) -> MoneyResult<Vec<Self>> {
        if weights.is_empty() {
            return Ok(Vec::new());
        }
        if let Some(weight) = weights.iter().find(|w| **w < Decimal::ZERO) {
            return Err(MoneyError::InvalidAllocation(format!(
                "negative weight {weight}"
            )));
        }
        let total_weight = weights
            .iter()
            .try_fold(Decimal::ZERO, |acc, w| acc.checked_add(*w))
            .ok_or(MoneyError::Overflow)?;
        if total_weight.is_zero() {
            return Err(MoneyError::InvalidAllocation(
                "weights sum to zero".to_string(),
            ));
        }

        let currency = self.currency();
        let unit = currency.minimum_increment();
        let magnitude = self.amount().abs();

        let mut shares = Vec::with_capacity(weights.len());
        let mut remainders = Vec::with_capacity(weights.len());
        for (index, weight) in weights.iter().enumerate() {
            // fraction <= 1, so the product never exceeds the amount
            let fraction = Ratio::of(*weight, total_weight)
                .decimal_value(MAX_FRACTION_DIGITS, RoundingPolicy::Down)?;
            let raw = magnitude
                .checked_mul(fraction)
                .ok_or(MoneyError::Overflow)?;
            let share =
                raw.round_dp_with_strategy(currency.fraction_digits(), RoundingStrategy::ToZero);
            shares.push(share);
            remainders.push((index, raw - share));
        }

        // Stable sort: equal remainders keep index order
        remainders.sort_by(|a, b| b.1.cmp(&a.1));

        let allocated = shares
            .iter()
            .try_fold(Decimal::ZERO, |acc, share| acc.checked_add(*share))
            .ok_or(MoneyError::Overflow)?;
        let leftover = ((magnitude - allocated) / unit).trunc();
        let increments = leftover.abs().to_usize().unwrap_or(usize::MAX);
        if leftover.is_sign_negative() {
            // Fractions rounded up past the total: take increments back from
            // the smallest remainders.
            let donors: Vec<usize> = remainders
                .iter()
                .rev()
                .map(|(index, _)| *index)
                .filter(|index| shares[*index] >= unit)
                .take(increments)
                .collect();
            for index in donors {
                shares[index] -= unit;
            }
        } else {
            for (index, _) in remainders.iter().take(increments) {
                shares[*index] += unit;
            }
        }

        let negative = self.is_negative();
        Ok(shares
            .into_iter()
            .map(|share| Self::new(if negative { -share } else { share }, currency))
            .collect())
    }

    /// Splits this amount into `count` equal shares.
    ///
    /// The first shares absorb the leftover increments: 100.00 in three is
    /// `[33.34, 33.33, 33.33]`.
    pub fn allocate_equal(&self, count: usize) -> MoneyResult<Vec<Self>> {
        self.allocate(&vec![Decimal::ONE; count])
    }
}
