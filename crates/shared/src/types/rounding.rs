//! Rounding policies shared by money and ratio conversions.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// Strategy for resolving a value that falls between two representable
/// values at a given scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Nearest neighbour, midpoint to the even digit (banker's rounding).
    #[default]
    ToEven,
    /// Nearest neighbour, midpoint away from zero.
    AwayFromZero,
    /// Always away from zero: `1.01 -> 1.1`, `-1.01 -> -1.1`.
    Up,
    /// Always toward zero (truncation).
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// Nearest neighbour, midpoint away from zero.
    HalfUp,
    /// Nearest neighbour, midpoint toward zero.
    HalfDown,
    /// No rounding allowed; inexact values are an error.
    Unnecessary,
}

impl RoundingPolicy {
    /// The `rust_decimal` strategy backing this policy, if any.
    ///
    /// `Unnecessary` has none: it never changes a value.
    #[must_use]
    pub const fn strategy(self) -> Option<RoundingStrategy> {
        match self {
            Self::ToEven => Some(RoundingStrategy::MidpointNearestEven),
            Self::AwayFromZero | Self::HalfUp => Some(RoundingStrategy::MidpointAwayFromZero),
            Self::Up => Some(RoundingStrategy::AwayFromZero),
            Self::Down => Some(RoundingStrategy::ToZero),
            Self::Ceiling => Some(RoundingStrategy::ToPositiveInfinity),
            Self::Floor => Some(RoundingStrategy::ToNegativeInfinity),
            Self::HalfDown => Some(RoundingStrategy::MidpointTowardZero),
            Self::Unnecessary => None,
        }
    }

    /// Rounds `value` to `scale` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns `UnrepresentableRounding` under `Unnecessary` when `value`
    /// has non-zero digits beyond `scale`.
    pub fn round(self, value: Decimal, scale: u32) -> MoneyResult<Decimal> {
        match self.strategy() {
            Some(strategy) => Ok(value.round_dp_with_strategy(scale, strategy)),
            None => {
                let truncated = value.round_dp_with_strategy(scale, RoundingStrategy::ToZero);
                if truncated == value {
                    Ok(truncated)
                } else {
                    Err(MoneyError::UnrepresentableRounding { value, scale })
                }
            }
        }
    }
}
