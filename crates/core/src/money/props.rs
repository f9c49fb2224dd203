//! Property-based tests for money operations.
//!
//! - Scale invariant after every operation
//! - Additive inverse and subtraction identity
//! - Cross-currency rejection
//! - Allocation sum invariant

use coinage_shared::{Currency, RoundingPolicy};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::Money;
use crate::ratio::Ratio;

/// Strategy to generate amounts with up to 4 fraction digits (-1,000,000 to 1,000,000).
fn raw_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick a currency with 0, 2 or 3 fraction digits.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(vec![
        Currency::USD,
        Currency::EUR,
        Currency::JPY,
        Currency::IDR,
        Currency::KWD,
    ])
}

/// Strategy to pick any rounding policy that never fails.
fn policy() -> impl Strategy<Value = RoundingPolicy> {
    prop::sample::select(vec![
        RoundingPolicy::ToEven,
        RoundingPolicy::AwayFromZero,
        RoundingPolicy::Up,
        RoundingPolicy::Down,
        RoundingPolicy::Ceiling,
        RoundingPolicy::Floor,
        RoundingPolicy::HalfUp,
        RoundingPolicy::HalfDown,
    ])
}

/// Strategy to generate multiplication factors (-100.000 to 100.000).
fn factor() -> impl Strategy<Value = Decimal> {
    (-100_000i64..100_000i64).prop_map(|v| Decimal::new(v, 3))
}

fn money() -> impl Strategy<Value = Money> {
    (raw_amount(), currency()).prop_map(|(amount, currency)| Money::new(amount, currency))
}

fn assert_at_scale(money: &Money) -> Result<(), TestCaseError> {
    prop_assert_eq!(
        money.amount().scale(),
        money.currency().fraction_digits(),
        "{} is not at its currency scale",
        money
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every constructor lands on the currency scale.
    #[test]
    fn prop_construction_is_at_scale(
        amount in raw_amount(),
        currency in currency(),
        policy in policy(),
    ) {
        assert_at_scale(&Money::new(amount, currency))?;
        assert_at_scale(&Money::value_of_with_rounding(amount, currency, policy).unwrap())?;
    }

    /// Every arithmetic result lands on the currency scale.
    #[test]
    fn prop_arithmetic_is_at_scale(
        m in money(),
        raw in raw_amount(),
        f in factor(),
        policy in policy(),
    ) {
        let n = Money::new(raw, m.currency());
        assert_at_scale(&m.plus(&n).unwrap())?;
        assert_at_scale(&m.minus(&n).unwrap())?;
        assert_at_scale(&m.negated())?;
        assert_at_scale(&m.abs())?;
        assert_at_scale(&m.times_with_rounding(f, policy).unwrap())?;
        assert_at_scale(&m.incremented().unwrap())?;
        if !f.is_zero() {
            assert_at_scale(&m.divided_by_with_rounding(f, policy).unwrap())?;
        }
        assert_at_scale(&m.applying(&Ratio::of_i64(2, 7), policy).unwrap())?;
    }

    /// m + (-m) is zero in m's currency.
    #[test]
    fn prop_additive_inverse(m in money()) {
        prop_assert_eq!(m.plus(&m.negated()).unwrap(), Money::zero(m.currency()));
    }

    /// m - n equals m + (-n).
    #[test]
    fn prop_minus_is_plus_negated(m in money(), raw in raw_amount()) {
        let n = Money::new(raw, m.currency());
        prop_assert_eq!(m.minus(&n).unwrap(), m.plus(&n.negated()).unwrap());
    }

    /// Re-rounding an already rounded value changes nothing.
    #[test]
    fn prop_rounding_is_idempotent(m in money(), policy in policy()) {
        prop_assert_eq!(Money::value_of(m.amount(), m.currency()), m);
        prop_assert_eq!(
            Money::value_of_with_rounding(m.amount(), m.currency(), policy).unwrap(),
            m
        );
        prop_assert_eq!(
            Money::value_of_with_rounding(m.amount(), m.currency(), RoundingPolicy::Unnecessary)
                .unwrap(),
            m
        );
    }

    /// Binary operations across currencies always fail with a mismatch.
    #[test]
    fn prop_cross_currency_is_rejected(a in raw_amount(), b in raw_amount()) {
        let usd = Money::new(a, Currency::USD);
        let jpy = Money::new(b, Currency::JPY);
        prop_assert!(usd.plus(&jpy).unwrap_err().is_currency_mismatch());
        prop_assert!(usd.minus(&jpy).unwrap_err().is_currency_mismatch());
        prop_assert!(usd.compare(&jpy).unwrap_err().is_currency_mismatch());
        prop_assert!(usd.divided_by_money(&jpy).unwrap_err().is_currency_mismatch());
        prop_assert!(usd.partial_cmp(&jpy).is_none());
        prop_assert_ne!(usd, jpy);
    }

    /// Exactly one of is_negative and is_positive holds.
    #[test]
    fn prop_sign_predicates_partition(m in money()) {
        prop_assert_ne!(m.is_negative(), m.is_positive());
    }

    /// Allocation shares always add back up to the original amount.
    #[test]
    fn prop_allocate_sum_invariant(
        m in money(),
        weights in prop::collection::vec((0i64..1_000).prop_map(|w| Decimal::new(w, 1)), 1..10),
    ) {
        prop_assume!(weights.iter().any(|w| !w.is_zero()));
        let shares = m.allocate(&weights).unwrap();
        prop_assert_eq!(shares.len(), weights.len());
        prop_assert_eq!(Money::sum(&shares, m.currency()).unwrap(), m);
        for share in &shares {
            assert_at_scale(share)?;
            prop_assert!(share.amount().abs() <= m.amount().abs());
        }
    }

    /// Equal allocation shares differ by at most one minimum increment.
    #[test]
    fn prop_allocate_equal_is_fair(m in money(), count in 1usize..50) {
        let shares = m.allocate_equal(count).unwrap();
        let largest = shares.iter().map(Money::amount).max().unwrap();
        let smallest = shares.iter().map(Money::amount).min().unwrap();
        prop_assert!(largest - smallest <= m.currency().minimum_increment());
        prop_assert_eq!(Money::sum(&shares, m.currency()).unwrap(), m);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ratio_of_money_defers_rounding() {
        let ratio = Money::us_dollars(100)
            .divided_by_money(&Money::us_dollars(3))
            .unwrap();
        assert_eq!(
            ratio.decimal_value(0, RoundingPolicy::AwayFromZero).unwrap(),
            dec!(33)
        );
    }

    #[test]
    fn test_applying_one_third_at_one_digit() {
        assert_eq!(
            Money::us_dollars(100)
                .applying_at_scale(&Ratio::of_i64(1, 3), 1, RoundingPolicy::AwayFromZero)
                .unwrap(),
            Money::us_dollars(dec!(33.3))
        );
    }

    #[test]
    fn test_float_input_close_to_midpoint() {
        let above = Money::from_f64_with_rounding(2.515, Currency::CAD, RoundingPolicy::AwayFromZero)
            .unwrap();
        let below =
            Money::from_f64_with_rounding(2.5149, Currency::CAD, RoundingPolicy::AwayFromZero)
                .unwrap();
        assert_eq!(above.amount(), dec!(2.52));
        assert_eq!(below.amount(), dec!(2.51));
        assert_ne!(above, below);
    }

    #[test]
    fn test_chained_ratio_stays_exact_until_applied() {
        // (100 / 300) * (3 / 1) applied to a dollar is exactly a dollar
        let ratio = Money::us_dollars(100)
            .divided_by_money(&Money::us_dollars(300))
            .unwrap()
            .times_ratio(&Ratio::of_i64(3, 1))
            .unwrap();
        assert_eq!(
            Money::us_dollars(1)
                .applying(&ratio, RoundingPolicy::ToEven)
                .unwrap(),
            Money::us_dollars(1)
        );
    }

    #[test]
    fn test_minimum_increment_by_scale() {
        assert_eq!(Money::zero(Currency::JPY).minimum_increment().amount(), dec!(1));
        assert_eq!(Money::zero(Currency::USD).minimum_increment().amount(), dec!(0.01));
    }
}
