//! Property-based tests for ratios.

use coinage_shared::RoundingPolicy;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::Ratio;

/// Strategy for small non-zero integer terms.
fn term() -> impl Strategy<Value = i64> {
    prop_oneof![-10_000i64..-1, 1i64..10_000]
}

/// Strategy for decimal factors with up to 4 fraction digits.
fn factor() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Products keep every term: numerators and denominators multiply independently.
    #[test]
    fn prop_times_ratio_never_reduces(
        n1 in term(), d1 in term(), n2 in term(), d2 in term(),
    ) {
        let product = Ratio::of_i64(n1, d1).times_ratio(&Ratio::of_i64(n2, d2)).unwrap();
        prop_assert_eq!(product.numerator(), Decimal::from(n1 * n2));
        prop_assert_eq!(product.denominator(), Decimal::from(d1 * d2));
    }

    /// Term-wise multiplication is associative on the pair.
    #[test]
    fn prop_times_ratio_is_associative(
        n1 in term(), d1 in term(), n2 in term(), d2 in term(), n3 in term(), d3 in term(),
    ) {
        let a = Ratio::of_i64(n1, d1);
        let b = Ratio::of_i64(n2, d2);
        let c = Ratio::of_i64(n3, d3);
        let left = a.times_ratio(&b).unwrap().times_ratio(&c).unwrap();
        let right = a.times_ratio(&b.times_ratio(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    /// Scaling the numerator leaves the denominator untouched.
    #[test]
    fn prop_times_keeps_denominator(n in term(), d in term(), f in factor()) {
        let ratio = Ratio::of_i64(n, d);
        let scaled = ratio.times(f).unwrap();
        prop_assert_eq!(scaled.denominator(), ratio.denominator());
        prop_assert_eq!(scaled.numerator(), Decimal::from(n) * f);
    }

    /// Conversion results never carry more digits than requested.
    #[test]
    fn prop_decimal_value_respects_scale(n in term(), d in term(), scale in 0u32..=10) {
        let value = Ratio::of_i64(n, d).decimal_value(scale, RoundingPolicy::ToEven).unwrap();
        prop_assert!(value.scale() <= scale);
    }

    /// Floor and ceiling bracket every other policy.
    #[test]
    fn prop_floor_and_ceiling_bracket(n in term(), d in term(), scale in 0u32..=6) {
        let ratio = Ratio::of_i64(n, d);
        let floor = ratio.decimal_value(scale, RoundingPolicy::Floor).unwrap();
        let ceiling = ratio.decimal_value(scale, RoundingPolicy::Ceiling).unwrap();
        for policy in [
            RoundingPolicy::ToEven,
            RoundingPolicy::AwayFromZero,
            RoundingPolicy::HalfUp,
            RoundingPolicy::HalfDown,
            RoundingPolicy::Up,
            RoundingPolicy::Down,
        ] {
            let value = ratio.decimal_value(scale, policy).unwrap();
            prop_assert!(floor <= value && value <= ceiling, "{:?} gave {}", policy, value);
        }
    }
}
