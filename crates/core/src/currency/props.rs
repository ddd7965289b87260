//! Property-based tests for currency conversion.
//!
//! - Identity pairs preserve the amount
//! - Conversion is deterministic and never negative
//! - Converted amounts keep the order of the inputs
//! - Results carry at most 2 decimal places
//! - Amounts anywhere in the `Decimal` range either convert or fail with
//!   `InvalidInput`

use cards2cash_shared::Currency;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::convert_currency;
use crate::error::EngineError;
use crate::reference;
use crate::rounding::round_money;

/// Strategy to generate non-negative amounts (0.0000 to 10,000,000.0000).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate any non-negative `Decimal`, up to `Decimal::MAX`.
fn any_magnitude() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, scale)| Decimal::from_parts(lo, mid, hi, false, scale))
}

/// Strategy to pick any supported currency.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* amount and currency, converting to the same currency uses
    /// rate 1 and returns the amount rounded to 2dp.
    #[test]
    fn prop_identity_preserves_amount(amount in amount(), c in currency()) {
        let graph = reference::rate_graph();
        let result = convert_currency(&graph, c, c, amount).unwrap();
        prop_assert_eq!(result.rate, Decimal::ONE);
        prop_assert_eq!(result.converted_amount, round_money(amount));
    }

    /// *For any* configured pair, converting twice gives identical output.
    #[test]
    fn prop_conversion_is_deterministic(amount in amount(), from in currency(), to in currency()) {
        let graph = reference::rate_graph();
        let first = convert_currency(&graph, from, to, amount).unwrap();
        let second = convert_currency(&graph, from, to, amount).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* non-negative amount, the converted amount is non-negative
    /// and has at most 2 decimal places.
    #[test]
    fn prop_converted_amount_shape(amount in amount(), from in currency(), to in currency()) {
        let graph = reference::rate_graph();
        let result = convert_currency(&graph, from, to, amount).unwrap();
        prop_assert!(result.converted_amount >= Decimal::ZERO);
        prop_assert_eq!(result.converted_amount, round_money(result.converted_amount));
    }

    /// *For any* two amounts a <= b, convert(a) <= convert(b).
    #[test]
    fn prop_conversion_preserves_order(
        a in amount(),
        b in amount(),
        from in currency(),
        to in currency(),
    ) {
        let graph = reference::rate_graph();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low = convert_currency(&graph, from, to, low).unwrap();
        let high = convert_currency(&graph, from, to, high).unwrap();
        prop_assert!(low.converted_amount <= high.converted_amount);
    }

    /// *For any* non-negative amount up to `Decimal::MAX`, conversion returns
    /// a rounded amount or `InvalidInput`; it never panics.
    #[test]
    fn prop_extreme_amounts_are_bounded(
        amount in any_magnitude(),
        from in currency(),
        to in currency(),
    ) {
        let graph = reference::rate_graph();
        match convert_currency(&graph, from, to, amount) {
            Ok(result) => {
                prop_assert!(result.converted_amount >= Decimal::ZERO);
                prop_assert_eq!(result.converted_amount, round_money(result.converted_amount));
            }
            Err(e) => prop_assert!(matches!(e, EngineError::InvalidInput(_)), "{:?}", e),
        }
    }
}
