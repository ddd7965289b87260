//! Property-based tests for bracket resolution.
//!
//! - Monotonicity: resolved rate never drops as the amount grows
//! - Clamp law: amounts below the first threshold get the first bracket
//! - Highest qualifying threshold wins
//! - Idempotence

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::resolver::resolve_bracket;
use super::types::{ConversionTable, RateBracket};
use super::validation::validate_table;
use crate::error::EngineError;

/// Strategy to generate valid tables of 1 to 8 brackets.
///
/// Thresholds are cumulative positive steps; rates are sorted basis points
/// in (0, 1].
fn valid_table() -> impl Strategy<Value = ConversionTable> {
    (1usize..8)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(1i64..5_000, n),
                prop::collection::vec(1i64..=10_000, n),
            )
        })
        .prop_map(|(steps, mut bps)| {
            bps.sort_unstable();
            let mut threshold = Decimal::ZERO;
            let brackets = steps
                .iter()
                .zip(bps)
                .map(|(step, bp)| {
                    threshold += Decimal::from(*step);
                    RateBracket::from_rate(threshold, Decimal::new(bp, 4))
                })
                .collect();
            ConversionTable {
                category: "generated".to_string(),
                brackets,
            }
        })
}

/// Strategy to generate non-negative amounts (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Generated tables satisfy the load-time invariants.
    #[test]
    fn prop_generated_tables_validate(table in valid_table()) {
        prop_assert!(validate_table(&table).is_ok());
    }

    /// *For any* increasing sequence of amounts, including every threshold,
    /// the resolved rate is non-decreasing.
    #[test]
    fn prop_rate_is_monotonic(
        table in valid_table(),
        samples in prop::collection::vec(amount(), 1..40),
    ) {
        let mut amounts: Vec<Decimal> = samples;
        amounts.extend(table.brackets.iter().map(|b| b.threshold));
        amounts.sort();

        let mut previous = Decimal::ZERO;
        for amount in amounts {
            let rate = resolve_bracket(&table, amount).unwrap().rate;
            prop_assert!(
                rate >= previous,
                "rate {} at {} dropped below {}",
                rate, amount, previous
            );
            previous = rate;
        }
    }

    /// *For any* amount below the first threshold, the first bracket is returned.
    #[test]
    fn prop_clamp_to_minimum(table in valid_table(), fraction in 0i64..10_000) {
        let first = table.brackets[0];
        let amount = first.threshold * Decimal::new(fraction, 4);
        prop_assert!(amount < first.threshold);
        prop_assert_eq!(resolve_bracket(&table, amount).unwrap(), &first);
    }

    /// *For any* amount at or above the first threshold, the resolved bracket
    /// is the highest one whose threshold does not exceed the amount.
    #[test]
    fn prop_highest_qualifying_threshold(table in valid_table(), amount in amount()) {
        prop_assume!(amount >= table.brackets[0].threshold);
        let bracket = resolve_bracket(&table, amount).unwrap();
        prop_assert!(bracket.threshold <= amount);
        for other in &table.brackets {
            if other.threshold <= amount {
                prop_assert!(other.threshold <= bracket.threshold);
            }
        }
    }

    /// Resolving twice gives identical output.
    #[test]
    fn prop_resolution_is_idempotent(table in valid_table(), amount in amount()) {
        let first = *resolve_bracket(&table, amount).unwrap();
        let second = *resolve_bracket(&table, amount).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* negative amount, resolution fails with `InvalidInput`.
    #[test]
    fn prop_negative_amounts_rejected(table in valid_table(), cents in 1i64..100_000_000) {
        let result = resolve_bracket(&table, Decimal::new(-cents, 2));
        prop_assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }
}
