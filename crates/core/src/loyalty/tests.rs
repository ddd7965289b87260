//! Property-based tests for the loyalty module.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::redemption::{RewardOffer, quote_redemption};
use super::tiers::{resolve_tier, validate_tiers};
use super::types::TierDefinition;

/// Strategy to generate valid ladders of 1 to 6 tiers starting at 0.
fn tier_ladder() -> impl Strategy<Value = Vec<TierDefinition>> {
    prop::collection::vec(1i64..10_000, 0..5).prop_map(|steps| {
        let mut threshold = 0;
        let mut tiers = vec![TierDefinition::new("Tier 0", 0, vec![])];
        for (i, step) in steps.into_iter().enumerate() {
            threshold += step;
            tiers.push(TierDefinition::new(format!("Tier {}", i + 1), threshold, vec![]));
        }
        tiers
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Generated ladders pass load-time validation.
    #[test]
    fn prop_generated_ladders_validate(tiers in tier_ladder()) {
        prop_assert!(validate_tiers(&tiers).is_ok());
    }

    /// *For any* balance, the current tier is the highest tier reached and
    /// the next tier is the first one above the balance.
    #[test]
    fn prop_current_and_next_tier(tiers in tier_ladder(), points in 0i64..60_000) {
        let progress = resolve_tier(&tiers, points).unwrap();

        prop_assert!(progress.current_tier.points_threshold <= points);
        let highest_reached = tiers
            .iter()
            .filter(|t| t.points_threshold <= points)
            .map(|t| t.points_threshold)
            .max()
            .unwrap();
        prop_assert_eq!(progress.current_tier.points_threshold, highest_reached);

        match &progress.next_tier {
            Some(next) => {
                prop_assert!(next.points_threshold > points);
                prop_assert_eq!(progress.points_to_next, next.points_threshold - points);
            }
            None => {
                prop_assert!(tiers.iter().all(|t| t.points_threshold <= points));
                prop_assert_eq!(progress.points_to_next, 0);
            }
        }
    }

    /// *For any* balance, progress is within [0, 100] and is 100 only at the
    /// top tier.
    #[test]
    fn prop_progress_bounds(tiers in tier_ladder(), points in 0i64..60_000) {
        let progress = resolve_tier(&tiers, points).unwrap();
        prop_assert!(progress.progress_percent >= Decimal::ZERO);
        prop_assert!(progress.progress_percent <= Decimal::ONE_HUNDRED);
        if progress.next_tier.is_none() {
            prop_assert_eq!(progress.progress_percent, Decimal::ONE_HUNDRED);
        }
    }

    /// Resolving twice gives identical output.
    #[test]
    fn prop_resolution_is_idempotent(tiers in tier_ladder(), points in 0i64..60_000) {
        let first = resolve_tier(&tiers, points).unwrap();
        let second = resolve_tier(&tiers, points).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* negative balance, resolution fails.
    #[test]
    fn prop_negative_points_rejected(tiers in tier_ladder(), points in i64::MIN..0) {
        prop_assert!(resolve_tier(&tiers, points).is_err());
    }

    /// *For any* redemption, the balance never goes negative and a redeemable
    /// quote deducts exactly the cost.
    #[test]
    fn prop_redemption_balance(
        tiers in tier_ladder(),
        points in 0i64..60_000,
        cost in 0i64..60_000,
    ) {
        let offer = RewardOffer { id: 1, title: "Offer".to_string(), points_cost: cost };
        let quote = quote_redemption(&tiers, points, &offer).unwrap();
        prop_assert!(quote.remaining_points >= 0);
        if quote.can_redeem {
            prop_assert_eq!(quote.remaining_points, points - cost);
            prop_assert_eq!(quote.shortfall, 0);
        } else {
            prop_assert_eq!(quote.remaining_points, points);
            prop_assert_eq!(quote.shortfall, cost - points);
        }
    }
}
