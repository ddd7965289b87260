//! Reward redemption quotes.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::tiers::resolve_tier;
use super::types::TierDefinition;

/// A reward offered in exchange for points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardOffer {
    /// Catalog id.
    pub id: u32,
    /// Title shown in the catalog.
    pub title: String,
    /// Points deducted on redemption.
    pub points_cost: i64,
}

/// Outcome of redeeming an offer against a points balance.
///
/// Nothing is deducted here; the account collaborator applies the quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionQuote {
    /// Offer being redeemed.
    pub offer_id: u32,
    /// Whether the balance covers the cost.
    pub can_redeem: bool,
    /// Balance before redemption.
    pub points_before: i64,
    /// Balance after redemption (unchanged when `can_redeem` is false).
    pub remaining_points: i64,
    /// Points missing; 0 when `can_redeem` is true.
    pub shortfall: i64,
    /// Tier at `points_before`.
    pub tier_before: String,
    /// Tier at `remaining_points`.
    pub tier_after: String,
}

impl RedemptionQuote {
    /// Returns true if redeeming drops the user into a lower tier.
    #[must_use]
    pub fn changes_tier(&self) -> bool {
        self.tier_before != self.tier_after
    }
}

/// Quotes redeeming `offer` with a balance of `points`.
///
/// # Errors
///
/// - `EngineError::InvalidInput` if `points` or the offer cost is negative.
/// - `EngineError::Configuration` if `tiers` is empty.
pub fn quote_redemption(
    tiers: &[TierDefinition],
    points: i64,
    offer: &RewardOffer,
) -> EngineResult<RedemptionQuote> {
    if offer.points_cost < 0 {
        return Err(EngineError::invalid(format!(
            "offer {} has negative cost {}",
            offer.id, offer.points_cost
        )));
    }

    let before = resolve_tier(tiers, points)?;
    let can_redeem = points >= offer.points_cost;
    let remaining_points = if can_redeem {
        points - offer.points_cost
    } else {
        points
    };
    let after = resolve_tier(tiers, remaining_points)?;

    Ok(RedemptionQuote {
        offer_id: offer.id,
        can_redeem,
        points_before: points,
        remaining_points,
        shortfall: (offer.points_cost - points).max(0),
        tier_before: before.current_tier.name,
        tier_after: after.current_tier.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;

    fn offer(id: u32) -> RewardOffer {
        reference::reward_offers()
            .into_iter()
            .find(|o| o.id == id)
            .unwrap()
    }

    #[test]
    fn test_redeem_drops_tier() {
        let tiers = reference::tiers();
        // Airport Lounge Access costs 2500
        let quote = quote_redemption(&tiers, 2500, &offer(2)).unwrap();
        assert!(quote.can_redeem);
        assert_eq!(quote.remaining_points, 0);
        assert_eq!(quote.shortfall, 0);
        assert_eq!(quote.tier_before, "Silver");
        assert_eq!(quote.tier_after, "Bronze");
        assert!(quote.changes_tier());
    }

    #[test]
    fn test_redeem_keeps_tier() {
        let tiers = reference::tiers();
        let quote = quote_redemption(&tiers, 6000, &offer(3)).unwrap();
        assert!(quote.can_redeem);
        assert_eq!(quote.remaining_points, 5250);
        assert_eq!(quote.tier_after, "Gold");
        assert!(!quote.changes_tier());
    }

    #[test]
    fn test_insufficient_points() {
        let tiers = reference::tiers();
        let quote = quote_redemption(&tiers, 500, &offer(3)).unwrap();
        assert!(!quote.can_redeem);
        assert_eq!(quote.remaining_points, 500);
        assert_eq!(quote.shortfall, 250);
        assert!(!quote.changes_tier());
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let tiers = reference::tiers();
        assert!(matches!(
            quote_redemption(&tiers, -1, &offer(1)),
            Err(EngineError::InvalidInput(_))
        ));
        let bad = RewardOffer {
            id: 99,
            title: "Broken".to_string(),
            points_cost: -10,
        };
        assert!(matches!(
            quote_redemption(&tiers, 100, &bad),
            Err(EngineError::InvalidInput(_))
        ));
    }
}
