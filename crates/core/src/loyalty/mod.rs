//! Loyalty tiers and reward redemption.
//!
//! How points are earned is owned by the account ledger; this module only
//! reads a points balance.

pub mod redemption;
pub mod tiers;
pub mod types;

#[cfg(test)]
mod tests;

pub use redemption::{RedemptionQuote, RewardOffer, quote_redemption};
pub use tiers::{calculate_loyalty_progress, resolve_tier, tier_gaps, validate_tiers};
pub use types::{LoyaltyAccount, TierDefinition, TierGap, TierProgress};
