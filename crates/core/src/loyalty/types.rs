//! Loyalty data types.

use cards2cash_shared::config::TierConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A loyalty tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDefinition {
    /// Tier name (e.g. "Silver").
    pub name: String,
    /// Points needed to reach the tier.
    pub points_threshold: i64,
    /// Benefits, in display order.
    pub benefits: Vec<String>,
}

impl TierDefinition {
    /// Creates a tier.
    #[must_use]
    pub fn new(name: impl Into<String>, points_threshold: i64, benefits: Vec<String>) -> Self {
        Self {
            name: name.into(),
            points_threshold,
            benefits,
        }
    }
}

impl From<&TierConfig> for TierDefinition {
    fn from(config: &TierConfig) -> Self {
        Self::new(
            config.name.clone(),
            config.points_threshold,
            config.benefits.clone(),
        )
    }
}

/// Points balance supplied by the account collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    /// Current points balance.
    pub current_points: i64,
}

impl LoyaltyAccount {
    /// Creates an account view with the given balance.
    #[must_use]
    pub const fn new(current_points: i64) -> Self {
        Self { current_points }
    }
}

/// Where a points balance sits in the tier ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierProgress {
    /// Points the progress was computed for.
    pub points: i64,
    /// Highest tier reached.
    pub current_tier: TierDefinition,
    /// Next tier up, `None` at the top tier.
    pub next_tier: Option<TierDefinition>,
    /// Points still needed for `next_tier`; 0 at the top tier.
    pub points_to_next: i64,
    /// Progress from `current_tier` to `next_tier` in [0, 100], 2dp.
    pub progress_percent: Decimal,
}

impl TierProgress {
    /// Returns true at the top tier.
    #[must_use]
    pub fn is_top_tier(&self) -> bool {
        self.next_tier.is_none()
    }
}

/// Distance from a points balance to one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierGap {
    /// Tier name.
    pub tier: String,
    /// Points needed to reach the tier.
    pub points_threshold: i64,
    /// Additional points still required; 0 once reached.
    pub points_needed: i64,
    /// Whether the balance already qualifies.
    pub reached: bool,
}
