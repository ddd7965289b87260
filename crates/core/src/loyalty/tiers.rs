//! Tier resolution and progress.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::rounding::round_half_up;

use super::types::{TierDefinition, TierGap, TierProgress};

/// Validates a tier ladder.
///
/// The first tier must start at 0 points so every balance has a tier, and
/// thresholds must be strictly increasing. Names must be non-blank and unique.
///
/// # Errors
///
/// Returns `EngineError::Configuration` naming the first violation.
pub fn validate_tiers(tiers: &[TierDefinition]) -> EngineResult<()> {
    let Some(first) = tiers.first() else {
        return Err(EngineError::config("no loyalty tiers configured"));
    };
    if first.points_threshold != 0 {
        return Err(EngineError::config(format!(
            "first tier '{}' must start at 0 points, got {}",
            first.name, first.points_threshold
        )));
    }

    let mut names = HashSet::new();
    for tier in tiers {
        let name = tier.name.trim();
        if name.is_empty() {
            return Err(EngineError::config("tier name must not be blank"));
        }
        if !names.insert(name.to_lowercase()) {
            return Err(EngineError::config(format!(
                "tier '{name}' is configured twice"
            )));
        }
    }

    if let Some(pair) = tiers
        .windows(2)
        .find(|w| w[1].points_threshold <= w[0].points_threshold)
    {
        return Err(EngineError::config(format!(
            "tier '{}' threshold {} is not above '{}' threshold {}",
            pair[1].name, pair[1].points_threshold, pair[0].name, pair[0].points_threshold
        )));
    }

    Ok(())
}

/// Resolves the tier for a points balance.
///
/// The current tier is found by folding over the ladder in ascending order
/// and keeping the last tier whose threshold the balance meets. The next tier
/// is the first one above the balance.
///
/// # Errors
///
/// - `EngineError::InvalidInput` if `points` is negative.
/// - `EngineError::Configuration` if `tiers` is empty or not ascending.
pub fn resolve_tier(tiers: &[TierDefinition], points: i64) -> EngineResult<TierProgress> {
    if points < 0 {
        return Err(EngineError::invalid(format!(
            "points {points} must not be negative"
        )));
    }
    let first = tiers
        .first()
        .ok_or_else(|| EngineError::config("no loyalty tiers configured"))?;

    let current = tiers.iter().fold(first, |current, tier| {
        if points >= tier.points_threshold {
            tier
        } else {
            current
        }
    });
    let next = tiers.iter().find(|tier| tier.points_threshold > points);

    let (points_to_next, progress_percent) = match next {
        None => (0, Decimal::ONE_HUNDRED),
        Some(next) => {
            let span = next.points_threshold - current.points_threshold;
            if span <= 0 {
                return Err(EngineError::config(format!(
                    "tier '{}' threshold is not above '{}'",
                    next.name, current.name
                )));
            }
            let earned = Decimal::from(points - current.points_threshold);
            let percent = round_half_up(earned / Decimal::from(span) * Decimal::ONE_HUNDRED, 2);
            (
                next.points_threshold - points,
                percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
            )
        }
    };

    Ok(TierProgress {
        points,
        current_tier: current.clone(),
        next_tier: next.cloned(),
        points_to_next,
        progress_percent,
    })
}

/// Loyalty progress for the rewards screen. Same as [`resolve_tier`].
///
/// # Errors
///
/// See [`resolve_tier`].
pub fn calculate_loyalty_progress(
    tiers: &[TierDefinition],
    points: i64,
) -> EngineResult<TierProgress> {
    resolve_tier(tiers, points)
}

/// Points still needed for every tier in the ladder.
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` if `points` is negative.
pub fn tier_gaps(tiers: &[TierDefinition], points: i64) -> EngineResult<Vec<TierGap>> {
    if points < 0 {
        return Err(EngineError::invalid(format!(
            "points {points} must not be negative"
        )));
    }

    Ok(tiers
        .iter()
        .map(|tier| TierGap {
            tier: tier.name.clone(),
            points_threshold: tier.points_threshold,
            points_needed: tier.points_threshold.saturating_sub(points).max(0),
            reached: points >= tier.points_threshold,
        })
        .collect())
}
