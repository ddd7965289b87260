//! Load-time validation for bracket tables.
//!
//! Tables are validated once when they are built. The resolver trusts them
//! afterwards and only guards against an empty table.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::rounding::round_money;

use super::types::{ConversionTable, RateBracket};

/// Validates the invariants of a bracket table.
///
/// - at least one bracket
/// - thresholds non-negative and strictly increasing
/// - rates positive and non-decreasing as the threshold grows
/// - fees non-negative
/// - tabulated `output_amount`/`fee` agree with `rate` at the threshold
///
/// # Errors
///
/// Returns `EngineError::Configuration` naming the first violation found.
pub fn validate_table(table: &ConversionTable) -> EngineResult<()> {
    let category = &table.category;

    if table.brackets.is_empty() {
        return Err(EngineError::config(format!(
            "table '{category}' has no brackets"
        )));
    }

    for (index, bracket) in table.brackets.iter().enumerate() {
        validate_row(category, index, bracket)?;
    }

    for (index, pair) in table.brackets.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.threshold <= prev.threshold {
            return Err(EngineError::config(format!(
                "table '{category}' row {}: threshold {} is not above {}",
                index + 1,
                next.threshold,
                prev.threshold
            )));
        }
        if next.rate < prev.rate {
            return Err(EngineError::config(format!(
                "table '{category}' row {}: rate {} is below the previous rate {}",
                index + 1,
                next.rate,
                prev.rate
            )));
        }
    }

    Ok(())
}

fn validate_row(category: &str, index: usize, bracket: &RateBracket) -> EngineResult<()> {
    if bracket.threshold < Decimal::ZERO {
        return Err(EngineError::config(format!(
            "table '{category}' row {index}: threshold {} is negative",
            bracket.threshold
        )));
    }
    if bracket.rate <= Decimal::ZERO {
        return Err(EngineError::config(format!(
            "table '{category}' row {index}: rate {} must be positive",
            bracket.rate
        )));
    }
    if bracket.fee < Decimal::ZERO {
        return Err(EngineError::config(format!(
            "table '{category}' row {index}: fee {} is negative",
            bracket.fee
        )));
    }

    let expected_output = bracket
        .threshold
        .checked_mul(bracket.rate)
        .map(round_money)
        .ok_or_else(|| {
            EngineError::config(format!(
                "table '{category}' row {index}: {} x {} is out of range",
                bracket.threshold, bracket.rate
            ))
        })?;
    if round_money(bracket.output_amount) != expected_output {
        return Err(EngineError::config(format!(
            "table '{category}' row {index}: output {} does not match {} x {}",
            bracket.output_amount, bracket.threshold, bracket.rate
        )));
    }
    if round_money(bracket.threshold - bracket.output_amount) != round_money(bracket.fee) {
        return Err(EngineError::config(format!(
            "table '{category}' row {index}: fee {} does not match {} - {}",
            bracket.fee, bracket.threshold, bracket.output_amount
        )));
    }

    Ok(())
}
