//! Money rounding.
//!
//! Engine outputs are rounded half-up to 2 decimal places. Inputs are never
//! negative, so `MidpointAwayFromZero` is exactly half-up here.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Decimal places for every money amount the engine returns.
pub const MONEY_DP: u32 = 2;

/// Rounds `value` half-up to `decimal_places`.
#[must_use]
pub fn round_half_up(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a money amount half-up to [`MONEY_DP`] places.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    round_half_up(value, MONEY_DP)
}
