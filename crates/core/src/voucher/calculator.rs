//! Voucher-to-digital-balance calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bracket::resolve_bracket;
use crate::error::{EngineError, EngineResult};
use crate::rounding::round_money;

use super::carriers::CarrierTables;

/// Result of converting a voucher into digital balance.
///
/// Raw numbers only; currency formatting belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherConversion {
    /// Voucher face value (GYD).
    pub voucher_amount: Decimal,
    /// Amount credited (GYD), 2dp half-up.
    pub digital_amount: Decimal,
    /// `voucher_amount - digital_amount`, 2dp half-up.
    pub fee: Decimal,
    /// Rate of the bracket that applied.
    pub rate: Decimal,
}

/// Converts a carrier voucher into digital balance.
///
/// The credited amount is always derived from the bracket rate, so amounts
/// between tabulated rows are handled the same way as amounts on a row.
///
/// # Errors
///
/// - `EngineError::UnknownCarrier` if `carrier` has no table.
/// - `EngineError::InvalidInput` if `voucher_amount` is negative or out of
///   range.
pub fn convert_voucher(
    tables: &CarrierTables,
    carrier: &str,
    voucher_amount: Decimal,
) -> EngineResult<VoucherConversion> {
    let table = tables.get(carrier)?;
    let bracket = resolve_bracket(table, voucher_amount)?;

    let digital_amount = voucher_amount
        .checked_mul(bracket.rate)
        .map(round_money)
        .ok_or_else(|| EngineError::invalid(format!("amount {voucher_amount} out of range")))?;
    let fee = round_money(voucher_amount - digital_amount);

    Ok(VoucherConversion {
        voucher_amount,
        digital_amount,
        fee,
        rate: bracket.rate,
    })
}
