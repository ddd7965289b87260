//! Currency conversion.

use cards2cash_shared::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::rounding::round_money;

use super::graph::RateGraph;

/// Result of a currency conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConversion {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// Amount in the source currency.
    pub amount: Decimal,
    /// Amount in the target currency, 2dp half-up.
    pub converted_amount: Decimal,
    /// Rate applied (1 `from` = `rate` `to`).
    pub rate: Decimal,
}

impl CurrencyConversion {
    /// The input amount tagged with its currency.
    #[must_use]
    pub const fn source(&self) -> Money {
        Money::new(self.amount, self.from)
    }

    /// The converted amount tagged with its currency.
    #[must_use]
    pub const fn target(&self) -> Money {
        Money::new(self.converted_amount, self.to)
    }
}

/// Amounts shown on the quick-conversion ladder.
#[must_use]
pub fn standard_quote_amounts() -> [Decimal; 4] {
    [
        Decimal::from(1_000),
        Decimal::from(5_000),
        Decimal::from(10_000),
        Decimal::from(50_000),
    ]
}

/// Converts `amount` from one currency to another.
///
/// Uses the configured forward rate for the ordered pair as-is. The reverse
/// conversion uses its own configured rate, so converting there and back does
/// not in general return the starting amount.
///
/// # Errors
///
/// - `EngineError::UnsupportedCurrencyPair` if the pair has no rate.
/// - `EngineError::InvalidInput` if `amount` is negative or too large to
///   convert.
pub fn convert_currency(
    graph: &RateGraph,
    from: Currency,
    to: Currency,
    amount: Decimal,
) -> EngineResult<CurrencyConversion> {
    let rate = graph
        .rate(from, to)
        .ok_or_else(|| EngineError::UnsupportedCurrencyPair {
            from: from.to_string(),
            to: to.to_string(),
        })?;

    if amount < Decimal::ZERO {
        return Err(EngineError::invalid(format!(
            "amount {amount} must not be negative"
        )));
    }

    let converted = amount.checked_mul(rate).ok_or_else(|| {
        EngineError::invalid(format!("amount {amount} out of range for {from} -> {to}"))
    })?;

    Ok(CurrencyConversion {
        from,
        to,
        amount,
        converted_amount: round_money(converted),
        rate,
    })
}

/// Converts each of `amounts`, in order.
///
/// # Errors
///
/// Fails on the first amount [`convert_currency`] rejects.
pub fn quote_ladder(
    graph: &RateGraph,
    from: Currency,
    to: Currency,
    amounts: &[Decimal],
) -> EngineResult<Vec<CurrencyConversion>> {
    amounts
        .iter()
        .map(|&amount| convert_currency(graph, from, to, amount))
        .collect()
}
