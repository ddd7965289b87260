//! Currency conversion over independently configured forward rates.
//!
//! Rates are not inverses of each other and are not consistent under
//! composition (GYD->USD->EUR need not equal GYD->EUR). Each ordered pair is
//! looked up as configured; nothing is derived.

pub mod conversion;
pub mod graph;
pub mod history;

#[cfg(test)]
mod props;

pub use conversion::{CurrencyConversion, convert_currency, quote_ladder, standard_quote_amounts};
pub use graph::RateGraph;
pub use history::{RateHistory, RatePoint, RateSummary};
