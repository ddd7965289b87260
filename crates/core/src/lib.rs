//! Rate and tier resolution engine for Cards2Cash.
//!
//! Pure business logic with no web or database dependencies: callers hand in
//! amounts and points balances and get back raw numbers.
//!
//! # Modules
//!
//! - `bracket` - Ascending threshold tables and the bracket resolver
//! - `voucher` - Carrier voucher to digital balance conversion
//! - `currency` - Forward currency rates, quotes and rate history
//! - `loyalty` - Tier resolution, progress and reward redemption
//! - `engine` - Validated rate book and the hot-swappable engine facade
//! - `reference` - Published reference rates and tiers

pub mod bracket;
pub mod currency;
pub mod engine;
pub mod error;
pub mod loyalty;
pub mod reference;
pub mod rounding;
pub mod voucher;

pub use bracket::{ConversionTable, RateBracket, resolve_bracket};
pub use currency::{CurrencyConversion, RateGraph, RateHistory, convert_currency};
pub use engine::{RateBook, RateEngine};
pub use error::{EngineError, EngineResult};
pub use loyalty::{
    LoyaltyAccount, TierDefinition, TierProgress, calculate_loyalty_progress, resolve_tier,
};
pub use voucher::{CarrierTables, VoucherConversion, convert_voucher};
