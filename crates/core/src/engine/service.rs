//! Engine facade over a hot-swappable rate book.
//!
//! Every call takes a snapshot of the current book and computes against it,
//! so a request never sees half of one book and half of another. Reloading
//! builds and validates a new book before it becomes visible.

use std::sync::Arc;

use cards2cash_shared::{Currency, RatesConfig};
use chrono::NaiveDate;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::currency::{
    CurrencyConversion, RateSummary, convert_currency, quote_ladder, standard_quote_amounts,
};
use crate::error::{EngineError, EngineResult};
use crate::loyalty::{
    LoyaltyAccount, RedemptionQuote, RewardOffer, TierGap, TierProgress,
    calculate_loyalty_progress, quote_redemption, tier_gaps,
};
use crate::voucher::{VoucherConversion, convert_voucher};

use super::book::RateBook;

/// Rate and tier resolution engine.
///
/// Shareable across threads; wrap in an `Arc` to hand to request handlers.
#[derive(Debug)]
pub struct RateEngine {
    book: RwLock<Arc<RateBook>>,
}

impl RateEngine {
    /// Creates an engine serving `book`.
    #[must_use]
    pub fn new(book: RateBook) -> Self {
        Self {
            book: RwLock::new(Arc::new(book)),
        }
    }

    /// Builds an engine from configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` if the configuration is invalid.
    pub fn from_config(config: &RatesConfig) -> EngineResult<Self> {
        RateBook::from_config(config).map(Self::new)
    }

    /// The book currently being served.
    #[must_use]
    pub fn snapshot(&self) -> Arc<RateBook> {
        Arc::clone(&self.book.read())
    }

    /// Replaces the served book, returning the previous one.
    pub fn publish(&self, book: RateBook) -> Arc<RateBook> {
        let next = Arc::new(book);
        std::mem::replace(&mut *self.book.write(), next)
    }

    /// Rebuilds the book from `config` and publishes it.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` if the new configuration is
    /// invalid. The previous book keeps being served.
    pub fn reload(&self, config: &RatesConfig) -> EngineResult<()> {
        match RateBook::from_config(config) {
            Ok(book) => {
                self.publish(book);
                info!("Published reloaded rate book");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Reload rejected, keeping current rate book");
                Err(e)
            }
        }
    }

    /// Converts a carrier voucher into digital balance.
    ///
    /// # Errors
    ///
    /// See [`convert_voucher`].
    pub fn convert_voucher(
        &self,
        carrier: &str,
        voucher_amount: Decimal,
    ) -> EngineResult<VoucherConversion> {
        convert_voucher(self.snapshot().carriers(), carrier, voucher_amount)
    }

    /// Converts an amount between currencies.
    ///
    /// # Errors
    ///
    /// See [`convert_currency`].
    pub fn convert_currency(
        &self,
        from: Currency,
        to: Currency,
        amount: Decimal,
    ) -> EngineResult<CurrencyConversion> {
        convert_currency(self.snapshot().rates(), from, to, amount)
    }

    /// Converts an amount between currencies given as ISO codes.
    ///
    /// # Errors
    ///
    /// - `EngineError::UnsupportedCurrencyPair` if either code is unknown or
    ///   the pair has no rate.
    /// - `EngineError::InvalidInput` if `amount` is negative.
    pub fn convert_currency_codes(
        &self,
        from: &str,
        to: &str,
        amount: Decimal,
    ) -> EngineResult<CurrencyConversion> {
        match (from.parse::<Currency>(), to.parse::<Currency>()) {
            (Ok(from), Ok(to)) => self.convert_currency(from, to, amount),
            _ => Err(EngineError::UnsupportedCurrencyPair {
                from: from.trim().to_uppercase(),
                to: to.trim().to_uppercase(),
            }),
        }
    }

    /// Quick-conversion ladder for the standard amounts.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnsupportedCurrencyPair` if the pair has no rate.
    pub fn quote_ladder(
        &self,
        from: Currency,
        to: Currency,
    ) -> EngineResult<Vec<CurrencyConversion>> {
        quote_ladder(self.snapshot().rates(), from, to, &standard_quote_amounts())
    }

    /// Tier progress for an account.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if the balance is negative.
    pub fn loyalty_progress(&self, account: LoyaltyAccount) -> EngineResult<TierProgress> {
        calculate_loyalty_progress(self.snapshot().tiers(), account.current_points)
    }

    /// Points still needed for every tier.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if `points` is negative.
    pub fn tier_gaps(&self, points: i64) -> EngineResult<Vec<TierGap>> {
        tier_gaps(self.snapshot().tiers(), points)
    }

    /// Quotes redeeming an offer.
    ///
    /// # Errors
    ///
    /// See [`quote_redemption`].
    pub fn quote_redemption(
        &self,
        points: i64,
        offer: &RewardOffer,
    ) -> EngineResult<RedemptionQuote> {
        quote_redemption(self.snapshot().tiers(), points, offer)
    }

    /// Recorded rate for a pair on `date`, or the latest one before it.
    ///
    /// # Errors
    ///
    /// - `EngineError::UnsupportedCurrencyPair` if the pair has no history.
    /// - `EngineError::RateUnavailable` if nothing is recorded by `date`.
    pub fn rate_on(
        &self,
        from: Currency,
        to: Currency,
        date: NaiveDate,
    ) -> EngineResult<Decimal> {
        self.snapshot().history(from, to)?.rate_on(date)
    }

    /// Summary of the recorded history for a pair.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnsupportedCurrencyPair` if the pair has no history.
    pub fn rate_summary(&self, from: Currency, to: Currency) -> EngineResult<RateSummary> {
        self.snapshot().history(from, to)?.summary()
    }
}

impl Default for RateEngine {
    fn default() -> Self {
        Self::new(RateBook::reference())
    }
}
