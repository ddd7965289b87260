//! The rate book: every table the engine serves, validated together.

use std::collections::BTreeMap;

use cards2cash_shared::{Currency, RatesConfig};
use once_cell::sync::Lazy;
use tracing::{info, warn};

use crate::currency::{RateGraph, RateHistory};
use crate::error::{EngineError, EngineResult};
use crate::loyalty::{TierDefinition, validate_tiers};
use crate::reference;
use crate::voucher::CarrierTables;

static REFERENCE_BOOK: Lazy<RateBook> = Lazy::new(|| RateBook {
    carriers: reference::carrier_tables(),
    rates: reference::rate_graph(),
    histories: history_map(vec![reference::gyd_usd_history()]),
    tiers: reference::tiers(),
});

/// Immutable set of carrier tables, currency rates, rate histories and tiers.
///
/// A book is only ever built whole and validated; to change rates, build a
/// new book and publish it through [`crate::engine::RateEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateBook {
    carriers: CarrierTables,
    rates: RateGraph,
    histories: BTreeMap<(Currency, Currency), RateHistory>,
    tiers: Vec<TierDefinition>,
}

impl RateBook {
    /// Assembles and validates a book.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` if any part is invalid, no carrier
    /// or currency pair is configured, or two histories cover the same pair.
    pub fn new(
        carriers: CarrierTables,
        rates: RateGraph,
        histories: Vec<RateHistory>,
        tiers: Vec<TierDefinition>,
    ) -> EngineResult<Self> {
        let pair_count = histories.len();
        let book = Self {
            carriers,
            rates,
            histories: history_map(histories),
            tiers,
        };
        if book.histories.len() != pair_count {
            return Err(EngineError::config(
                "a currency pair has more than one rate history",
            ));
        }
        book.validate()?;
        Ok(book)
    }

    /// Builds a book from configuration, failing fast on the first problem.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` describing the first invalid
    /// table, rate, history or tier.
    pub fn from_config(config: &RatesConfig) -> EngineResult<Self> {
        let result = Self::build_from_config(config);
        match &result {
            Ok(book) => info!(
                carriers = book.carriers.len(),
                currency_pairs = book.rates.len(),
                histories = book.histories.len(),
                tiers = book.tiers.len(),
                "Rate book built"
            ),
            Err(e) => warn!(error = %e, "Rejected rate configuration"),
        }
        result
    }

    fn build_from_config(config: &RatesConfig) -> EngineResult<Self> {
        let carriers = CarrierTables::from_config(&config.carriers)?;
        let rates = RateGraph::from_config(&config.currency_pairs)?;
        let histories = config
            .rate_history
            .iter()
            .map(RateHistory::from_config)
            .collect::<EngineResult<Vec<_>>>()?;
        let tiers = config.tiers.iter().map(TierDefinition::from).collect();
        Self::new(carriers, rates, histories, tiers)
    }

    /// The published Cards2Cash reference book.
    #[must_use]
    pub fn reference() -> Self {
        REFERENCE_BOOK.clone()
    }

    /// Re-checks every invariant of the book.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` for the first violation.
    pub fn validate(&self) -> EngineResult<()> {
        if self.carriers.is_empty() {
            return Err(EngineError::config("no carrier tables configured"));
        }
        if self.rates.is_empty() {
            return Err(EngineError::config("no currency pairs configured"));
        }
        self.carriers.validate()?;
        self.rates.validate()?;
        validate_tiers(&self.tiers)
    }

    /// Voucher tables by carrier.
    #[must_use]
    pub fn carriers(&self) -> &CarrierTables {
        &self.carriers
    }

    /// Forward currency rates.
    #[must_use]
    pub fn rates(&self) -> &RateGraph {
        &self.rates
    }

    /// Loyalty tiers, ascending.
    #[must_use]
    pub fn tiers(&self) -> &[TierDefinition] {
        &self.tiers
    }

    /// Recorded history for an ordered pair.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnsupportedCurrencyPair` if none is recorded.
    pub fn history(&self, from: Currency, to: Currency) -> EngineResult<&RateHistory> {
        self.histories
            .get(&(from, to))
            .ok_or_else(|| EngineError::UnsupportedCurrencyPair {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Pairs that have a recorded history.
    pub fn history_pairs(&self) -> impl Iterator<Item = (Currency, Currency)> + '_ {
        self.histories.keys().copied()
    }
}

fn history_map(histories: Vec<RateHistory>) -> BTreeMap<(Currency, Currency), RateHistory> {
    histories
        .into_iter()
        .map(|h| ((h.from_currency(), h.to_currency()), h))
        .collect()
}
