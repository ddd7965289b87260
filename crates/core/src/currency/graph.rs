//! Forward rate graph.

use std::collections::BTreeMap;
use std::str::FromStr;

use cards2cash_shared::Currency;
use cards2cash_shared::config::CurrencyPairConfig;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Forward exchange rates keyed by ordered `(from, to)` pair.
///
/// `1 from = rate to`. The reverse pair is a separate entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateGraph {
    pub(crate) rates: BTreeMap<(Currency, Currency), Decimal>,
}

impl RateGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a forward rate.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` if the rate is not positive, the
    /// pair is already present, or an identity pair has a rate other than 1.
    pub fn insert(&mut self, from: Currency, to: Currency, rate: Decimal) -> EngineResult<()> {
        validate_rate(from, to, rate)?;
        if self.rates.contains_key(&(from, to)) {
            return Err(EngineError::config(format!(
                "currency pair {from} -> {to} is configured twice"
            )));
        }
        self.rates.insert((from, to), rate);
        Ok(())
    }

    /// Builds and validates a graph from configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` for unknown currency codes or any
    /// rate rejected by [`RateGraph::insert`].
    pub fn from_config(pairs: &[CurrencyPairConfig]) -> EngineResult<Self> {
        let mut graph = Self::new();
        for pair in pairs {
            graph.insert(parse_code(&pair.from)?, parse_code(&pair.to)?, pair.rate)?;
        }
        Ok(graph)
    }

    /// Rate for `from -> to`. Identity pairs always resolve to 1.
    #[must_use]
    pub fn rate(&self, from: Currency, to: Currency) -> Option<Decimal> {
        if from == to {
            return Some(Decimal::ONE);
        }
        self.rates.get(&(from, to)).copied()
    }

    /// All configured pairs, sorted.
    pub fn pairs(&self) -> impl Iterator<Item = (Currency, Currency, Decimal)> + '_ {
        self.rates.iter().map(|(&(from, to), &rate)| (from, to, rate))
    }

    /// Number of configured pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no pair is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Re-checks every rate.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` for the first invalid rate.
    pub fn validate(&self) -> EngineResult<()> {
        self.pairs()
            .try_for_each(|(from, to, rate)| validate_rate(from, to, rate))
    }
}

fn validate_rate(from: Currency, to: Currency, rate: Decimal) -> EngineResult<()> {
    if rate <= Decimal::ZERO {
        return Err(EngineError::config(format!(
            "rate {from} -> {to} must be positive, got {rate}"
        )));
    }
    if from == to && rate != Decimal::ONE {
        return Err(EngineError::config(format!(
            "identity rate {from} -> {to} must be 1, got {rate}"
        )));
    }
    Ok(())
}

/// Parses a configured currency code.
pub(crate) fn parse_code(code: &str) -> EngineResult<Currency> {
    Currency::from_str(code).map_err(EngineError::Configuration)
}
