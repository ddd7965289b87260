//! Bracket table data types.

use cards2cash_shared::config::BracketConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::rounding::round_money;

use super::validation::validate_table;

/// One row of a tiered conversion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBracket {
    /// Minimum input amount at which this bracket applies.
    pub threshold: Decimal,
    /// Amount credited for exactly `threshold`. Reference only.
    pub output_amount: Decimal,
    /// Fee charged for exactly `threshold`. Reference only.
    pub fee: Decimal,
    /// Effective multiplier.
    pub rate: Decimal,
}

impl RateBracket {
    /// Creates a bracket from its tabulated values.
    #[must_use]
    pub const fn new(
        threshold: Decimal,
        output_amount: Decimal,
        fee: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            threshold,
            output_amount,
            fee,
            rate,
        }
    }

    /// Creates a bracket whose tabulated output and fee are derived from `rate`.
    #[cfg(test)]
    pub(crate) fn from_rate(threshold: Decimal, rate: Decimal) -> Self {
        let output_amount = round_money(threshold * rate);
        Self {
            threshold,
            output_amount,
            fee: threshold - output_amount,
            rate,
        }
    }
}

impl From<&BracketConfig> for RateBracket {
    fn from(row: &BracketConfig) -> Self {
        Self::new(row.threshold, row.output_amount, row.fee, row.rate)
    }
}

/// An ordered bracket table for one category (e.g. a carrier).
///
/// Immutable once built. Updating rates means building a new table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionTable {
    /// Category identifier, e.g. `"digicel"`.
    pub category: String,
    /// Brackets, ascending by threshold.
    pub brackets: Vec<RateBracket>,
}

impl ConversionTable {
    /// Builds a table and validates it.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` if the rows violate the table
    /// invariants.
    pub fn new(category: impl Into<String>, brackets: Vec<RateBracket>) -> EngineResult<Self> {
        let table = Self {
            category: category.into(),
            brackets,
        };
        validate_table(&table)?;
        Ok(table)
    }

    /// Builds and validates a table from configuration rows.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` if the rows are invalid.
    pub fn from_config(category: &str, rows: &[BracketConfig]) -> EngineResult<Self> {
        Self::new(category, rows.iter().map(RateBracket::from).collect())
    }

    /// Lowest bracket, if any.
    #[must_use]
    pub fn lowest(&self) -> Option<&RateBracket> {
        self.brackets.first()
    }

    /// Highest bracket, if any.
    #[must_use]
    pub fn highest(&self) -> Option<&RateBracket> {
        self.brackets.last()
    }

    /// Number of brackets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    /// Returns true if the table has no brackets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }
}
