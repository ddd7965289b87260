//! Per-carrier conversion tables.

use std::collections::BTreeMap;

use cards2cash_shared::config::BracketConfig;
use rust_decimal::Decimal;

use crate::bracket::{ConversionTable, validate_table};
use crate::error::{EngineError, EngineResult};

/// Conversion tables keyed by carrier name.
///
/// Carrier names are matched case-insensitively (`"Digicel"` finds the
/// `digicel` table).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarrierTables {
    pub(crate) tables: BTreeMap<String, ConversionTable>,
}

impl CarrierTables {
    /// Creates an empty set of tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a carrier table, keyed by its category.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` if the table is invalid or the
    /// carrier already has a table.
    pub fn insert(&mut self, table: ConversionTable) -> EngineResult<()> {
        validate_carrier_table(&table)?;
        let key = carrier_key(&table.category);
        if key.is_empty() {
            return Err(EngineError::config("carrier name must not be blank"));
        }
        if self.tables.contains_key(&key) {
            return Err(EngineError::config(format!(
                "carrier '{key}' is configured twice"
            )));
        }
        self.tables.insert(key, table);
        Ok(())
    }

    /// Builds and validates carrier tables from configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` for the first invalid table.
    pub fn from_config(carriers: &BTreeMap<String, Vec<BracketConfig>>) -> EngineResult<Self> {
        let mut tables = Self::new();
        for (carrier, rows) in carriers {
            tables.insert(ConversionTable::from_config(carrier, rows)?)?;
        }
        Ok(tables)
    }

    /// Looks up the table for `carrier`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnknownCarrier` if no table is configured.
    pub fn get(&self, carrier: &str) -> EngineResult<&ConversionTable> {
        self.tables
            .get(&carrier_key(carrier))
            .ok_or_else(|| EngineError::UnknownCarrier(carrier.to_string()))
    }

    /// Carrier names, sorted.
    pub fn carriers(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// All tables, sorted by carrier.
    pub fn tables(&self) -> impl Iterator<Item = &ConversionTable> {
        self.tables.values()
    }

    /// Number of carriers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no carrier is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Re-checks every table.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` for the first invalid table.
    pub fn validate(&self) -> EngineResult<()> {
        self.tables.values().try_for_each(validate_carrier_table)
    }
}

/// Voucher conversions never credit more than the voucher is worth.
fn validate_carrier_table(table: &ConversionTable) -> EngineResult<()> {
    validate_table(table)?;
    if let Some(bracket) = table.brackets.iter().find(|b| b.rate > Decimal::ONE) {
        return Err(EngineError::config(format!(
            "carrier '{}': rate {} exceeds 1",
            table.category, bracket.rate
        )));
    }
    Ok(())
}

fn carrier_key(carrier: &str) -> String {
    carrier.trim().to_lowercase()
}
