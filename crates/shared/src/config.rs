//! Application configuration management.
//!
//! Rate tables, currency rates and loyalty tiers are static configuration:
//! read once at start-up, validated by the engine, never mutated afterwards.
//! Decimal values are written as strings in TOML so they never pass through
//! a float.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Prefix for environment overrides (`CARDS2CASH__LOGGING__FILTER=debug`).
const ENV_PREFIX: &str = "CARDS2CASH";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Rate and tier tables.
    pub rates: RatesConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rate and tier tables as written in configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatesConfig {
    /// Voucher conversion brackets keyed by carrier name.
    #[serde(default)]
    pub carriers: BTreeMap<String, Vec<BracketConfig>>,
    /// Independent forward currency rates.
    #[serde(default)]
    pub currency_pairs: Vec<CurrencyPairConfig>,
    /// Recorded daily rates per currency pair.
    #[serde(default)]
    pub rate_history: Vec<RateHistoryConfig>,
    /// Loyalty tiers, ascending by points threshold.
    #[serde(default)]
    pub tiers: Vec<TierConfig>,
}

/// One row of a voucher conversion table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BracketConfig {
    /// Minimum voucher amount for this bracket.
    pub threshold: Decimal,
    /// Digital amount credited at exactly `threshold`.
    pub output_amount: Decimal,
    /// Fee charged at exactly `threshold`.
    pub fee: Decimal,
    /// Effective multiplier.
    pub rate: Decimal,
}

/// Forward rate for an ordered currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyPairConfig {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// 1 `from` = `rate` `to`.
    pub rate: Decimal,
}

/// Recorded rates for one currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateHistoryConfig {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Dated observations, any order.
    pub points: Vec<RatePointConfig>,
}

/// A single dated rate observation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RatePointConfig {
    /// Observation date (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Rate on that date.
    pub rate: Decimal,
}

/// A loyalty tier definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TierConfig {
    /// Tier name (e.g. "Bronze").
    pub name: String,
    /// Points required to reach the tier.
    pub points_threshold: i64,
    /// Benefits, in display order.
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    /// Must name both the library crates and the `ratecheck` binary target.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "cards2cash=info,ratecheck=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Layers `config/default`, then `config/{RUN_MODE}`, then
    /// `CARDS2CASH__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(env_source())
            .build()?;

        config.try_deserialize()
    }

    /// Loads configuration from a single file, still honouring environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(env_source())
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from TOML text, still honouring environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .add_source(env_source())
            .build()?;

        config.try_deserialize()
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
