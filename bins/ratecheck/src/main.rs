//! Cards2Cash rate check
//!
//! Loads the layered configuration, builds the rate book and reports what
//! would be served. Exits non-zero if the configuration would be rejected,
//! so it can gate a deploy.

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cards2cash_core::RateBook;
use cards2cash_shared::{AppConfig, AppError, LoggingConfig};

/// Filter from `RUST_LOG`, falling back to the configured directive.
fn log_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter))
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = log_filter(logging);
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let book = match RateBook::from_config(&config.rates) {
        Ok(book) => book,
        Err(e) => {
            let app: AppError = e.into();
            error!(code = app.error_code(), error = %app, "Rate configuration rejected");
            return Err(app.into());
        }
    };

    for table in book.carriers().tables() {
        if let (Some(lowest), Some(highest)) = (table.lowest(), table.highest()) {
            info!(
                carrier = %table.category,
                brackets = table.len(),
                lowest_rate = %lowest.rate,
                highest_rate = %highest.rate,
                "Carrier table"
            );
        }
    }
    for (from, to, rate) in book.rates().pairs() {
        info!(%from, %to, %rate, "Currency pair");
    }
    for (from, to) in book.history_pairs() {
        if let Ok(summary) = book.history(from, to).and_then(|h| h.summary()) {
            info!(
                %from,
                %to,
                current = %summary.current,
                average = %summary.average,
                change_percent = %summary.change_percent,
                "Rate history"
            );
        }
    }
    for tier in book.tiers() {
        info!(
            tier = %tier.name,
            points_threshold = tier.points_threshold,
            benefits = tier.benefits.len(),
            "Loyalty tier"
        );
    }

    info!("Rate configuration OK");
    Ok(())
}
