//! Recorded exchange-rate history for a currency pair.

use cards2cash_shared::Currency;
use cards2cash_shared::config::RateHistoryConfig;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::rounding::round_half_up;

use super::graph::parse_code;

/// A dated rate observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Rate on that date.
    pub rate: Decimal,
}

/// Figures shown on the currency details screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSummary {
    /// Most recent rate.
    pub current: Decimal,
    /// Lowest recorded rate.
    pub low: Decimal,
    /// Highest recorded rate.
    pub high: Decimal,
    /// Mean of recorded rates, 4dp half-up.
    pub average: Decimal,
    /// `current - earliest`.
    pub change: Decimal,
    /// `change / earliest * 100`, 2dp half-up.
    pub change_percent: Decimal,
}

/// Rate observations for one ordered pair, ascending by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateHistory {
    pub(crate) from: Currency,
    pub(crate) to: Currency,
    pub(crate) points: Vec<RatePoint>,
}

impl RateHistory {
    /// Builds a history, sorting the points by date.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` if there are no points, two
    /// points share a date, or a rate is not positive.
    pub fn new(from: Currency, to: Currency, mut points: Vec<RatePoint>) -> EngineResult<Self> {
        if points.is_empty() {
            return Err(EngineError::config(format!(
                "rate history {from} -> {to} has no points"
            )));
        }
        if let Some(point) = points.iter().find(|p| p.rate <= Decimal::ZERO) {
            return Err(EngineError::config(format!(
                "rate history {from} -> {to}: rate on {} must be positive",
                point.date
            )));
        }

        points.sort_by_key(|p| p.date);
        if let Some(pair) = points.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(EngineError::config(format!(
                "rate history {from} -> {to}: {} recorded twice",
                pair[0].date
            )));
        }

        Ok(Self { from, to, points })
    }

    /// Builds and validates a history from configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` for unknown codes or invalid points.
    pub fn from_config(config: &RateHistoryConfig) -> EngineResult<Self> {
        let points = config
            .points
            .iter()
            .map(|p| RatePoint {
                date: p.date,
                rate: p.rate,
            })
            .collect();
        Self::new(parse_code(&config.from)?, parse_code(&config.to)?, points)
    }

    /// Source currency.
    #[must_use]
    pub const fn from_currency(&self) -> Currency {
        self.from
    }

    /// Target currency.
    #[must_use]
    pub const fn to_currency(&self) -> Currency {
        self.to
    }

    /// Observations, ascending by date.
    #[must_use]
    pub fn points(&self) -> &[RatePoint] {
        &self.points
    }

    /// Rate in effect on `date`: the latest observation on or before it.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::RateUnavailable` if `date` precedes every
    /// observation.
    pub fn rate_on(&self, date: NaiveDate) -> EngineResult<Decimal> {
        let idx = self.points.partition_point(|p| p.date <= date);
        idx.checked_sub(1)
            .map(|i| self.points[i].rate)
            .ok_or_else(|| EngineError::RateUnavailable {
                from: self.from.to_string(),
                to: self.to.to_string(),
                date,
            })
    }

    /// Summary statistics over all observations.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` if the history is empty or its
    /// rates are too large to summarise.
    pub fn summary(&self) -> EngineResult<RateSummary> {
        let (Some(earliest), Some(latest)) = (self.points.first(), self.points.last()) else {
            return Err(EngineError::config(format!(
                "rate history {} -> {} has no points",
                self.from, self.to
            )));
        };

        let mut low = earliest.rate;
        let mut high = earliest.rate;
        let mut total = Decimal::ZERO;
        for point in &self.points {
            low = low.min(point.rate);
            high = high.max(point.rate);
            total = total
                .checked_add(point.rate)
                .ok_or_else(|| self.out_of_range())?;
        }

        let average = round_half_up(total / Decimal::from(self.points.len()), 4);
        let change = latest.rate - earliest.rate;
        let change_percent = if earliest.rate.is_zero() {
            Decimal::ZERO
        } else {
            change
                .checked_div(earliest.rate)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .map(|percent| round_half_up(percent, 2))
                .ok_or_else(|| self.out_of_range())?
        };

        Ok(RateSummary {
            current: latest.rate,
            low,
            high,
            average,
            change,
            change_percent,
        })
    }

    fn out_of_range(&self) -> EngineError {
        EngineError::config(format!(
            "rate history {} -> {} is out of range",
            self.from, self.to
        ))
    }
}
