//! Published Cards2Cash reference rates and tiers.
//!
//! Mirrors `config/default.toml`. Values are written with `Decimal::new` so
//! they never pass through a float.

use cards2cash_shared::Currency;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::bracket::{ConversionTable, RateBracket};
use crate::currency::{RateGraph, RateHistory, RatePoint};
use crate::loyalty::{RewardOffer, TierDefinition};
use crate::voucher::CarrierTables;

fn bracket(threshold: i64, output: i64, fee: i64, rate: Decimal) -> RateBracket {
    RateBracket::new(
        Decimal::from(threshold),
        Decimal::from(output),
        Decimal::from(fee),
        rate,
    )
}

/// Digicel voucher brackets.
#[must_use]
pub fn digicel_table() -> ConversionTable {
    ConversionTable {
        category: "digicel".to_string(),
        brackets: vec![
            bracket(500, 475, 25, Decimal::new(95, 2)),
            bracket(1_000, 960, 40, Decimal::new(96, 2)),
            bracket(2_000, 1_940, 60, Decimal::new(97, 2)),
            bracket(5_000, 4_900, 100, Decimal::new(98, 2)),
            bracket(10_000, 9_850, 150, Decimal::new(985, 3)),
        ],
    }
}

/// GTT voucher brackets.
#[must_use]
pub fn gtt_table() -> ConversionTable {
    ConversionTable {
        category: "gtt".to_string(),
        brackets: vec![
            bracket(500, 480, 20, Decimal::new(96, 2)),
            bracket(1_000, 970, 30, Decimal::new(97, 2)),
            bracket(2_000, 1_950, 50, Decimal::new(975, 3)),
            bracket(5_000, 4_925, 75, Decimal::new(985, 3)),
            bracket(10_000, 9_900, 100, Decimal::new(99, 2)),
        ],
    }
}

/// Both carrier tables.
#[must_use]
pub fn carrier_tables() -> CarrierTables {
    let tables = [digicel_table(), gtt_table()]
        .into_iter()
        .map(|table| (table.category.clone(), table))
        .collect();
    CarrierTables { tables }
}

/// Forward rates as `(from, to, rate)`, including identity pairs.
#[must_use]
pub fn currency_rates() -> Vec<(Currency, Currency, Decimal)> {
    use Currency::{Cad, Eur, Gbp, Gyd, Usd};

    vec![
        (Gyd, Gyd, Decimal::ONE),
        (Gyd, Usd, Decimal::new(48, 4)),
        (Gyd, Eur, Decimal::new(44, 4)),
        (Gyd, Gbp, Decimal::new(38, 4)),
        (Gyd, Cad, Decimal::new(65, 4)),
        (Usd, Usd, Decimal::ONE),
        (Usd, Gyd, Decimal::new(20_865, 2)),
        (Usd, Eur, Decimal::new(92, 2)),
        (Usd, Gbp, Decimal::new(79, 2)),
        (Usd, Cad, Decimal::new(136, 2)),
        (Eur, Eur, Decimal::ONE),
        (Eur, Gyd, Decimal::new(22_679, 2)),
        (Eur, Usd, Decimal::new(109, 2)),
        (Eur, Gbp, Decimal::new(86, 2)),
        (Eur, Cad, Decimal::new(148, 2)),
        (Gbp, Gbp, Decimal::ONE),
        (Gbp, Gyd, Decimal::new(26_487, 2)),
        (Gbp, Usd, Decimal::new(127, 2)),
        (Gbp, Eur, Decimal::new(117, 2)),
        (Gbp, Cad, Decimal::new(173, 2)),
        (Cad, Cad, Decimal::ONE),
        (Cad, Gyd, Decimal::new(1_531, 1)),
        (Cad, Usd, Decimal::new(73, 2)),
        (Cad, Eur, Decimal::new(68, 2)),
        (Cad, Gbp, Decimal::new(58, 2)),
    ]
}

/// Forward rate graph built from [`currency_rates`].
#[must_use]
pub fn rate_graph() -> RateGraph {
    let rates = currency_rates()
        .into_iter()
        .map(|(from, to, rate)| ((from, to), rate))
        .collect();
    RateGraph { rates }
}

/// Seven days of GYD -> USD rates.
#[must_use]
pub fn gyd_usd_history() -> RateHistory {
    let rates = [48, 47, 46, 48, 49, 47, 48];
    let points = (4..)
        .zip(rates)
        .filter_map(|(day, rate)| {
            NaiveDate::from_ymd_opt(2025, 3, day).map(|date| RatePoint {
                date,
                rate: Decimal::new(rate, 4),
            })
        })
        .collect();
    RateHistory {
        from: Currency::Gyd,
        to: Currency::Usd,
        points,
    }
}

fn benefits(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Bronze, Silver and Gold.
#[must_use]
pub fn tiers() -> Vec<TierDefinition> {
    vec![
        TierDefinition::new(
            "Bronze",
            0,
            benefits(&[
                "Basic rewards catalog access",
                "Earn 1 point per GYD 100 spent",
                "Monthly newsletter with exclusive offers",
                "Birthday reward (100 bonus points)",
            ]),
        ),
        TierDefinition::new(
            "Silver",
            2_500,
            benefits(&[
                "All Bronze benefits",
                "Earn 1.5 points per GYD 100 spent",
                "Priority customer support",
                "Quarterly bonus rewards",
                "Early access to new features",
            ]),
        ),
        TierDefinition::new(
            "Gold",
            5_000,
            benefits(&[
                "All Silver benefits",
                "Earn 2 points per GYD 100 spent",
                "Dedicated account manager",
                "Monthly bonus rewards",
                "Exclusive Gold-only offers",
                "Fee-free currency conversions",
            ]),
        ),
    ]
}

/// Rewards catalog.
#[must_use]
pub fn reward_offers() -> Vec<RewardOffer> {
    [
        (1, "15% off at FashionHub", 1_000),
        (2, "Airport Lounge Access", 2_500),
        (3, "Buy 1 Get 1 Free at DineDelight", 750),
    ]
    .into_iter()
    .map(|(id, title, points_cost)| RewardOffer {
        id,
        title: title.to_string(),
        points_cost,
    })
    .collect()
}
