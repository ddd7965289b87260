//! Bracket resolution.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{ConversionTable, RateBracket};

/// Finds the bracket that applies to `amount`.
///
/// Scans from the highest threshold down and returns the first bracket whose
/// threshold is `<= amount`, so an amount exactly on a threshold gets that
/// threshold's bracket. Amounts below every threshold are clamped to the
/// lowest bracket rather than rejected.
///
/// # Errors
///
/// - `EngineError::InvalidInput` if `amount` is negative.
/// - `EngineError::Configuration` if the table is empty.
pub fn resolve_bracket(table: &ConversionTable, amount: Decimal) -> EngineResult<&RateBracket> {
    if amount < Decimal::ZERO {
        return Err(EngineError::invalid(format!(
            "amount {amount} must not be negative"
        )));
    }

    let lowest = table.lowest().ok_or_else(|| {
        EngineError::config(format!("table '{}' has no brackets", table.category))
    })?;

    Ok(table
        .brackets
        .iter()
        .rev()
        .find(|bracket| bracket.threshold <= amount)
        .unwrap_or(lowest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), dec!(0.95))]
    #[case(dec!(100), dec!(0.95))]
    #[case(dec!(499.99), dec!(0.95))]
    #[case(dec!(500), dec!(0.95))]
    #[case(dec!(999), dec!(0.95))]
    #[case(dec!(1000), dec!(0.96))]
    #[case(dec!(1999.99), dec!(0.96))]
    #[case(dec!(2000), dec!(0.97))]
    #[case(dec!(4999), dec!(0.97))]
    #[case(dec!(5000), dec!(0.98))]
    #[case(dec!(10000), dec!(0.985))]
    #[case(dec!(250000), dec!(0.985))]
    fn test_digicel_resolution(#[case] amount: Decimal, #[case] rate: Decimal) {
        let table = reference::digicel_table();
        assert_eq!(resolve_bracket(&table, amount).unwrap().rate, rate);
    }

    #[test]
    fn test_below_lowest_threshold_clamps_to_first_bracket() {
        let table = reference::digicel_table();
        let bracket = resolve_bracket(&table, dec!(100)).unwrap();
        assert_eq!(bracket, &table.brackets[0]);
        assert_eq!(bracket.threshold, dec!(500));
        assert_eq!(bracket.rate, dec!(0.95));
    }

    #[test]
    fn test_exact_match_wins() {
        let table = reference::digicel_table();
        let bracket = resolve_bracket(&table, dec!(5000)).unwrap();
        assert_eq!(bracket.threshold, dec!(5000));
        assert_eq!(bracket.rate, dec!(0.98));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let table = reference::digicel_table();
        assert!(matches!(
            resolve_bracket(&table, dec!(-1)),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_table_is_configuration_error() {
        let table = ConversionTable {
            category: "empty".to_string(),
            brackets: vec![],
        };
        assert!(matches!(
            resolve_bracket(&table, dec!(100)),
            Err(EngineError::Configuration(_))
        ));
    }

    #[test]
    fn test_negative_amount_checked_before_empty_table() {
        let table = ConversionTable {
            category: "empty".to_string(),
            brackets: vec![],
        };
        assert!(matches!(
            resolve_bracket(&table, dec!(-5)),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_gtt_resolution() {
        let table = reference::gtt_table();
        assert_eq!(resolve_bracket(&table, dec!(2500)).unwrap().rate, dec!(0.975));
        assert_eq!(resolve_bracket(&table, dec!(10000)).unwrap().rate, dec!(0.99));
    }
}
