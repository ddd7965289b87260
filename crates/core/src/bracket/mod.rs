//! Bracket tables and the bracket resolver.
//!
//! A table is an ascending list of `(threshold, rate)` rows. Resolution picks
//! the highest threshold not above the input and clamps inputs below the
//! lowest threshold to the first row.

pub mod resolver;
pub mod types;
pub mod validation;

#[cfg(test)]
mod props;

pub use resolver::resolve_bracket;
pub use types::{ConversionTable, RateBracket};
pub use validation::validate_table;
