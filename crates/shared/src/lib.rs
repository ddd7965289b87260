//! Shared types, errors, and configuration for Cards2Cash.
//!
//! This crate provides common types used across all other crates:
//! - Money and currency types with decimal precision
//! - Application-wide error types
//! - Configuration management (rate tables, tiers, logging)

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LoggingConfig, RatesConfig};
pub use error::AppError;
pub use types::{Currency, Money};
