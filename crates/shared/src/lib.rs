//! Shared types, errors, and configuration for bigmoney.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Currency codes
//! - The money error type
//! - Settings loading (base currency, rate table, output template)

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::CurrencyCode;
