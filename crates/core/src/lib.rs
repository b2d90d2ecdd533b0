//! Core money logic for bigmoney.
//!
//! This crate contains pure money logic with ZERO I/O. Amounts are exact
//! decimals; nothing here touches floating point except the explicit
//! `Money::value_of` coercion.
//!
//! # Modules
//!
//! - `money` - The immutable `Money` value and its arithmetic
//! - `currency` - Rate table, conversion and allocation
//! - `format` - Output formatting strategies
//! - `context` - Settings bundle passed to callers explicitly

pub mod context;
pub mod currency;
pub mod format;
pub mod money;

pub use context::MoneyContext;
pub use currency::{AllocationUtil, RateTable, Ratios};
pub use format::{Formatter, SymbolFormatter, TemplateFormatter};
pub use money::{Money, MoneyOptions, Operand};

pub use bigmoney_shared::{AppConfig, CurrencyCode, MoneyError, MoneyResult};
