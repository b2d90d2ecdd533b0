//! Money value with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! `Money` wraps `rust_decimal::Decimal` and keeps full precision until an
//! explicit `round`. Display output is rounded to 2 decimal places without
//! touching the stored amount.

mod arithmetic;
mod operand;


pub use operand::Operand;

use std::str::FromStr;

use bigmoney_shared::{CurrencyCode, MoneyError, MoneyResult};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Decimal places used by `rounded`, `value_of` and `Display`.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Rounding used for display and for `Money::round`.
pub const DEFAULT_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Per-value options carried unchanged through every derived value.
///
/// Money operations never look inside `extra`; it is there for the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoneyOptions {
    /// Currency used when a value is built without an explicit code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyCode>,
    /// Free-form caller data.
    #[serde(default, flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MoneyOptions {
    /// Options with a default currency.
    #[must_use]
    pub fn with_currency(currency: CurrencyCode) -> Self {
        Self {
            currency: Some(currency),
            extra: serde_json::Map::new(),
        }
    }

    /// Adds a free-form entry, builder style.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Returns true if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currency.is_none() && self.extra.is_empty()
    }
}

/// An immutable monetary amount with currency.
///
/// Every operation returns a new value carrying this value's currency and
/// options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: CurrencyCode,
    #[serde(default, skip_serializing_if = "MoneyOptions::is_empty")]
    options: MoneyOptions,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self::with_options(amount, currency, MoneyOptions::default())
    }

    /// Creates a new Money instance with options.
    #[must_use]
    pub fn with_options(amount: Decimal, currency: CurrencyCode, options: MoneyOptions) -> Self {
        Self {
            amount,
            currency,
            options,
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Parses an amount written in plain or scientific notation.
    pub fn parse(value: &str, currency: CurrencyCode) -> MoneyResult<Self> {
        Ok(Self::new(parse_decimal(value)?, currency))
    }

    /// The exact, unrounded amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency code.
    #[must_use]
    pub const fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// The options bag.
    #[must_use]
    pub const fn options(&self) -> &MoneyOptions {
        &self.options
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns true if the amount is strictly above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Amount rounded for display, trailing zeros stripped.
    ///
    /// `134.8500001` gives `134.85`, `100.00` gives `100`.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, DEFAULT_ROUNDING)
            .normalize()
    }

    /// Display-rounded amount as a float, for numeric interop only.
    #[must_use]
    pub fn value_of(&self) -> f64 {
        self.rounded().to_f64().unwrap_or_default()
    }

    /// Same currency and options, new amount.
    pub(crate) fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            amount,
            currency: self.currency.clone(),
            options: self.options.clone(),
        }
    }

    /// Same amount and options, new currency.
    pub(crate) fn retag(&self, amount: Decimal, currency: CurrencyCode) -> Self {
        Self {
            amount,
            currency,
            options: self.options.clone(),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

/// Parses a decimal in plain (`"12.50"`) or scientific (`"1.25e1"`) notation.
pub fn parse_decimal(value: &str) -> MoneyResult<Decimal> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| MoneyError::InvalidNumber(value.to_string()))
}
