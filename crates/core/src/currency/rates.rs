//! Exchange rate table.
//!
//! Every rate is quoted against one base currency: `rates[X]` is how many
//! units of `X` one unit of base buys. The base itself is always rate 1.

use std::collections::HashMap;

use bigmoney_shared::{AppConfig, CurrencyCode, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Rates of every known currency against a single base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    base: CurrencyCode,
    rates: HashMap<CurrencyCode, Decimal>,
}

impl RateTable {
    /// Creates an empty table pivoting on `base`.
    #[must_use]
    pub fn new(base: CurrencyCode) -> Self {
        Self {
            base,
            rates: HashMap::new(),
        }
    }

    /// Builds a table from settings, validating codes and rates.
    pub fn from_config(config: &AppConfig) -> MoneyResult<Self> {
        let mut table = Self::new(CurrencyCode::new(&config.base)?);
        for (code, rate) in &config.rates {
            table.set_rate(CurrencyCode::new(code)?, *rate)?;
        }
        Ok(table)
    }

    /// Adds or replaces a rate, builder style.
    pub fn with_rate(mut self, currency: CurrencyCode, rate: Decimal) -> MoneyResult<Self> {
        self.set_rate(currency, rate)?;
        Ok(self)
    }

    /// Adds or replaces a rate.
    ///
    /// Negative rates are rejected. A zero rate is accepted; converting from
    /// that currency to base then yields zero. An entry for the base currency
    /// is ignored since base is always rate 1.
    pub fn set_rate(&mut self, currency: CurrencyCode, rate: Decimal) -> MoneyResult<()> {
        if rate < Decimal::ZERO {
            return Err(MoneyError::InvalidRate {
                currency: currency.to_string(),
                rate,
            });
        }
        if currency == self.base {
            if rate != Decimal::ONE {
                warn!(currency = %currency, %rate, "ignoring non-unit rate for base currency");
            }
            return Ok(());
        }
        self.rates.insert(currency, rate);
        Ok(())
    }

    /// The pivot currency.
    #[must_use]
    pub const fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Returns true if `currency` is the pivot.
    #[must_use]
    pub fn is_base(&self, currency: &CurrencyCode) -> bool {
        *currency == self.base
    }

    /// Units of `currency` per one unit of base.
    pub fn rate(&self, currency: &CurrencyCode) -> MoneyResult<Decimal> {
        if self.is_base(currency) {
            return Ok(Decimal::ONE);
        }
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| MoneyError::UnknownRate(currency.to_string()))
    }

    /// Returns true if the table can convert to and from `currency`.
    #[must_use]
    pub fn is_valid_currency(&self, currency: &CurrencyCode) -> bool {
        self.is_base(currency) || self.rates.contains_key(currency)
    }

    /// Codes with an explicit rate entry, sorted.
    #[must_use]
    pub fn currencies(&self) -> Vec<&CurrencyCode> {
        let mut codes: Vec<_> = self.rates.keys().collect();
        codes.sort();
        codes
    }
}
