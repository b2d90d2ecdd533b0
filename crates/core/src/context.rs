//! Money context: rate table plus output settings, passed explicitly.
//!
//! A host builds one context at startup (usually from `AppConfig`) and hands
//! it to whatever needs to create, convert or format money. Changing settings
//! means building a new context.

use std::sync::Arc;

use bigmoney_shared::{AppConfig, CurrencyCode, MoneyResult};
use rust_decimal::Decimal;
use tracing::debug;

use crate::currency::RateTable;
use crate::format::{DEFAULT_TEMPLATE, Formatter, TemplateFormatter};
use crate::money::{Money, MoneyOptions, parse_decimal};

/// Rate table, output template and formatter.
#[derive(Clone)]
pub struct MoneyContext {
    rates: RateTable,
    template: String,
    formatter: Arc<dyn Formatter>,
}

impl MoneyContext {
    /// Creates a context with the default template and formatter.
    #[must_use]
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates,
            template: DEFAULT_TEMPLATE.to_string(),
            formatter: Arc::new(TemplateFormatter),
        }
    }

    /// Builds a context from settings.
    pub fn from_config(config: &AppConfig) -> MoneyResult<Self> {
        let rates = RateTable::from_config(config)?;
        debug!(
            base = %rates.base(),
            currencies = rates.currencies().len(),
            "money context loaded"
        );
        Ok(Self::new(rates).with_template(config.format.clone()))
    }

    /// Replaces the default template, builder style.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Replaces the formatter, builder style.
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// The rate table.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// The base currency.
    #[must_use]
    pub const fn base(&self) -> &CurrencyCode {
        self.rates.base()
    }

    /// The default template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Money in the base currency.
    #[must_use]
    pub fn money(&self, amount: impl Into<Decimal>) -> Money {
        Money::new(amount.into(), self.base().clone())
    }

    /// Money in an explicit currency.
    #[must_use]
    pub fn money_in(&self, amount: impl Into<Decimal>, currency: CurrencyCode) -> Money {
        Money::new(amount.into(), currency)
    }

    /// Money whose currency is `currency`, else `options.currency`, else base.
    #[must_use]
    pub fn money_with(
        &self,
        amount: impl Into<Decimal>,
        currency: Option<CurrencyCode>,
        options: MoneyOptions,
    ) -> Money {
        let currency = currency
            .or_else(|| options.currency.clone())
            .unwrap_or_else(|| self.base().clone());
        Money::with_options(amount.into(), currency, options)
    }

    /// Parses an amount and an optional currency code (base when `None`).
    pub fn parse(&self, amount: &str, currency: Option<&str>) -> MoneyResult<Money> {
        let currency = match currency {
            Some(code) => CurrencyCode::new(code)?,
            None => self.base().clone(),
        };
        Ok(Money::new(parse_decimal(amount)?, currency))
    }

    /// Converts with this context's rate table.
    pub fn convert(&self, money: &Money, to: Option<&CurrencyCode>) -> MoneyResult<Money> {
        money.convert(&self.rates, to)
    }

    /// Returns true if the rate table knows `currency`.
    #[must_use]
    pub fn is_valid_currency(&self, currency: &CurrencyCode) -> bool {
        self.rates.is_valid_currency(currency)
    }

    /// Formats with the formatter, using `template` or the default one.
    #[must_use]
    pub fn format(&self, money: &Money, template: Option<&str>) -> String {
        let template = template.unwrap_or(self.template.as_str());
        self.formatter
            .format(money.rounded(), money.currency(), template)
    }
}

impl std::fmt::Debug for MoneyContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoneyContext")
            .field("rates", &self.rates)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

impl Money {
    /// Formats with `context`'s formatter and template.
    #[must_use]
    pub fn format(&self, context: &MoneyContext, template: Option<&str>) -> String {
        context.format(self, template)
    }
}
