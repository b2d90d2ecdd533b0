//! Output formatting strategies.
//!
//! A formatter receives the display-rounded decimal, the currency code and
//! the template to use (the caller's override or the configured default).

use std::collections::HashMap;

use bigmoney_shared::CurrencyCode;
use rust_decimal::Decimal;

/// Placeholder replaced by the rounded amount.
pub const DECIMAL_TOKEN: &str = "%decimal";

/// Placeholder replaced by the currency code.
pub const CURRENCY_TOKEN: &str = "%currency";

/// Default output template.
pub const DEFAULT_TEMPLATE: &str = "%decimal %currency";

/// Turns a rounded amount and currency into text.
pub trait Formatter: Send + Sync {
    /// Formats `decimal` in `currency` using `template`.
    fn format(&self, decimal: Decimal, currency: &CurrencyCode, template: &str) -> String;
}

impl<F> Formatter for F
where
    F: Fn(Decimal, &CurrencyCode, &str) -> String + Send + Sync,
{
    fn format(&self, decimal: Decimal, currency: &CurrencyCode, template: &str) -> String {
        self(decimal, currency, template)
    }
}

/// Literal template substitution, the default formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateFormatter;

impl Formatter for TemplateFormatter {
    fn format(&self, decimal: Decimal, currency: &CurrencyCode, template: &str) -> String {
        render(template, decimal, currency)
    }
}

/// Replaces the first `%decimal` and the first `%currency` in `template`.
#[must_use]
pub fn render(template: &str, decimal: Decimal, currency: &CurrencyCode) -> String {
    template
        .replacen(DECIMAL_TOKEN, &decimal.to_string(), 1)
        .replacen(CURRENCY_TOKEN, currency.as_str(), 1)
}

/// Prefixes known currencies with their symbol (`$134.85`) and falls back to
/// `"<decimal> <code>"`. Ignores the template.
#[derive(Debug, Clone)]
pub struct SymbolFormatter {
    symbols: HashMap<CurrencyCode, String>,
}

impl SymbolFormatter {
    /// A formatter without any symbol.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            symbols: HashMap::new(),
        }
    }

    /// Adds or replaces a symbol, builder style.
    #[must_use]
    pub fn with_symbol(mut self, currency: CurrencyCode, symbol: impl Into<String>) -> Self {
        self.symbols.insert(currency, symbol.into());
        self
    }
}

impl Default for SymbolFormatter {
    /// `$` for USD, `€` for EUR, `¥` for JPY.
    fn default() -> Self {
        [("USD", "$"), ("EUR", "€"), ("JPY", "¥")]
            .into_iter()
            .filter_map(|(code, symbol)| Some((CurrencyCode::new(code).ok()?, symbol)))
            .fold(Self::empty(), |formatter, (code, symbol)| {
                formatter.with_symbol(code, symbol)
            })
    }
}

impl Formatter for SymbolFormatter {
    fn format(&self, decimal: Decimal, currency: &CurrencyCode, _template: &str) -> String {
        match self.symbols.get(currency) {
            Some(symbol) => format!("{symbol}{decimal}"),
            None => format!("{decimal} {currency}"),
        }
    }
}
