//! Currency conversion logic.
//!
//! Conversions pivot on the rate table's base currency:
//! - base -> X multiplies by `rate(X)`
//! - X -> base divides by `rate(X)` (a zero rate yields zero)
//! - X -> Y goes X -> base -> Y, always two hops
//!
//! No rounding is applied; display rounding happens on output.

use bigmoney_shared::{CurrencyCode, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use tracing::debug;

use super::rates::RateTable;
use crate::money::Money;

impl Money {
    /// Converts to `to`, or to the table's base when `to` is `None`.
    ///
    /// Both hops of a triangulated conversion read the same table, so the
    /// result never mixes two rate snapshots.
    pub fn convert(&self, table: &RateTable, to: Option<&CurrencyCode>) -> MoneyResult<Self> {
        let to = to.unwrap_or_else(|| table.base());
        let from = self.currency();

        if from == to {
            return Ok(self.retag(self.amount(), to.clone()));
        }

        if table.is_base(from) {
            let rate = table.rate(to)?;
            let amount = self
                .amount()
                .checked_mul(rate)
                .ok_or(MoneyError::Overflow)?;
            return Ok(self.retag(amount, to.clone()));
        }

        if table.is_base(to) {
            let rate = table.rate(from)?;
            let amount = if rate.is_zero() {
                Decimal::ZERO
            } else {
                self.amount()
                    .checked_div(rate)
                    .ok_or(MoneyError::Overflow)?
            };
            return Ok(self.retag(amount, to.clone()));
        }

        debug!(
            from = %from,
            to = %to,
            base = %table.base(),
            "triangulating conversion through base currency"
        );
        self.convert(table, None)?.convert(table, Some(to))
    }

    /// Converts to an explicit currency.
    pub fn convert_to(&self, table: &RateTable, to: &CurrencyCode) -> MoneyResult<Self> {
        self.convert(table, Some(to))
    }
}
