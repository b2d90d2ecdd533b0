//! Money error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money construction, arithmetic, conversion and allocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Conversion Errors ==========
    /// No exchange rate is registered for the currency.
    #[error("Unknown rate for \"{0}\" currency")]
    UnknownRate(String),

    /// Exchange rate must not be negative.
    #[error("Invalid rate {rate} for \"{currency}\" currency")]
    InvalidRate {
        /// Currency code the rate was registered for.
        currency: String,
        /// The rejected rate.
        rate: Decimal,
    },

    // ========== Input Errors ==========
    /// Value could not be parsed as a decimal number.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Value is not a usable currency code.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),

    // ========== Arithmetic Errors ==========
    /// Operands carry different currencies.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency of the left operand.
        left: String,
        /// Currency of the right operand.
        right: String,
    },

    /// Division or remainder by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Result does not fit in the decimal representation.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Square root of a negative amount.
    #[error("Square root of a negative amount")]
    NegativeSquareRoot,

    // ========== Allocation Errors ==========
    /// Allocation ratios add up to zero.
    #[error("Allocation ratios sum to zero")]
    ZeroRatioTotal,

    /// Equal split asks for more shares than allowed.
    #[error("Cannot split into {count} shares (max {max})")]
    TooManyShares {
        /// Requested share count.
        count: usize,
        /// Largest accepted share count.
        max: usize,
    },
}

impl MoneyError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRate(_) => "UNKNOWN_RATE",
            Self::InvalidRate { .. } => "INVALID_RATE",
            Self::InvalidNumber(_) => "INVALID_NUMBER",
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow => "OVERFLOW",
            Self::NegativeSquareRoot => "NEGATIVE_SQUARE_ROOT",
            Self::ZeroRatioTotal => "ZERO_RATIO_TOTAL",
            Self::TooManyShares { .. } => "TOO_MANY_SHARES",
        }
    }

    /// Returns true if the error comes from a missing or invalid rate entry.
    #[must_use]
    pub const fn is_rate_error(&self) -> bool {
        matches!(self, Self::UnknownRate(_) | Self::InvalidRate { .. })
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
