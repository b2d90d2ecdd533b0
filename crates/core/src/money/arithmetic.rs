//! Arithmetic and comparisons on money values.
//!
//! Results keep the left operand's currency and options. All operations use
//! checked decimal arithmetic, so overflow is an error instead of a panic.

use std::cmp::Ordering;

use bigmoney_shared::{MoneyError, MoneyResult};
use rust_decimal::prelude::*;

use super::{DEFAULT_ROUNDING, Money, Operand};

impl Money {
    /// Resolves an operand to a decimal, rejecting foreign currencies.
    fn operand_value(&self, rhs: impl Into<Operand>) -> MoneyResult<Decimal> {
        match rhs.into() {
            Operand::Scalar(value) => Ok(value),
            Operand::Money(other) => {
                if other.currency != self.currency {
                    return Err(MoneyError::CurrencyMismatch {
                        left: self.currency.to_string(),
                        right: other.currency.to_string(),
                    });
                }
                Ok(other.amount)
            }
        }
    }

    /// `self + rhs`.
    pub fn plus(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = self.operand_value(rhs)?;
        self.amount
            .checked_add(rhs)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow)
    }

    /// `self - rhs`.
    pub fn minus(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = self.operand_value(rhs)?;
        self.amount
            .checked_sub(rhs)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow)
    }

    /// `self * rhs`.
    pub fn times(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = self.operand_value(rhs)?;
        self.amount
            .checked_mul(rhs)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow)
    }

    /// `self / rhs`, at full decimal precision.
    pub fn div(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = self.operand_value(rhs)?;
        if rhs.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_div(rhs)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow)
    }

    /// `self % rhs`; the result takes the sign of `self`.
    pub fn rem(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = self.operand_value(rhs)?;
        if rhs.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_rem(rhs)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow)
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_amount(self.amount.abs())
    }

    /// Sign flipped.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.with_amount(-self.amount)
    }

    /// Rounds to `decimal_places`, half away from zero.
    #[must_use]
    pub fn round(&self, decimal_places: u32) -> Self {
        self.round_with(decimal_places, DEFAULT_ROUNDING)
    }

    /// Rounds to `decimal_places` with an explicit strategy.
    #[must_use]
    pub fn round_with(&self, decimal_places: u32, strategy: RoundingStrategy) -> Self {
        self.with_amount(self.amount.round_dp_with_strategy(decimal_places, strategy))
    }

    /// Square root.
    pub fn sqrt(&self) -> MoneyResult<Self> {
        if self.is_negative() {
            return Err(MoneyError::NegativeSquareRoot);
        }
        self.amount
            .sqrt()
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow)
    }

    /// Raises the amount to an integer power.
    ///
    /// The result is a bare number: a squared amount is not money.
    pub fn pow(&self, exponent: i64) -> MoneyResult<Decimal> {
        if exponent < 0 && self.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount.checked_powi(exponent).ok_or(MoneyError::Overflow)
    }

    /// Three-way comparison of amounts.
    pub fn compare(&self, rhs: impl Into<Operand>) -> MoneyResult<Ordering> {
        let rhs = self.operand_value(rhs)?;
        Ok(self.amount.cmp(&rhs))
    }

    /// Numeric equality (`1.0 == 1.00`).
    pub fn equals(&self, rhs: impl Into<Operand>) -> MoneyResult<bool> {
        Ok(self.compare(rhs)? == Ordering::Equal)
    }

    /// `self > rhs`.
    pub fn gt(&self, rhs: impl Into<Operand>) -> MoneyResult<bool> {
        Ok(self.compare(rhs)? == Ordering::Greater)
    }

    /// `self >= rhs`.
    pub fn gte(&self, rhs: impl Into<Operand>) -> MoneyResult<bool> {
        Ok(self.compare(rhs)? != Ordering::Less)
    }

    /// `self < rhs`.
    pub fn lt(&self, rhs: impl Into<Operand>) -> MoneyResult<bool> {
        Ok(self.compare(rhs)? == Ordering::Less)
    }

    /// `self <= rhs`.
    pub fn lte(&self, rhs: impl Into<Operand>) -> MoneyResult<bool> {
        Ok(self.compare(rhs)? != Ordering::Greater)
    }
}
