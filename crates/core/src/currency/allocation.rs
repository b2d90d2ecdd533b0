//! Amount allocation with round-robin cent distribution.
//!
//! This module splits amounts so that the shares add up to the original
//! exactly (no cents lost or gained).
//!
//! The method:
//! 1. Calculate each exact share `amount * ratio / total`
//! 2. Truncate each share toward zero to whole cents
//! 3. Hand out the remainder one cent at a time, starting at the first share
//!    and wrapping, in the remainder's sign direction
//! 4. Add any sub-cent residue (only present when the amount itself has
//!    fractions of a cent) to the share at the cursor

use bigmoney_shared::{MoneyError, MoneyResult};
use rust_decimal::prelude::*;
use tracing::trace;

use crate::money::Money;

/// Decimal places of the allocation grid.
pub const CENT_PLACES: u32 = 2;

/// One unit of the allocation grid (0.01).
pub const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, CENT_PLACES);

/// Largest share count accepted by an equal split.
pub const MAX_SHARES: usize = 1_000_000;

/// How to split an amount.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Ratios {
    /// Do not split: one share holding the whole amount.
    #[default]
    Whole,
    /// `n` equal shares, at most [`MAX_SHARES`].
    Count(usize),
    /// Shares proportional to each weight.
    Weights(Vec<Decimal>),
}

impl From<usize> for Ratios {
    fn from(count: usize) -> Self {
        Self::Count(count)
    }
}

impl From<Vec<Decimal>> for Ratios {
    fn from(weights: Vec<Decimal>) -> Self {
        Self::Weights(weights)
    }
}

impl From<&[Decimal]> for Ratios {
    fn from(weights: &[Decimal]) -> Self {
        Self::Weights(weights.to_vec())
    }
}

impl<const N: usize> From<[Decimal; N]> for Ratios {
    fn from(weights: [Decimal; N]) -> Self {
        Self::Weights(weights.to_vec())
    }
}

impl From<&[u32]> for Ratios {
    fn from(weights: &[u32]) -> Self {
        Self::Weights(weights.iter().copied().map(Decimal::from).collect())
    }
}

impl<const N: usize> From<[u32; N]> for Ratios {
    fn from(weights: [u32; N]) -> Self {
        Self::from(&weights[..])
    }
}

/// Allocation utility for distributing amounts.
///
/// Ensures:
/// - Sum of allocations EXACTLY equals the original amount
/// - No share gets more than one cent of correction
/// - The same input always yields the same output
pub struct AllocationUtil;

impl AllocationUtil {
    /// Allocate `amount` proportionally to `ratios`.
    ///
    /// Ratios may be fractional or negative; only their total must be nonzero.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use bigmoney_core::currency::AllocationUtil;
    ///
    /// let result = AllocationUtil::allocate(dec!(100), &[dec!(1), dec!(1), dec!(1)]).unwrap();
    /// assert_eq!(result, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
    /// ```
    pub fn allocate(amount: Decimal, ratios: &[Decimal]) -> MoneyResult<Vec<Decimal>> {
        let total = checked_sum(ratios.iter().copied())?;
        if total.is_zero() {
            return Err(MoneyError::ZeroRatioTotal);
        }

        let mut shares = ratios
            .iter()
            .map(|ratio| {
                amount
                    .checked_mul(*ratio)
                    .and_then(|scaled| scaled.checked_div(total))
                    .map(|exact| exact.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::ToZero))
                    .ok_or(MoneyError::Overflow)
            })
            .collect::<MoneyResult<Vec<_>>>()?;

        let allocated = checked_sum(shares.iter().copied())?;
        let mut remainder = amount
            .checked_sub(allocated)
            .ok_or(MoneyError::Overflow)?;

        if !remainder.is_zero() {
            trace!(%amount, %remainder, shares = shares.len(), "distributing allocation remainder");
        }

        let mut cursor = 0;
        while remainder.abs() >= CENT {
            let step = if remainder > Decimal::ZERO { CENT } else { -CENT };
            shares[cursor] += step;
            remainder -= step;
            cursor = (cursor + 1) % shares.len();
        }
        if !remainder.is_zero() {
            shares[cursor] += remainder;
        }

        Ok(shares)
    }

    /// Allocate `amount` into `count` equal shares.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use bigmoney_core::currency::AllocationUtil;
    ///
    /// // 100 / 3 = [33.34, 33.33, 33.33], sum = 100.00
    /// let result = AllocationUtil::allocate_equal(dec!(100), 3).unwrap();
    /// assert_eq!(result.iter().sum::<rust_decimal::Decimal>(), dec!(100));
    /// ```
    pub fn allocate_equal(amount: Decimal, count: usize) -> MoneyResult<Vec<Decimal>> {
        if count == 0 {
            return Err(MoneyError::ZeroRatioTotal);
        }
        if count > MAX_SHARES {
            return Err(MoneyError::TooManyShares {
                count,
                max: MAX_SHARES,
            });
        }

        let divisor = Decimal::from(count);
        let share = amount
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow)?
            .round_dp_with_strategy(CENT_PLACES, RoundingStrategy::ToZero);
        let remainder = share
            .checked_mul(divisor)
            .and_then(|allocated| amount.checked_sub(allocated))
            .ok_or(MoneyError::Overflow)?;

        if !remainder.is_zero() {
            trace!(%amount, %remainder, shares = count, "distributing allocation remainder");
        }

        let step = if remainder.is_sign_negative() { -CENT } else { CENT };
        let extra = remainder
            .checked_div(step)
            .and_then(|cents| cents.trunc().to_usize())
            .ok_or(MoneyError::Overflow)?;
        let residue = remainder - step * Decimal::from(extra);

        // Same result as `allocate` with `count` equal weights: whole rounds
        // of cents first, then one more cent for the first `extra % count`.
        let (rounds, cursor) = (extra / count, extra % count);
        let mut shares = vec![share; count];
        for (index, slot) in shares.iter_mut().enumerate() {
            let steps = if index < cursor { rounds + 1 } else { rounds };
            if steps > 0 {
                *slot += step * Decimal::from(steps);
            }
        }
        if !residue.is_zero() {
            shares[cursor] += residue;
        }

        Ok(shares)
    }
}

fn checked_sum(mut values: impl Iterator<Item = Decimal>) -> MoneyResult<Decimal> {
    values
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .ok_or(MoneyError::Overflow)
}

impl Money {
    /// Splits this value into shares whose amounts add up to it exactly.
    ///
    /// Every share keeps this value's currency and options.
    pub fn allocate(&self, ratios: impl Into<Ratios>) -> MoneyResult<Vec<Self>> {
        let shares = match ratios.into() {
            Ratios::Whole => return Ok(vec![self.clone()]),
            Ratios::Count(count) => AllocationUtil::allocate_equal(self.amount(), count)?,
            Ratios::Weights(weights) => AllocationUtil::allocate(self.amount(), &weights)?,
        };
        Ok(shares
            .into_iter()
            .map(|amount| self.with_amount(amount))
            .collect())
    }

    /// Splits into `count` equal shares.
    pub fn allocate_equal(&self, count: usize) -> MoneyResult<Vec<Self>> {
        self.allocate(Ratios::Count(count))
    }

    /// Splits proportionally to `ratios`.
    pub fn allocate_by(&self, ratios: &[Decimal]) -> MoneyResult<Vec<Self>> {
        self.allocate(ratios)
    }
}
