//! Exchange rates, conversion through the base currency, and allocation.

pub mod allocation;
pub mod conversion;
pub mod rates;

#[cfg(test)]
mod props;

pub use allocation::{AllocationUtil, CENT, MAX_SHARES, Ratios};
pub use rates::RateTable;
