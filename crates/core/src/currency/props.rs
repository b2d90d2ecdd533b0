//! Property-based tests for currency operations.
//!
//! - Allocation sum, count, spread and determinism invariants
//! - Conversion identity, round trip, triangulation consistency and cross-rate algebra

use bigmoney_shared::CurrencyCode;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::allocation::{AllocationUtil, CENT};
use super::rates::RateTable;
use crate::money::Money;

/// Strategy to generate cent amounts (-1,000,000.00 to 1,000,000.00).
fn cent_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate amounts with up to 6 decimal places.
fn fine_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(|v| Decimal::new(v, 6))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate allocation count (1 to 100).
fn allocation_count() -> impl Strategy<Value = usize> {
    1usize..100
}

/// Strategy to generate 1-10 positive integer ratios.
fn ratios() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(1u32..1000, 1..10)
        .prop_map(|values| values.into_iter().map(Decimal::from).collect())
}

fn code(s: &str) -> CurrencyCode {
    CurrencyCode::new(s).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Allocation
    // =========================================================================

    /// *For any* amount and ratios, the shares SHALL sum to the amount exactly.
    #[test]
    fn prop_allocate_sum_invariant(
        amount in fine_amount(),
        ratios in ratios(),
    ) {
        let result = AllocationUtil::allocate(amount, &ratios).unwrap();
        let sum: Decimal = result.iter().copied().sum();
        prop_assert_eq!(sum, amount, "Sum of shares ({}) must equal amount ({})", sum, amount);
    }

    /// *For any* count, allocate_equal SHALL return exactly `count` shares.
    #[test]
    fn prop_allocate_equal_correct_count(
        amount in cent_amount(),
        count in allocation_count(),
    ) {
        let result = AllocationUtil::allocate_equal(amount, count).unwrap();
        prop_assert_eq!(result.len(), count);
    }

    /// *For any* cent amount, equal shares SHALL differ by at most one cent.
    #[test]
    fn prop_allocate_equal_spread_at_most_one_cent(
        amount in cent_amount(),
        count in allocation_count(),
    ) {
        let result = AllocationUtil::allocate_equal(amount, count).unwrap();
        let max = result.iter().copied().max().unwrap();
        let min = result.iter().copied().min().unwrap();
        prop_assert!(max - min <= CENT, "Spread {} exceeds one cent", max - min);
    }

    /// *For any* input, allocation SHALL be deterministic.
    #[test]
    fn prop_allocate_is_deterministic(
        amount in fine_amount(),
        ratios in ratios(),
    ) {
        let first = AllocationUtil::allocate(amount, &ratios).unwrap();
        let second = AllocationUtil::allocate(amount, &ratios).unwrap();
        prop_assert_eq!(first, second);
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// *For any* amount, converting to its own currency SHALL be the identity.
    #[test]
    fn prop_convert_identity(
        amount in fine_amount(),
        rate in positive_rate(),
    ) {
        let table = RateTable::new(code("USD")).with_rate(code("EUR"), rate).unwrap();
        let money = Money::new(amount, code("EUR"));
        prop_assert_eq!(money.convert_to(&table, &code("EUR")).unwrap(), money);
    }

    /// *For any* cent amount, base -> X -> base SHALL come back within display rounding.
    #[test]
    fn prop_convert_round_trip(
        amount in cent_amount(),
        rate in positive_rate(),
    ) {
        let table = RateTable::new(code("USD")).with_rate(code("EUR"), rate).unwrap();
        let money = Money::new(amount, code("USD"));
        let back = money
            .convert_to(&table, &code("EUR"))
            .unwrap()
            .convert(&table, None)
            .unwrap();
        prop_assert_eq!(back.currency(), money.currency());
        prop_assert_eq!(back.rounded(), money.rounded());
    }

    /// *For any* two rates, X -> Y SHALL equal X -> base -> Y.
    #[test]
    fn prop_convert_triangulation_consistent(
        amount in fine_amount(),
        eur in positive_rate(),
        jpy in positive_rate(),
    ) {
        let table = RateTable::new(code("USD"))
            .with_rate(code("EUR"), eur)
            .unwrap()
            .with_rate(code("JPY"), jpy)
            .unwrap();
        let money = Money::new(amount, code("EUR"));
        let direct = money.convert_to(&table, &code("JPY")).unwrap();
        let two_hop = money
            .convert(&table, None)
            .unwrap()
            .convert_to(&table, &code("JPY"))
            .unwrap();
        prop_assert_eq!(direct, two_hop);
    }

    /// *For any* two rates, X -> Y SHALL display as `amount / rate(X) * rate(Y)`.
    #[test]
    fn prop_convert_cross_rate_algebra(
        amount in fine_amount(),
        eur in positive_rate(),
        jpy in positive_rate(),
    ) {
        let table = RateTable::new(code("USD"))
            .with_rate(code("EUR"), eur)
            .unwrap()
            .with_rate(code("JPY"), jpy)
            .unwrap();
        let converted = Money::new(amount, code("EUR"))
            .convert_to(&table, &code("JPY"))
            .unwrap();
        let expected = Money::new(amount / eur * jpy, code("JPY"));
        prop_assert_eq!(converted.currency(), &code("JPY"));
        prop_assert_eq!(converted.rounded(), expected.rounded());
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Specific example: 100 split 1:2:1 = [25, 50, 25].
    #[test]
    fn test_allocate_1_2_1() {
        let result = AllocationUtil::allocate(dec!(100), &[dec!(1), dec!(2), dec!(1)]).unwrap();
        assert_eq!(result, vec![dec!(25), dec!(50), dec!(25)]);
    }

    /// Specific example: rate that divides evenly gives an exact round trip.
    #[test]
    fn test_round_trip_exact_rate() {
        let table = RateTable::new(code("USD")).with_rate(code("GBP"), dec!(0.5)).unwrap();
        let money = Money::new(dec!(123.45), code("USD"));
        let back = money
            .convert_to(&table, &code("GBP"))
            .unwrap()
            .convert(&table, None)
            .unwrap();
        assert_eq!(back, money);
    }
}
