//! Right-hand operands for money arithmetic.

use rust_decimal::Decimal;

use super::{Money, parse_decimal};
use bigmoney_shared::MoneyResult;

/// Either a bare number or another money value.
///
/// Money operands must share the left operand's currency.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A plain decimal.
    Scalar(Decimal),
    /// A money value.
    Money(Money),
}

impl Operand {
    /// Parses a scalar operand from text.
    pub fn parse(value: &str) -> MoneyResult<Self> {
        parse_decimal(value).map(Self::Scalar)
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Self::Scalar(value)
    }
}

impl From<Money> for Operand {
    fn from(value: Money) -> Self {
        Self::Money(value)
    }
}

impl From<&Money> for Operand {
    fn from(value: &Money) -> Self {
        Self::Money(value.clone())
    }
}

macro_rules! scalar_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Self::Scalar(Decimal::from(value))
                }
            }
        )*
    };
}

scalar_from!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
