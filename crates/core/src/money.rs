//! Decimal money amounts.
//!
//! Prices travel as decimal text (`"9.99"`) and all arithmetic runs on
//! `rust_decimal::Decimal`, never on binary floats. Rounding is half away from
//! zero to two fractional digits and is applied at the points that produce a
//! displayed or transmitted amount: a line's extended price and an order total.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Number of fractional digits every amount is rounded and rendered to.
pub const SCALE: u32 = 2;

/// A currency-less decimal amount.
///
/// The parsed value is kept exactly; `Display`/`Serialize` always render two
/// fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(Decimal);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// This amount rounded half-up to two fractional digits.
    pub fn rounded(self) -> Self {
        let mut value = self
            .0
            .round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(SCALE);
        Self(value)
    }

    /// `self × quantity`, rounded to two fractional digits.
    ///
    /// Saturates at `Decimal::MAX` (or `MIN`) instead of overflowing. A
    /// saturated amount has no room for fractional digits, so it renders as a
    /// bare 29-digit integer rather than with two places.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity))).rounded()
    }

    /// Sum of `amounts`, rounded to two fractional digits.
    pub fn total<'a, I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts.into_iter().copied().sum::<Money>().rounded()
    }
}

/// Saturating, like [`Money::times`].
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .map(Money)
            .map_err(|e| DomainError::invalid_amount(format!("{trimmed:?}: {e}")))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rounded().0, f)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount as text or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::from_str(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money(Decimal::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(Money(Decimal::from(v)))
    }

    // Some endpoints emit NUMERIC columns as JSON numbers; go through the
    // shortest textual form so 9.99 stays 9.99.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_str(&v.to_string()).map_err(E::custom)
    }
}
