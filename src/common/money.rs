use bigdecimal::BigDecimal;
use bigdecimal::*;
use num_traits::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
const SCALE: i64 = 10_000;
/// Largest magnitude, in whole units, accepted from user input. Derived values
/// (totals, remainders) may exceed it; arithmetic saturates at the `i64` range.
const MAX_UNITS: i64 = 1_000_000_000_000;

#[derive(Debug, Clone, Copy, Default)]
/// A signed monetary value stored in ten-thousandths of the currency unit.
///
/// Balances may be negative (debt, overdraft), so the inner `i64` is signed.
/// Storing an integer keeps totals exact no matter how many balances are
/// summed, which a raw `f64` would not.
///
/// # Examples
/// ```
/// use cash_ledger::common::money::Money;
///
/// let amount: Money = "-200.5".parse().unwrap();
/// assert_eq!(amount.as_i64(), -2_005_000);
/// assert_eq!(amount.to_string_4dp(), "-200.5000");
/// ```
pub struct Money(i64);

impl Money {
    /// Whole currency units, e.g. `Money::units(500)` is `500.0000`.
    pub fn units(value: i64) -> Self {
        Money(value.saturating_mul(SCALE))
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Lenient parse used for every user-entered amount: anything that does
    /// not parse as a number, or lies beyond ±1e12, becomes zero.
    ///
    /// ```
    /// use cash_ledger::common::money::Money;
    ///
    /// assert_eq!(Money::coerce(" 12.5 "), "12.5".parse().unwrap());
    /// assert_eq!(Money::coerce("twelve"), Money::zero());
    /// assert_eq!(Money::coerce(""), Money::zero());
    /// ```
    pub fn coerce(raw: &str) -> Money {
        match raw.parse::<Money>() {
            Ok(m) if m.0.unsigned_abs() <= (MAX_UNITS * SCALE) as u64 => m,
            Ok(m) => {
                tracing::debug!(input = raw, amount = %m, "amount out of range coerced to zero");
                Money::zero()
            }
            Err(e) => {
                tracing::debug!(input = raw, error = %e, "non-numeric amount coerced to zero");
                Money::zero()
            }
        }
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Scale to 4 decimal places
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

// Persisted as the exact 4 dp string; a JSON float would round large amounts.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_4dp())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawAmount {
            Number(f64),
            Text(String),
            Other(serde::de::IgnoredAny),
        }

        // stored derived values may exceed the input bound, so no cap here
        Ok(match Option::<RawAmount>::deserialize(deserializer)? {
            Some(RawAmount::Number(n)) if n.is_finite() => n.to_string().parse().unwrap_or_default(),
            Some(RawAmount::Text(s)) => s.parse().unwrap_or_default(),
            Some(RawAmount::Number(_)) | Some(RawAmount::Other(_)) | None => Money::zero(),
        })
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}
