use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::money::Money;

/// A dated capture of the total balance. Both derived fields are fixed at
/// capture time and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub total: Money,
    /// Change against the preceding entry; zero for the first one.
    #[serde(default)]
    pub gain_loss: Money,
    /// `total` minus the goal in effect when the entry was captured.
    #[serde(default)]
    pub remainder: Money,
}

/// Direction of a money delta, as shown next to gain/loss and remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Gain,
    Loss,
    Flat,
}

impl Trend {
    pub fn of(value: Money) -> Self {
        if value.is_positive() {
            Trend::Gain
        } else if value.is_negative() {
            Trend::Loss
        } else {
            Trend::Flat
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Gain => "gain",
            Trend::Loss => "loss",
            Trend::Flat => "flat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_follows_sign() {
        assert_eq!(Trend::of(Money::units(5)), Trend::Gain);
        assert_eq!(Trend::of(Money::units(-5)), Trend::Loss);
        assert_eq!(Trend::of(Money::zero()), Trend::Flat);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let entry = SnapshotEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            total: Money::units(1200),
            gain_loss: Money::units(200),
            remainder: Money::units(700),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2024-01-08","total":"1200.0000","gainLoss":"200.0000","remainder":"700.0000"}"#
        );
    }
}
