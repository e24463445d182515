//! Exchange rate abstractions and core types

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use url::Url;

/// USD to VES multiplier, effective from `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub multiplier: Decimal,
    pub date: NaiveDate,
}

impl Rate {
    pub fn new(multiplier: Decimal, date: NaiveDate) -> Self {
        Self { multiplier, date }
    }

    /// Returns a copy with the multiplier rounded to `precision` decimals.
    pub fn with_precision(&self, precision: u32) -> Self {
        Self {
            multiplier: self.multiplier.round_dp(precision),
            date: self.date,
        }
    }

    pub fn is_newer_than(&self, other: &Rate) -> bool {
        self.date > other.date
    }
}

impl Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.multiplier, self.date)
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Best-effort lookup of the rate currently published at `uri`.
    async fn get_current_rate(&self, uri: &Url) -> Option<Rate>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_with_precision_returns_rounded_copy() {
        let rate = Rate::new(dec!(36.33456), date(2024, 3, 27));
        let rounded = rate.with_precision(2);

        assert_eq!(rounded.multiplier, dec!(36.33));
        assert_eq!(rounded.date, rate.date);
        assert_eq!(rate.multiplier, dec!(36.33456));
    }

    #[test]
    fn test_is_newer_than_compares_dates_only() {
        let older = Rate::new(dec!(40), date(2024, 3, 27));
        let newer = Rate::new(dec!(1), date(2024, 4, 1));
        let same_day = Rate::new(dec!(2), date(2024, 4, 1));

        assert!(newer.is_newer_than(&older));
        assert!(!older.is_newer_than(&newer));
        assert!(!same_day.is_newer_than(&newer));
    }

    #[test]
    fn test_display() {
        let rate = Rate::new(dec!(36.33400000), date(2024, 3, 27));

        assert_eq!(rate.to_string(), "36.33400000 (2024-03-27)");
    }

    #[test]
    fn test_rate_json_keeps_exact_multiplier() {
        let rate = Rate::new(dec!(35.42980000), date(2023, 11, 17));
        let json = serde_json::to_string(&rate).unwrap();

        assert_eq!(json, r#"{"multiplier":35.42980000,"date":"2023-11-17"}"#);
        let back: Rate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rate);
    }
}
