//! Currencies and amounts produced by conversions

use rust_decimal::Decimal;
use std::fmt::Display;

/// The two currencies a [`Rate`](super::Rate) relates: USD is the source, VES the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Ves,
}

impl Currency {
    pub fn prefix(&self) -> &'static str {
        match self {
            Currency::Usd => "US$",
            Currency::Ves => "Bs.",
        }
    }
}

/// Which way an amount goes through a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    UsdToVes,
    VesToUsd,
}

impl Direction {
    pub fn target(&self) -> Currency {
        match self {
            Direction::UsdToVes => Currency::Ves,
            Direction::VesToUsd => Currency::Usd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyAmount {
    pub currency: Currency,
    pub amount: Decimal,
}

impl CurrencyAmount {
    pub fn new(currency: Currency, amount: Decimal) -> Self {
        Self { currency, amount }
    }

    pub fn with_decimals(&self, decimals: u32) -> Self {
        Self {
            currency: self.currency,
            amount: self.amount.round_dp(decimals),
        }
    }
}

impl Display for CurrencyAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency.prefix(), self.amount)
    }
}
