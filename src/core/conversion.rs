//! Applying cached rates to an amount.

use super::currency::{CurrencyAmount, Direction};
use super::error::ConversionError;
use super::rate::Rate;
use super::state::CacheState;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A converted amount and the date of the rate that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub amount: CurrencyAmount,
    pub date: NaiveDate,
}

/// Rates to convert with, oldest first.
pub fn select_rates_for_conversion(state: &CacheState, last_rate_only: bool) -> Vec<Rate> {
    match (state.last_rate, state.previous_rate) {
        (None, _) => vec![],
        (Some(last), None) => vec![last],
        (Some(last), Some(_)) if last_rate_only => vec![last],
        (Some(last), Some(previous)) => vec![previous, last],
    }
}

pub fn convert(
    amount: Decimal,
    rate: &Rate,
    direction: Direction,
) -> Result<CurrencyAmount, ConversionError> {
    let converted = match direction {
        Direction::UsdToVes => amount
            .checked_mul(rate.multiplier)
            .ok_or(ConversionError::Overflow { date: rate.date })?,
        Direction::VesToUsd => {
            if rate.multiplier.is_zero() {
                return Err(ConversionError::DivisionByZeroRate { date: rate.date });
            }
            amount
                .checked_div(rate.multiplier)
                .ok_or(ConversionError::Overflow { date: rate.date })?
        }
    };
    Ok(CurrencyAmount::new(direction.target(), converted))
}

/// Converts `amount` with every rate; any failure discards the whole batch.
pub fn convert_all(
    amount: Decimal,
    rates: &[Rate],
    direction: Direction,
) -> Result<Vec<Conversion>, ConversionError> {
    rates
        .iter()
        .map(|rate| {
            convert(amount, rate, direction).map(|amount| Conversion {
                amount,
                date: rate.date,
            })
        })
        .collect()
}
