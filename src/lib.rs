pub mod cli;
pub mod core;
pub mod providers;
pub mod rates;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::{
    CacheState, Conversion, Direction, SystemClock, convert_all, select_rates_for_conversion,
};
use crate::providers::BcvRateProvider;
use crate::rates::RateManager;
use crate::store::{DiskStore, MemoryStore, StateStore};
use anyhow::{Result, bail};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// What the user asked to convert.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertRequest {
    pub amount: Decimal,
    pub direction: Direction,
    pub last_rate_only: bool,
    /// Skip reading and writing the cache file.
    pub no_cache: bool,
}

impl Default for ConvertRequest {
    fn default() -> Self {
        Self {
            amount: Decimal::ONE,
            direction: Direction::UsdToVes,
            last_rate_only: false,
            no_cache: false,
        }
    }
}

pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

/// Brings the cached rates up to date and converts the requested amount.
pub async fn convert(request: &ConvertRequest, config: &AppConfig) -> Result<Vec<Conversion>> {
    let store: Box<dyn StateStore> = if request.no_cache {
        Box::new(MemoryStore::new(config.default_state()))
    } else {
        let path = config.data_path()?;
        debug!("Using cached data at {}", path.display());
        Box::new(DiskStore::with_default(path, config.default_state()))
    };
    let manager = RateManager::new(
        store,
        Box::new(BcvRateProvider::new()),
        Arc::new(SystemClock),
    );

    let state = manager.current_state().await;
    convert_with_state(&state, request, config.rate_precision)
}

pub fn convert_with_state(
    state: &CacheState,
    request: &ConvertRequest,
    rate_precision: Option<u32>,
) -> Result<Vec<Conversion>> {
    let mut rates = select_rates_for_conversion(state, request.last_rate_only);
    if rates.is_empty() {
        bail!("No rates available");
    }
    if let Some(precision) = rate_precision {
        rates = rates.iter().map(|r| r.with_precision(precision)).collect();
    }

    Ok(convert_all(request.amount, &rates, request.direction)?)
}

pub async fn run(request: ConvertRequest, decimals: u32, config_path: Option<&str>) -> Result<()> {
    debug!("dobs starting...");
    let config = load_config(config_path)?;
    cli::convert::run(&request, decimals, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rate;
    use crate::core::error::ConversionError;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn example_state() -> CacheState {
        CacheState {
            last_rate: Some(Rate::new(
                dec!(1.00000000),
                NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            )),
            previous_rate: Some(Rate::new(
                dec!(36.33400000),
                NaiveDate::from_ymd_opt(2024, 3, 27).unwrap(),
            )),
            ..CacheState::default()
        }
    }

    #[test]
    fn test_convert_with_state_uses_both_rates() {
        let request = ConvertRequest {
            amount: dec!(100),
            ..ConvertRequest::default()
        };

        let conversions = convert_with_state(&example_state(), &request, None).unwrap();

        let amounts: Vec<_> = conversions.iter().map(|c| c.amount.amount).collect();
        assert_eq!(amounts, vec![dec!(3633.4), dec!(100)]);
    }

    #[test]
    fn test_convert_with_state_rounds_rates_when_asked() {
        let request = ConvertRequest {
            amount: dec!(100),
            last_rate_only: false,
            ..ConvertRequest::default()
        };

        let conversions = convert_with_state(&example_state(), &request, Some(1)).unwrap();

        assert_eq!(conversions[0].amount.amount, dec!(3630));
    }

    #[test]
    fn test_convert_with_state_without_rates() {
        let result = convert_with_state(&CacheState::default(), &ConvertRequest::default(), None);

        assert_eq!(result.unwrap_err().to_string(), "No rates available");
    }

    #[test]
    fn test_convert_with_state_zero_rate() {
        let state = CacheState::default().updated_with(Rate::new(
            dec!(0),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        ));
        let request = ConvertRequest {
            direction: Direction::VesToUsd,
            ..ConvertRequest::default()
        };

        let err = convert_with_state(&state, &request, None).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConversionError>(),
            Some(ConversionError::DivisionByZeroRate { .. })
        ));
    }
}
