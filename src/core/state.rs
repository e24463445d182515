//! The persisted application state.

use super::rate::Rate;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

/// Page where the BCV publishes the reference rates.
pub const BCV_URI: &str = "https://www.bcv.org.ve/estadisticas/tipo-cambio-de-referencia-smc";

/// Approximate UTC time at which the next business day rate is published.
pub const BCV_RATE_CHANGE_TIME_UTC: (u32, u32) = (19, 30);

static DEFAULT_STATE: LazyLock<CacheState> = LazyLock::new(|| CacheState {
    last_rate: None,
    previous_rate: None,
    refresh_time_utc: NaiveTime::from_hms_opt(
        BCV_RATE_CHANGE_TIME_UTC.0,
        BCV_RATE_CHANGE_TIME_UTC.1,
        0,
    )
    .unwrap_or(NaiveTime::MIN),
    source_uri: Url::parse(BCV_URI).expect("BCV_URI is a valid url"),
});

/// Everything the converter remembers between runs.
///
/// Holds at most two rates: each adopted rate pushes the current `last_rate`
/// into `previous_rate` and drops whatever was there before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheState {
    #[serde(default)]
    pub last_rate: Option<Rate>,
    #[serde(default)]
    pub previous_rate: Option<Rate>,
    pub refresh_time_utc: NaiveTime,
    pub source_uri: Url,
}

impl CacheState {
    pub fn new(refresh_time_utc: NaiveTime, source_uri: Url) -> Self {
        Self {
            last_rate: None,
            previous_rate: None,
            refresh_time_utc,
            source_uri,
        }
    }

    pub fn updated_with(&self, new_rate: Rate) -> Self {
        Self {
            last_rate: Some(new_rate),
            previous_rate: self.last_rate,
            refresh_time_utc: self.refresh_time_utc,
            source_uri: self.source_uri.clone(),
        }
    }
}

impl Default for CacheState {
    fn default() -> Self {
        DEFAULT_STATE.clone()
    }
}
