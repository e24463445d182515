//! When to look for a new rate, and when to keep it.

use super::rate::Rate;
use super::state::CacheState;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// The source publishes one rate per day at `refresh_time_utc`; once that moment
/// has passed for the cached rate's date, the cache is stale.
pub fn is_refresh_due(state: &CacheState, now: DateTime<Utc>) -> bool {
    match &state.last_rate {
        None => true,
        Some(last) => {
            let next_change = last.date.and_time(state.refresh_time_utc).and_utc();
            debug!(%next_change, %now, "Checking rate freshness");
            now >= next_change
        }
    }
}

/// Only a strictly newer date is adopted, whatever the multiplier says.
pub fn should_adopt(state: &CacheState, candidate: &Rate) -> bool {
    state
        .last_rate
        .as_ref()
        .is_none_or(|last| candidate.is_newer_than(last))
}

/// Returns the rolled state when `candidate` is worth keeping.
pub fn update_if_newer(state: &CacheState, candidate: Option<Rate>) -> Option<CacheState> {
    let rate = candidate?;
    if should_adopt(state, &rate) {
        info!(%rate, "Updating rate");
        Some(state.updated_with(rate))
    } else {
        info!("No new rate available yet");
        None
    }
}
