//! Keeps the cached rates up to date.

use crate::core::freshness::{is_refresh_due, update_if_newer};
use crate::core::{CacheState, Clock, RateProvider};
use crate::store::StateStore;
use std::sync::Arc;
use tracing::debug;

pub struct RateManager {
    store: Box<dyn StateStore>,
    provider: Box<dyn RateProvider>,
    clock: Arc<dyn Clock>,
}

impl RateManager {
    pub fn new(
        store: Box<dyn StateStore>,
        provider: Box<dyn RateProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            provider,
            clock,
        }
    }

    /// Fetches a new rate from the state's source when the cached one is stale.
    ///
    /// Returns the state to convert with: the input unchanged when nothing newer
    /// was found, or the rolled state, which has also been saved.
    pub async fn refresh_if_due(&self, state: CacheState) -> CacheState {
        if !is_refresh_due(&state, self.clock.now()) {
            debug!("Cached rate is still current");
            return state;
        }

        let candidate = self.provider.get_current_rate(&state.source_uri).await;
        match update_if_newer(&state, candidate) {
            Some(new_state) => {
                self.store.save(&new_state);
                new_state
            }
            None => state,
        }
    }

    /// Loads the cached state and refreshes it if needed.
    pub async fn current_state(&self) -> CacheState {
        let state = self.store.load();
        self.refresh_if_due(state).await
    }
}
