use super::StateStore;
use crate::core::CacheState;
use std::sync::Mutex;
use tracing::debug;

/// Keeps the state for the lifetime of the process only.
pub struct MemoryStore {
    inner: Mutex<CacheState>,
}

impl MemoryStore {
    pub fn new(initial: CacheState) -> Self {
        Self {
            inner: Mutex::new(initial),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(CacheState::default())
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> CacheState {
        debug!("Loading in-memory state");
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn save(&self, state: &CacheState) {
        debug!("Saving in-memory state");
        *self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = state.clone();
    }
}
