pub mod disk;
pub mod memory;

use crate::core::CacheState;
use std::sync::Arc;

pub use disk::DiskStore;
pub use memory::MemoryStore;

/// Keeps the [`CacheState`] between runs.
///
/// Neither operation fails: a store that cannot read hands back its default
/// state, and a store that cannot write logs the problem and carries on.
pub trait StateStore: Send + Sync {
    fn load(&self) -> CacheState;
    fn save(&self, state: &CacheState);
}

impl<T: StateStore + ?Sized> StateStore for Arc<T> {
    fn load(&self) -> CacheState {
        (**self).load()
    }

    fn save(&self, state: &CacheState) {
        (**self).save(state)
    }
}
