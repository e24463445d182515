use super::StateStore;
use crate::core::CacheState;
use crate::core::error::PersistenceError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// JSON file backed store.
pub struct DiskStore {
    path: PathBuf,
    default_state: CacheState,
}

impl DiskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_default(path, CacheState::default())
    }

    pub fn with_default(path: impl Into<PathBuf>, default_state: CacheState) -> Self {
        Self {
            path: path.into(),
            default_state,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for DiskStore {
    fn load(&self) -> CacheState {
        match read_state(&self.path) {
            Ok(state) => state,
            Err(e) => {
                warn!("Could not read cached data (this is normal on first use): {e}");
                self.default_state.clone()
            }
        }
    }

    fn save(&self, state: &CacheState) {
        if let Err(e) = write_state(state, &self.path) {
            warn!("Could not write cached data: {e}");
        }
    }
}

pub fn read_state(path: &Path) -> Result<CacheState, PersistenceError> {
    let json = fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let state = serde_json::from_str(&json).map_err(|e| PersistenceError::MalformedRecord {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!("Read cached data from {}", path.display());
    Ok(state)
}

/// Overwrites `path` with the pretty printed state, creating parent directories.
pub fn write_state(state: &CacheState, path: &Path) -> Result<(), PersistenceError> {
    let write_error = |source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string_pretty(state).map_err(|e| PersistenceError::MalformedRecord {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, json).map_err(write_error)?;
    debug!("Wrote cached data to {}", path.display());
    Ok(())
}
