use std::sync::OnceLock;

use crate::error::StoreError;

use super::AppStore;

/// Explicit home for the process-wide store. Reaching for the store before
/// [`AppContext::install`] is a configuration error, not a panic.
pub struct AppContext {
    store: OnceLock<AppStore>,
}

impl AppContext {
    pub const fn new() -> Self {
        Self {
            store: OnceLock::new(),
        }
    }

    pub fn install(&self, store: AppStore) -> Result<(), StoreError> {
        self.store
            .set(store)
            .map_err(|_| StoreError::AlreadyInitialized)
    }

    pub fn store(&self) -> Result<&AppStore, StoreError> {
        self.store.get().ok_or(StoreError::NotInitialized)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
