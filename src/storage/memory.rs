use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::KeyValueStorage;

/// Process-local storage for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStorage {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with raw values, as if written by an earlier run.
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = items
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            inner: RwLock::new(map),
        }
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let map = self.inner.read().map_err(|e| anyhow!("Lock: {}", e))?;
        Ok(map.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<()> {
        let mut map = self.inner.write().map_err(|e| anyhow!("Lock: {}", e))?;
        map.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let mut map = self.inner.write().map_err(|e| anyhow!("Lock: {}", e))?;
        map.remove(key);
        Ok(())
    }
}
