use anyhow::Result;
use async_trait::async_trait;

use crate::db::Database;

use super::KeyValueStorage;

/// Key-value storage on the `kv_store` table.
#[derive(Clone)]
pub struct SqliteStorage {
    db: Database,
}

impl SqliteStorage {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl KeyValueStorage for SqliteStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.db.get_entry(key).await?.map(|entry| entry.value))
    }

    async fn set_item(&self, key: &str, value: String) -> Result<()> {
        self.db.upsert_entry(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.db.delete_entry(key).await
    }
}
