#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use hskprep_lib::models::{HskLevel, PlanTier, Subscription, SubscriptionStatus, User};
use hskprep_lib::storage::{KeyValueStorage, MemoryStorage};
use hskprep_lib::{storage::SqliteStorage, Database};

pub fn sqlite_storage(dir: &tempfile::TempDir) -> Arc<SqliteStorage> {
    let db = Database::new(dir.path().join("hskprep.sqlite3"))
        .expect("failed to open test database");
    Arc::new(SqliteStorage::new(db))
}

pub fn sample_user() -> User {
    User {
        id: "u-1".into(),
        email: "mei@example.com".into(),
        name: Some("Mei".into()),
        provisional_level: HskLevel::Hsk5,
        subscription: Subscription {
            plan: PlanTier::Annual,
            status: SubscriptionStatus::Active,
            expires_at: Utc.with_ymd_and_hms(2027, 3, 1, 12, 0, 0).unwrap(),
        },
        study_streak: 3,
        total_tests_taken: 2,
        average_score: 81,
    }
}

/// Memory storage whose reads or writes can be made to fail per key.
#[derive(Default)]
pub struct FlakyStorage {
    inner: MemoryStorage,
    failing_reads: Mutex<HashSet<String>>,
    failing_writes: Mutex<HashSet<String>>,
    writes: Mutex<Vec<(String, Option<String>)>>,
}

impl FlakyStorage {
    pub fn new(inner: MemoryStorage) -> Self {
        Self {
            inner,
            ..Default::default()
        }
    }

    pub fn fail_reads(&self, key: &str) {
        self.failing_reads.lock().unwrap().insert(key.to_string());
    }

    pub fn fail_writes(&self, key: &str) {
        self.failing_writes.lock().unwrap().insert(key.to_string());
    }

    pub fn heal(&self) {
        self.failing_reads.lock().unwrap().clear();
        self.failing_writes.lock().unwrap().clear();
    }

    /// Every successful write or removal, in order. `None` marks a removal.
    pub fn writes(&self) -> Vec<(String, Option<String>)> {
        self.writes.lock().unwrap().clone()
    }

    fn check(&self, set: &Mutex<HashSet<String>>, key: &str) -> Result<()> {
        if set.lock().unwrap().contains(key) {
            Err(anyhow!("injected failure for '{key}'"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl KeyValueStorage for FlakyStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.check(&self.failing_reads, key)?;
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: String) -> Result<()> {
        self.check(&self.failing_writes, key)?;
        self.inner.set_item(key, value.clone()).await?;
        self.writes.lock().unwrap().push((key.to_string(), Some(value)));
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.check(&self.failing_writes, key)?;
        self.inner.remove_item(key).await?;
        self.writes.lock().unwrap().push((key.to_string(), None));
        Ok(())
    }
}
