use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Row};

use crate::db::{helpers::parse_datetime, models::KvEntry, Database};

fn row_to_entry(row: &Row) -> Result<KvEntry> {
    let updated_at: String = row.get("updated_at")?;

    Ok(KvEntry {
        key: row.get("key")?,
        value: row.get("value")?,
        updated_at: parse_datetime(&updated_at, "updated_at")?,
    })
}

impl Database {
    pub async fn get_entry(&self, key: &str) -> Result<Option<KvEntry>> {
        let key = key.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT key, value, updated_at
                 FROM kv_store
                 WHERE key = ?1",
            )?;

            let mut rows = stmt.query(params![key])?;
            match rows.next()? {
                Some(row) => Ok(Some(row_to_entry(row)?)),
                None => Ok(None),
            }
        })
        .await
    }

    /// Insert or overwrite the value stored under `key`.
    pub async fn upsert_entry(&self, key: &str, value: String) -> Result<()> {
        let key = key.to_string();
        self.execute(move |conn| {
            let now = Utc::now();
            conn.execute(
                "INSERT INTO kv_store (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, value, now.to_rfc3339()],
            )
            .with_context(|| format!("failed to write key '{key}'"))?;
            Ok(())
        })
        .await
    }

    pub async fn delete_entry(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.execute(move |conn| {
            conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])
                .with_context(|| format!("failed to delete key '{key}'"))?;
            Ok(())
        })
        .await
    }
}
