use chrono::{DateTime, Utc};

/// One row of the `kv_store` table.
#[derive(Debug, Clone, PartialEq)]
pub struct KvEntry {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}
