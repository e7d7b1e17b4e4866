//! Durable string-blob storage behind the app store.
//!
//! The store owns three keys ([`USER_KEY`], [`TEST_RESULTS_KEY`],
//! [`PLACEMENT_RESULT_KEY`]); nothing else writes them.

use anyhow::Result;
use async_trait::async_trait;

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

pub const USER_KEY: &str = "user";
pub const TEST_RESULTS_KEY: &str = "testResults";
pub const PLACEMENT_RESULT_KEY: &str = "placementResult";

#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;
    async fn set_item(&self, key: &str, value: String) -> Result<()>;
    async fn remove_item(&self, key: &str) -> Result<()>;
}
