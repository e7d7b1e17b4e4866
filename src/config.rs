use std::{env, path::PathBuf, sync::Arc};

use anyhow::{bail, Result};

use crate::{
    db::Database,
    storage::{KeyValueStorage, MemoryStorage, SqliteStorage},
};

const DATA_DIR_VAR: &str = "HSKPREP_DATA_DIR";
const STORAGE_VAR: &str = "HSKPREP_STORAGE";
const DEBUG_VAR: &str = "HSKPREP_DEBUG";

const DEFAULT_DATA_DIR: &str = ".hskprep";
const DATABASE_FILE: &str = "hskprep.sqlite3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    /// Nothing survives the process; handy for demos.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub storage: StorageBackend,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage: StorageBackend::Sqlite,
            debug: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|value| !value.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(backend) = lookup(STORAGE_VAR) {
            config.storage = match backend.trim().to_ascii_lowercase().as_str() {
                "" | "sqlite" => StorageBackend::Sqlite,
                "memory" => StorageBackend::Memory,
                other => bail!("{STORAGE_VAR} must be 'sqlite' or 'memory', got '{other}'"),
            };
        }

        config.debug = lookup(DEBUG_VAR)
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(config)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }

    pub fn open_storage(&self) -> Result<Arc<dyn KeyValueStorage>> {
        match self.storage {
            StorageBackend::Sqlite => {
                let database = Database::new(self.database_path())?;
                Ok(Arc::new(SqliteStorage::new(database)))
            }
            StorageBackend::Memory => Ok(Arc::new(MemoryStorage::new())),
        }
    }
}
