pub mod catalog;
pub mod commands;
pub mod config;
mod db;
pub mod error;
pub mod models;
pub mod scoring;
pub mod storage;
pub mod store;
mod utils;

pub use db::{Database, KvEntry};

use anyhow::Context;
use catalog::Catalog;
use commands::{history_summary, launch_destination};
use config::AppConfig;
use log::{info, warn};
use store::{AppContext, AppStore};

/// The process-wide store, installed by [`run`].
static APP_CONTEXT: AppContext = AppContext::new();

pub fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(if config.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    info!("HSK Prep starting up...");

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;

    runtime.block_on(async move {
        let catalog = Catalog::builtin()?;
        let storage = config.open_storage()?;

        let store = AppStore::new(storage)?;
        APP_CONTEXT.install(store)?;
        let store = APP_CONTEXT.store()?;

        if let Some(outcome) = store.initialize().await.wait().await {
            if !outcome.is_clean() {
                warn!("Initial write-back failed for {:?}", outcome.failed_keys);
            }
        }

        let summary = store.with_state(|state| history_summary(state, 3));
        info!(
            "Launching to {:?}; {} practice tests taken, average {}%, {} plans and {} tests available",
            store.with_state(launch_destination),
            summary.tests_taken,
            summary.average_percentage,
            catalog.subscription_plans.len(),
            catalog.mock_tests.len()
        );

        Ok::<(), anyhow::Error>(())
    })
}
