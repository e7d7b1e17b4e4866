use std::sync::Arc;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tokio::{
    runtime::Handle,
    sync::{mpsc, oneshot},
};

use crate::{
    log_error, log_info,
    models::{PlacementQuizResult, TestResult, User},
    storage::{KeyValueStorage, PLACEMENT_RESULT_KEY, TEST_RESULTS_KEY, USER_KEY},
};

use super::{AppState, PersistedData};

const ENABLE_LOGS: bool = true;

/// The slices of [`AppState`] mirrored to storage, captured at dispatch time.
#[derive(Debug, Clone)]
pub(crate) struct PersistSnapshot {
    user: Option<User>,
    test_results: Vec<TestResult>,
    placement_result: Option<PlacementQuizResult>,
    /// Set only for a sign-out. A user that is merely missing, e.g. after a
    /// failed read at startup, leaves the stored one alone.
    clear_user: bool,
}

impl PersistSnapshot {
    pub(crate) fn capture(state: &AppState, clear_user: bool) -> Self {
        Self {
            user: state.user.clone(),
            test_results: state.test_results.clone(),
            placement_result: state.placement_result.clone(),
            clear_user,
        }
    }
}

pub(crate) struct PersistRequest {
    snapshot: PersistSnapshot,
    done: oneshot::Sender<PersistOutcome>,
}

impl PersistRequest {
    pub(crate) fn new(snapshot: PersistSnapshot) -> (Self, PersistTask) {
        let (done, receiver) = oneshot::channel();
        (
            Self { snapshot, done },
            PersistTask {
                receiver: Some(receiver),
            },
        )
    }
}

/// What happened to one write-through. Failures are already logged; this is
/// only for callers that want to look.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistOutcome {
    pub written_keys: Vec<&'static str>,
    pub removed_keys: Vec<&'static str>,
    pub failed_keys: Vec<&'static str>,
}

impl PersistOutcome {
    pub fn is_clean(&self) -> bool {
        self.failed_keys.is_empty()
    }
}

/// Handle to a write scheduled by a dispatch. Dropping it does not cancel the
/// write.
#[derive(Debug)]
pub struct PersistTask {
    receiver: Option<oneshot::Receiver<PersistOutcome>>,
}

impl PersistTask {
    pub(crate) fn none() -> Self {
        Self { receiver: None }
    }

    pub fn is_scheduled(&self) -> bool {
        self.receiver.is_some()
    }

    /// Resolves once the write has finished. `None` when the dispatch did not
    /// schedule a write or the persistence worker is gone.
    pub async fn wait(self) -> Option<PersistOutcome> {
        match self.receiver {
            Some(receiver) => receiver.await.ok(),
            None => None,
        }
    }
}

/// Starts the task that applies write-throughs one at a time, in the order they
/// were queued. It stops when every sender has been dropped.
pub(crate) fn spawn_persist_worker(
    runtime: &Handle,
    storage: Arc<dyn KeyValueStorage>,
) -> mpsc::UnboundedSender<PersistRequest> {
    let (tx, mut rx) = mpsc::unbounded_channel::<PersistRequest>();

    runtime.spawn(async move {
        while let Some(request) = rx.recv().await {
            let outcome = write_snapshot(storage.as_ref(), &request.snapshot).await;
            let _ = request.done.send(outcome);
        }
        log_info!("Persistence worker shutting down");
    });

    tx
}

async fn write_snapshot(
    storage: &dyn KeyValueStorage,
    snapshot: &PersistSnapshot,
) -> PersistOutcome {
    let mut outcome = PersistOutcome::default();

    match &snapshot.user {
        Some(user) => record(
            &mut outcome,
            USER_KEY,
            true,
            write_json(storage, USER_KEY, user).await,
        ),
        None if snapshot.clear_user => record(
            &mut outcome,
            USER_KEY,
            false,
            storage
                .remove_item(USER_KEY)
                .await
                .with_context(|| format!("failed to remove '{USER_KEY}'")),
        ),
        None => {}
    }

    record(
        &mut outcome,
        TEST_RESULTS_KEY,
        true,
        write_json(storage, TEST_RESULTS_KEY, &snapshot.test_results).await,
    );

    if let Some(result) = &snapshot.placement_result {
        record(
            &mut outcome,
            PLACEMENT_RESULT_KEY,
            true,
            write_json(storage, PLACEMENT_RESULT_KEY, result).await,
        );
    }

    outcome
}

async fn write_json<T: serde::Serialize + ?Sized>(
    storage: &dyn KeyValueStorage,
    key: &'static str,
    value: &T,
) -> Result<()> {
    let encoded =
        serde_json::to_string(value).with_context(|| format!("failed to encode '{key}'"))?;
    storage
        .set_item(key, encoded)
        .await
        .with_context(|| format!("failed to write '{key}'"))
}

fn record(outcome: &mut PersistOutcome, key: &'static str, write: bool, result: Result<()>) {
    match result {
        Ok(()) if write => outcome.written_keys.push(key),
        Ok(()) => outcome.removed_keys.push(key),
        Err(err) => {
            log_error!("Error persisting data: {err:#}");
            outcome.failed_keys.push(key);
        }
    }
}

/// Reads every persisted key independently. A key that is missing, unreadable
/// or undecodable is left out; the others are still restored.
pub(crate) async fn restore(storage: &dyn KeyValueStorage) -> PersistedData {
    let mut data = PersistedData::default();

    if let Some(user) = read_json::<User>(storage, USER_KEY).await {
        data.user = Some(user);
        data.is_authenticated = Some(true);
    }
    data.test_results = read_json::<Vec<TestResult>>(storage, TEST_RESULTS_KEY).await;
    data.placement_result = read_json::<PlacementQuizResult>(storage, PLACEMENT_RESULT_KEY).await;

    data
}

async fn read_json<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Option<T> {
    let loaded = storage
        .get_item(key)
        .await
        .with_context(|| format!("failed to read '{key}'"))
        .and_then(|raw| {
            raw.map(|raw| {
                serde_json::from_str::<T>(&raw).with_context(|| format!("failed to decode '{key}'"))
            })
            .transpose()
        });

    match loaded {
        Ok(value) => value,
        Err(err) => {
            log_error!("Error loading persisted data: {err:#}");
            None
        }
    }
}
