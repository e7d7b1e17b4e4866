use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::{
    runtime::Handle,
    sync::{mpsc, watch},
};

use crate::{error::StoreError, log_error, log_info, log_warn, storage::KeyValueStorage};

use super::{
    persist::{restore, spawn_persist_worker, PersistRequest, PersistSnapshot},
    AppAction, AppState, PersistTask,
};

const ENABLE_LOGS: bool = true;

struct StoreInner {
    state: watch::Sender<AppState>,
    storage: Arc<dyn KeyValueStorage>,
    persist_tx: mpsc::UnboundedSender<PersistRequest>,
    initialize_started: AtomicBool,
}

/// Owner of the session state. Cloning is cheap; clones share one state and one
/// persistence worker.
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<StoreInner>,
}

impl AppStore {
    /// Must be called from inside a Tokio runtime, which hosts the persistence
    /// worker.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Result<Self, StoreError> {
        let runtime = Handle::try_current().map_err(|_| StoreError::NoRuntime)?;
        let persist_tx = spawn_persist_worker(&runtime, storage.clone());
        let (state, _) = watch::channel(AppState::new());

        Ok(Self {
            inner: Arc::new(StoreInner {
                state,
                storage,
                persist_tx,
                initialize_started: AtomicBool::new(false),
            }),
        })
    }

    pub fn state(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    /// Reads the current state without cloning it. Do not dispatch from `f`.
    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Receiver that is woken after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.state.subscribe()
    }

    /// Applies `action` and returns immediately. If the action changed a
    /// persisted slice once loading is over, a write-through is queued and the
    /// returned task resolves when it finishes.
    pub fn dispatch(&self, action: AppAction) -> PersistTask {
        let mut task = PersistTask::none();

        self.inner.state.send_modify(|state| {
            let was_loading = state.is_loading;
            let touches_persisted = action.touches_persisted_slices();
            let clear_user = matches!(action, AppAction::SignOut);
            state.apply(action);

            if state.is_loading || !(touches_persisted || was_loading) {
                return;
            }

            // Queued under the state lock so writes land in dispatch order.
            let snapshot = PersistSnapshot::capture(state, clear_user);
            let (request, pending) = PersistRequest::new(snapshot);
            if self.inner.persist_tx.send(request).is_err() {
                log_error!("Persistence worker is gone; write-through dropped");
            } else {
                task = pending;
            }
        });

        task
    }

    /// Restores persisted data and ends the loading phase. Runs once; later
    /// calls are ignored. The returned task covers the write-back that follows
    /// the load.
    pub async fn initialize(&self) -> PersistTask {
        if self.inner.initialize_started.swap(true, Ordering::SeqCst) {
            log_warn!("Store initialization already ran; ignoring");
            return PersistTask::none();
        }

        let restored = restore(self.inner.storage.as_ref()).await;
        if restored.is_empty() {
            log_info!("No persisted data found; starting fresh");
        }
        log_info!(
            "Restored persisted data (user: {}, test results: {}, placement result: {})",
            restored.user.is_some(),
            restored.test_results.as_ref().map_or(0, Vec::len),
            restored.placement_result.is_some()
        );

        self.dispatch(AppAction::LoadPersistedData(restored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn construction_outside_a_runtime_is_a_configuration_error() {
        let result = AppStore::new(Arc::new(MemoryStorage::new()));
        assert_eq!(result.err(), Some(StoreError::NoRuntime));
    }

    #[tokio::test]
    async fn nothing_is_persisted_while_loading() {
        let store = AppStore::new(Arc::new(MemoryStorage::new())).unwrap();
        let task = store.dispatch(AppAction::SetAuthenticated(true));
        assert!(!task.is_scheduled());

        let task = store.dispatch(AppAction::SignOut);
        assert!(!task.is_scheduled());
    }

    #[tokio::test]
    async fn subscribers_see_dispatches() {
        let store = AppStore::new(Arc::new(MemoryStorage::new())).unwrap();
        let mut rx = store.subscribe();

        store.dispatch(AppAction::StartTest {
            test_id: "hsk3-1".into(),
        });

        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow().current_test.as_ref().map(|s| s.test_id.as_str()),
            Some("hsk3-1")
        );
    }

    #[tokio::test]
    async fn initialize_runs_once() {
        let store = AppStore::new(Arc::new(MemoryStorage::new())).unwrap();
        assert!(store.initialize().await.is_scheduled());
        assert!(!store.initialize().await.is_scheduled());
        assert!(!store.state().is_loading);
    }
}
