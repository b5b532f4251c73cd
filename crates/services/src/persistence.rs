//! Durable storage of the app document across restarts.
//!
//! Failures never reach the caller: a failed load means "fresh install" and a
//! failed save leaves the previous snapshot on disk until the next success.

use std::sync::{Arc, Mutex};

use storage::repository::StateRepository;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use truths_core::AppState;

/// Loads and saves the whole document, swallowing storage failures.
#[derive(Clone)]
pub struct PersistenceGateway {
    repo: Arc<dyn StateRepository>,
}

impl PersistenceGateway {
    #[must_use]
    pub fn new(repo: Arc<dyn StateRepository>) -> Self {
        Self { repo }
    }

    /// Returns the last persisted document, or `None` when nothing usable is
    /// stored.
    pub async fn load(&self) -> Option<AppState> {
        match self.repo.load_state().await {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load app state; using defaults");
                None
            }
        }
    }

    /// Overwrites the stored document. Returns whether the write succeeded.
    pub async fn save(&self, state: &AppState) -> bool {
        match self.repo.save_state(state).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "failed to save app state; on-disk copy is stale");
                false
            }
        }
    }
}

/// Receives every new snapshot produced by the store.
///
/// Implementations must not block; the store calls this on every dispatch.
pub trait PersistSink: Send + Sync {
    fn persist(&self, snapshot: &AppState);
}

/// Fire-and-forget sink backed by a single writer task.
///
/// Snapshots are written in dispatch order. When several are queued the
/// writer skips straight to the newest, so the last completed write always
/// matches the last dispatched state.
pub struct BackgroundPersister {
    tx: Mutex<Option<mpsc::UnboundedSender<AppState>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl BackgroundPersister {
    /// Start the writer task on the current tokio runtime.
    #[must_use]
    pub fn spawn(gateway: PersistenceGateway) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(write_loop(gateway, rx));
        Self {
            tx: Mutex::new(Some(tx)),
            worker: Mutex::new(Some(worker)),
        }
    }

    /// Stop accepting snapshots and wait for the pending write to land.
    pub async fn shutdown(&self) {
        if let Ok(mut tx) = self.tx.lock() {
            tx.take();
        }
        let worker = self.worker.lock().ok().and_then(|mut guard| guard.take());
        if let Some(worker) = worker {
            if let Err(err) = worker.await {
                tracing::warn!(error = %err, "persistence worker ended abnormally");
            }
        }
    }
}

impl PersistSink for BackgroundPersister {
    fn persist(&self, snapshot: &AppState) {
        let sent = self
            .tx
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|tx| tx.send(snapshot.clone()).is_ok()))
            .unwrap_or(false);
        if !sent {
            tracing::warn!("persistence worker stopped; snapshot dropped");
        }
    }
}

async fn write_loop(gateway: PersistenceGateway, mut rx: mpsc::UnboundedReceiver<AppState>) {
    while let Some(mut snapshot) = rx.recv().await {
        let mut skipped = 0_usize;
        while let Ok(newer) = rx.try_recv() {
            snapshot = newer;
            skipped += 1;
        }
        if skipped > 0 {
            tracing::debug!(skipped, "coalesced stale snapshots");
        }
        gateway.save(&snapshot).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use storage::repository::{Storage, StorageError};
    use truths_core::model::StoryId;
    use truths_core::{Action, reduce};

    struct FailingRepo;

    #[async_trait]
    impl StateRepository for FailingRepo {
        async fn load_state(&self) -> Result<Option<AppState>, StorageError> {
            Err(StorageError::Connection("disk unplugged".into()))
        }

        async fn save_state(&self, _state: &AppState) -> Result<(), StorageError> {
            Err(StorageError::Connection("disk unplugged".into()))
        }
    }

    #[tokio::test]
    async fn load_failure_reads_as_fresh_install() {
        let gateway = PersistenceGateway::new(Arc::new(FailingRepo));
        assert!(gateway.load().await.is_none());
    }

    #[tokio::test]
    async fn save_failure_is_swallowed() {
        let gateway = PersistenceGateway::new(Arc::new(FailingRepo));
        assert!(!gateway.save(&AppState::default()).await);
    }

    #[tokio::test]
    async fn gateway_round_trips() {
        let storage = Storage::in_memory();
        let gateway = PersistenceGateway::new(storage.state);
        let state = reduce(&AppState::default(), Action::AddFavorite(StoryId::new("5")));

        assert!(gateway.save(&state).await);
        assert_eq!(gateway.load().await, Some(state));
    }

    #[tokio::test]
    async fn background_writer_lands_last_snapshot() {
        let storage = Storage::in_memory();
        let gateway = PersistenceGateway::new(Arc::clone(&storage.state));
        let persister = BackgroundPersister::spawn(gateway.clone());

        let mut state = AppState::default();
        for n in 0..50 {
            state = reduce(&state, Action::RecordAnswer { is_correct: n % 2 == 0 });
            persister.persist(&state);
        }
        persister.shutdown().await;

        assert_eq!(gateway.load().await, Some(state));
    }

    #[tokio::test]
    async fn persist_after_shutdown_is_dropped() {
        let storage = Storage::in_memory();
        let gateway = PersistenceGateway::new(Arc::clone(&storage.state));
        let persister = BackgroundPersister::spawn(gateway.clone());
        persister.shutdown().await;

        persister.persist(&AppState::default());
        assert!(gateway.load().await.is_none());
    }
}
