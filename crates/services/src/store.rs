use std::sync::Arc;

use tokio::sync::watch;
use truths_core::{Action, AppState, reduce};

use crate::persistence::{PersistSink, PersistenceGateway};

/// Owner of the in-memory application document.
///
/// Created once by the composition root and passed to whoever needs it.
/// Every dispatch applies the pure transition, publishes the new snapshot to
/// subscribers, and hands it to the persistence sink.
pub struct StateStore {
    state: AppState,
    updates: watch::Sender<AppState>,
    sink: Arc<dyn PersistSink>,
}

impl StateStore {
    #[must_use]
    pub fn new(initial: AppState, sink: Arc<dyn PersistSink>) -> Self {
        let (updates, _) = watch::channel(initial.clone());
        Self {
            state: initial,
            updates,
            sink,
        }
    }

    /// Build a store from the last persisted document, or defaults on a fresh
    /// install.
    pub async fn hydrate(gateway: &PersistenceGateway, sink: Arc<dyn PersistSink>) -> Self {
        let mut store = Self::new(AppState::default(), sink);
        match gateway.load().await {
            Some(saved) => {
                store.dispatch(Action::ReplaceDocument(Box::new(saved)));
            }
            None => tracing::info!("no saved state found; starting fresh"),
        }
        store
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply `action` and return the resulting document.
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        tracing::debug!(action = action.name(), "dispatch");
        self.state = reduce(&self.state, action);
        self.updates.send_replace(self.state.clone());
        self.sink.persist(&self.state);
        &self.state
    }

    /// Observe the latest snapshot. Intermediate snapshots between two reads
    /// are skipped.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.updates.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use storage::repository::Storage;
    use truths_core::model::StoryId;

    #[derive(Default)]
    struct RecordingSink {
        snapshots: Mutex<Vec<AppState>>,
    }

    impl PersistSink for RecordingSink {
        fn persist(&self, snapshot: &AppState) {
            self.snapshots.lock().unwrap().push(snapshot.clone());
        }
    }

    #[test]
    fn every_dispatch_is_persisted() {
        let sink = Arc::new(RecordingSink::default());
        let mut store = StateStore::new(AppState::default(), sink.clone());

        store.dispatch(Action::MarkStoryRead(StoryId::new("1")));
        store.dispatch(Action::RecordAnswer { is_correct: true });

        let snapshots = sink.snapshots.lock().unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots.last(), Some(store.state()));
    }

    #[test]
    fn subscribers_see_latest_state() {
        let mut store = StateStore::new(AppState::default(), Arc::new(RecordingSink::default()));
        let mut rx = store.subscribe();

        store.dispatch(Action::AddFavorite(StoryId::new("8")));

        assert!(rx.has_changed().unwrap());
        let seen = rx.borrow_and_update().clone();
        assert_eq!(&seen, store.state());
    }

    #[tokio::test]
    async fn hydrate_without_saved_state_uses_defaults() {
        let storage = Storage::in_memory();
        let gateway = PersistenceGateway::new(storage.state);
        let sink = Arc::new(RecordingSink::default());

        let store = StateStore::hydrate(&gateway, sink.clone()).await;

        assert_eq!(store.state(), &AppState::default());
        assert_eq!(store.state().user_progress().total_stories(), 10);
        assert!(sink.snapshots.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn hydrate_restores_saved_state() {
        let storage = Storage::in_memory();
        let gateway = PersistenceGateway::new(storage.state);
        let saved = reduce(&AppState::default(), Action::SetOnboardingComplete(true));
        gateway.save(&saved).await;

        let store = StateStore::hydrate(&gateway, Arc::new(RecordingSink::default())).await;

        assert_eq!(store.state(), &saved);
    }
}
