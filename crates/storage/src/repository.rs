use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use truths_core::AppState;

/// Well-known key the application document is stored under.
pub const APP_STATE_KEY: &str = "appState";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// String-keyed local store, the equivalent of device key-value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Typed access to the persisted application document.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Load the last saved document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the stored record does not
    /// decode, or other storage errors.
    async fn load_state(&self) -> Result<Option<AppState>, StorageError>;

    /// Overwrite the stored document with `state`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document cannot be encoded or stored.
    async fn save_state(&self, state: &AppState) -> Result<(), StorageError>;
}

/// Stores the document as one JSON record in a `KeyValueStore`.
#[derive(Clone)]
pub struct JsonStateRepository {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl JsonStateRepository {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            key: APP_STATE_KEY.to_owned(),
        }
    }
}

#[async_trait]
impl StateRepository for JsonStateRepository {
    async fn load_state(&self) -> Result<Option<AppState>, StorageError> {
        let Some(raw) = self.kv.get_item(&self.key).await? else {
            return Ok(None);
        };
        let state: AppState = serde_json::from_str(&raw)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(state.normalized()))
    }

    async fn save_state(&self, state: &AppState) -> Result<(), StorageError> {
        let raw = serde_json::to_string(state)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.kv.set_item(&self.key, &raw).await?;
        tracing::debug!(key = %self.key, bytes = raw.len(), "app state written");
        Ok(())
    }
}

/// Simple in-memory key-value store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates the key-value store and the typed document repository behind
/// trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
    pub state: Arc<dyn StateRepository>,
}

impl Storage {
    #[must_use]
    pub fn from_kv(kv: Arc<dyn KeyValueStore>) -> Self {
        let state: Arc<dyn StateRepository> = Arc::new(JsonStateRepository::new(Arc::clone(&kv)));
        Self { kv, state }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_kv(Arc::new(InMemoryRepository::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use truths_core::model::{SettingsPatch, StoryId};
    use truths_core::{Action, reduce};

    fn sample_state() -> AppState {
        let state = AppState::default();
        let state = reduce(&state, Action::MarkStoryRead(StoryId::new("3")));
        let state = reduce(&state, Action::AddFavorite(StoryId::new("3")));
        let state = reduce(&state, Action::RecordAnswer { is_correct: true });
        reduce(&state, Action::UpdateSettings(SettingsPatch::vibration(false)))
    }

    #[tokio::test]
    async fn missing_key_loads_as_none() {
        let storage = Storage::in_memory();
        assert!(storage.state.load_state().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn round_trips_state() {
        let storage = Storage::in_memory();
        let state = sample_state();
        storage.state.save_state(&state).await.unwrap();

        let loaded = storage.state.load_state().await.unwrap();
        assert_eq!(loaded, Some(state));
    }

    #[tokio::test]
    async fn save_overwrites_previous_record() {
        let storage = Storage::in_memory();
        storage.state.save_state(&sample_state()).await.unwrap();
        storage.state.save_state(&AppState::default()).await.unwrap();

        let loaded = storage.state.load_state().await.unwrap();
        assert_eq!(loaded, Some(AppState::default()));
    }

    #[tokio::test]
    async fn record_lives_under_well_known_key() {
        let storage = Storage::in_memory();
        storage.state.save_state(&sample_state()).await.unwrap();

        let raw = storage.kv.get_item(APP_STATE_KEY).await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["userProgress"]["favorites"][0], "3");
    }

    #[tokio::test]
    async fn corrupt_record_is_a_serialization_error() {
        let storage = Storage::in_memory();
        storage.kv.set_item(APP_STATE_KEY, "{not json").await.unwrap();

        let err = storage.state.load_state().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn remove_item_forgets_value() {
        let repo = InMemoryRepository::new();
        repo.set_item("k", "v").await.unwrap();
        repo.remove_item("k").await.unwrap();
        repo.remove_item("k").await.unwrap();
        assert!(repo.get_item("k").await.unwrap().is_none());
    }
}
