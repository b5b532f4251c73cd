use std::sync::Arc;

use storage::repository::Storage;
use truths_core::Catalog;

use crate::error::AppServicesError;
use crate::onboarding::{Onboarding, OnboardingCompletion};
use crate::persistence::{BackgroundPersister, PersistSink, PersistenceGateway};
use crate::platform::Platform;
use crate::progress::ProgressOverview;
use crate::settings_service::SettingsService;
use crate::store::StateStore;
use crate::story_service::StoryService;

/// Assembles app-facing services around a single hydrated store.
///
/// Lives from launch to process exit; call `shutdown` before exiting so the
/// last snapshot reaches storage.
pub struct AppServices {
    store: StateStore,
    persister: Arc<BackgroundPersister>,
    platform: Platform,
    stories: Arc<StoryService>,
    settings: Arc<SettingsService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails. A missing or
    /// unreadable saved document is not an error.
    pub async fn new_sqlite(db_url: &str, platform: Platform) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(storage, Catalog::builtin(), platform).await)
    }

    /// Build services over an already-open storage backend.
    pub async fn from_storage(storage: Storage, catalog: Catalog, platform: Platform) -> Self {
        let gateway = PersistenceGateway::new(Arc::clone(&storage.state));
        let persister = Arc::new(BackgroundPersister::spawn(gateway.clone()));
        let sink: Arc<dyn PersistSink> = persister.clone();
        let store = StateStore::hydrate(&gateway, sink).await;

        let catalog = Arc::new(catalog);
        let stories = Arc::new(StoryService::new(catalog, platform.clone()));
        let settings = Arc::new(SettingsService::new(Arc::clone(&platform.share)));

        Self {
            store,
            persister,
            platform,
            stories,
            settings,
        }
    }

    #[must_use]
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StateStore {
        &mut self.store
    }

    #[must_use]
    pub fn stories(&self) -> Arc<StoryService> {
        Arc::clone(&self.stories)
    }

    #[must_use]
    pub fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.settings)
    }

    #[must_use]
    pub fn progress(&self) -> ProgressOverview {
        ProgressOverview::from_state(self.store.state())
    }

    #[must_use]
    pub fn onboarding(&self, completion: OnboardingCompletion) -> Onboarding {
        Onboarding::new(Arc::clone(&self.platform.navigator), completion)
    }

    /// Flush pending writes and stop the persistence worker.
    pub async fn shutdown(self) {
        self.persister.shutdown().await;
    }
}
