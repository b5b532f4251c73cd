use std::sync::Arc;

use truths_core::Action;
use truths_core::model::{ImagePathsDraft, SettingsPatch};

use crate::error::SettingsError;
use crate::platform::{ShareMessage, ShareSheet};
use crate::store::StateStore;

const APP_SHARE_TITLE: &str = "Hidden Truths";
const APP_SHARE_MESSAGE: &str =
    "Check out Hidden Truths - an amazing app that explores the stories between fact and fable!";

/// User toggles, asset overrides and destructive maintenance actions.
#[derive(Clone)]
pub struct SettingsService {
    share: Arc<dyn ShareSheet>,
}

impl SettingsService {
    #[must_use]
    pub fn new(share: Arc<dyn ShareSheet>) -> Self {
        Self { share }
    }

    pub fn set_music(&self, store: &mut StateStore, enabled: bool) {
        store.dispatch(Action::UpdateSettings(SettingsPatch::music(enabled)));
    }

    pub fn set_vibration(&self, store: &mut StateStore, enabled: bool) {
        store.dispatch(Action::UpdateSettings(SettingsPatch::vibration(enabled)));
    }

    /// Validate and apply new asset overrides.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::ImagePath` if an override is not a valid URL.
    /// The store is left untouched in that case.
    pub fn set_image_paths(
        &self,
        store: &mut StateStore,
        draft: ImagePathsDraft,
    ) -> Result<(), SettingsError> {
        let paths = draft.validate()?;
        store.dispatch(Action::UpdateSettings(SettingsPatch::image_paths(paths)));
        Ok(())
    }

    pub fn clear_favorites(&self, store: &mut StateStore) {
        store.dispatch(Action::ClearFavorites);
    }

    pub fn reset_progress(&self, store: &mut StateStore) {
        store.dispatch(Action::ResetProgress);
    }

    #[must_use]
    pub fn app_share_message(&self) -> ShareMessage {
        ShareMessage {
            title: APP_SHARE_TITLE.to_owned(),
            message: APP_SHARE_MESSAGE.to_owned(),
        }
    }

    pub fn share_app(&self) {
        self.share.share(self.app_share_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::{CountingSink, FakePlatform, fresh_store};
    use truths_core::AppState;
    use truths_core::model::{Asset, StoryId};

    fn service(fake: &Arc<FakePlatform>) -> SettingsService {
        SettingsService::new(fake.clone())
    }

    #[test]
    fn toggles_update_settings() {
        let fake = Arc::new(FakePlatform::default());
        let svc = service(&fake);
        let mut store = fresh_store();

        svc.set_music(&mut store, false);
        svc.set_vibration(&mut store, false);

        let settings = store.state().user_settings();
        assert!(!settings.music_enabled());
        assert!(!settings.vibration_enabled());
    }

    #[test]
    fn invalid_image_paths_leave_state_untouched() {
        let fake = Arc::new(FakePlatform::default());
        let svc = service(&fake);
        let sink = Arc::new(CountingSink::default());
        let mut store = StateStore::new(AppState::default(), sink.clone());

        let err = svc
            .set_image_paths(
                &mut store,
                ImagePathsDraft {
                    background: Some("https://[oops".into()),
                    ..ImagePathsDraft::new()
                },
            )
            .unwrap_err();
        assert!(matches!(err, SettingsError::ImagePath(_)));
        assert_eq!(*sink.count.lock().unwrap(), 0);
    }

    #[test]
    fn valid_image_paths_apply() {
        let fake = Arc::new(FakePlatform::default());
        let svc = service(&fake);
        let mut store = fresh_store();

        svc.set_image_paths(
            &mut store,
            ImagePathsDraft {
                settings: Some("file:///icons/gear.png".into()),
                ..ImagePathsDraft::new()
            },
        )
        .unwrap();
        assert_eq!(
            store.state().user_settings().resolve_asset(Asset::SettingsIcon),
            Some("file:///icons/gear.png")
        );
    }

    #[test]
    fn maintenance_actions() {
        let fake = Arc::new(FakePlatform::default());
        let svc = service(&fake);
        let mut store = fresh_store();
        store.dispatch(Action::AddFavorite(StoryId::new("1")));
        store.dispatch(Action::RecordAnswer { is_correct: true });

        svc.clear_favorites(&mut store);
        assert!(store.state().user_progress().favorites().is_empty());
        assert_eq!(store.state().user_progress().total_answers(), 1);

        svc.reset_progress(&mut store);
        assert_eq!(store.state().user_progress().total_answers(), 0);
    }

    #[test]
    fn share_app_sends_fixed_message() {
        let fake = Arc::new(FakePlatform::default());
        service(&fake).share_app();
        let shares = fake.shares.lock().unwrap();
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].title, "Hidden Truths");
    }
}
