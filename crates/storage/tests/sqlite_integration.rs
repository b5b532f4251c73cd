use std::sync::Arc;

use storage::repository::{
    APP_STATE_KEY, JsonStateRepository, KeyValueStore, StateRepository, Storage, StorageError,
};
use storage::sqlite::SqliteRepository;
use truths_core::model::{ImagePathsDraft, SettingsPatch, StoryId};
use truths_core::{Action, AppState, reduce};

fn played_state() -> AppState {
    let actions = [
        Action::MarkStoryRead(StoryId::new("1")),
        Action::MarkStoryRead(StoryId::new("7")),
        Action::AddFavorite(StoryId::new("7")),
        Action::RecordAnswer { is_correct: true },
        Action::RecordAnswer { is_correct: false },
        Action::UpdateSettings(SettingsPatch::image_paths(
            ImagePathsDraft {
                background: Some("file:///tmp/bg.png".into()),
                ..ImagePathsDraft::new()
            }
            .validate()
            .unwrap(),
        )),
        Action::SetOnboardingComplete(true),
    ];
    actions
        .into_iter()
        .fold(AppState::default(), |state, action| reduce(&state, action))
}

#[tokio::test]
async fn sqlite_roundtrip_persists_app_state() {
    let storage = Storage::sqlite("sqlite:file:memdb_state_roundtrip?mode=memory&cache=shared")
        .await
        .expect("open storage");

    assert!(storage.state.load_state().await.unwrap().is_none());

    let state = played_state();
    storage.state.save_state(&state).await.unwrap();

    let loaded = storage.state.load_state().await.unwrap();
    assert_eq!(loaded, Some(state));
}

#[tokio::test]
async fn sqlite_kv_overwrites_and_removes() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.set_item("greeting", "hello").await.unwrap();
    repo.set_item("greeting", "bonjour").await.unwrap();
    assert_eq!(
        repo.get_item("greeting").await.unwrap().as_deref(),
        Some("bonjour")
    );

    repo.remove_item("greeting").await.unwrap();
    assert!(repo.get_item("greeting").await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_corrupt_record_surfaces_serialization_error() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_corrupt?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    repo.set_item(APP_STATE_KEY, "[1, 2").await.unwrap();

    let kv: Arc<dyn KeyValueStore> = Arc::new(repo);
    let state_repo = JsonStateRepository::new(kv);
    let err = state_repo.load_state().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn sqlite_state_survives_reconnect() {
    let url = "sqlite:file:memdb_reconnect?mode=memory&cache=shared";
    let first = Storage::sqlite(url).await.expect("open storage");
    let state = played_state();
    first.state.save_state(&state).await.unwrap();

    // A second pool on the same shared-cache database sees the record.
    let second = Storage::sqlite(url).await.expect("reopen storage");
    let loaded = second.state.load_state().await.unwrap();
    assert_eq!(loaded, Some(state));
    drop(first);
}
