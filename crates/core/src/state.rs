//! The persisted application document and its transition function.
//!
//! `reduce` is pure and total: every action maps a well-formed document to a
//! well-formed document. Persisting the result is the caller's job.

use serde::{Deserialize, Serialize};

use crate::model::{ProgressPatch, SettingsPatch, StoryId, UserProgress, UserSettings};

//
// ─── APP STATE ────────────────────────────────────────────────────────────────
//

/// Aggregate of everything the app remembers between launches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    user_progress: UserProgress,
    user_settings: UserSettings,
    has_completed_onboarding: bool,
}

impl AppState {
    #[must_use]
    pub fn new(
        user_progress: UserProgress,
        user_settings: UserSettings,
        has_completed_onboarding: bool,
    ) -> Self {
        Self {
            user_progress,
            user_settings,
            has_completed_onboarding,
        }
    }

    #[must_use]
    pub fn user_progress(&self) -> &UserProgress {
        &self.user_progress
    }

    #[must_use]
    pub fn user_settings(&self) -> &UserSettings {
        &self.user_settings
    }

    #[must_use]
    pub fn has_completed_onboarding(&self) -> bool {
        self.has_completed_onboarding
    }

    /// Re-establish progress invariants on a document read from storage.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.user_progress.normalize();
        self
    }
}

//
// ─── ACTIONS ──────────────────────────────────────────────────────────────────
//

/// Named transitions of the application document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetOnboardingComplete(bool),
    UpdateProgress(ProgressPatch),
    UpdateSettings(SettingsPatch),
    AddFavorite(StoryId),
    RemoveFavorite(StoryId),
    MarkStoryRead(StoryId),
    RecordAnswer { is_correct: bool },
    ResetProgress,
    ClearFavorites,
    /// Hydrate from persisted storage at startup.
    ReplaceDocument(Box<AppState>),
}

impl Action {
    /// Short, stable name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetOnboardingComplete(_) => "set_onboarding_complete",
            Action::UpdateProgress(_) => "update_progress",
            Action::UpdateSettings(_) => "update_settings",
            Action::AddFavorite(_) => "add_favorite",
            Action::RemoveFavorite(_) => "remove_favorite",
            Action::MarkStoryRead(_) => "mark_story_read",
            Action::RecordAnswer { .. } => "record_answer",
            Action::ResetProgress => "reset_progress",
            Action::ClearFavorites => "clear_favorites",
            Action::ReplaceDocument(_) => "replace_document",
        }
    }
}

/// Apply `action` to `state`, producing the next document.
#[must_use]
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::SetOnboardingComplete(done) => next.has_completed_onboarding = done,
        Action::UpdateProgress(patch) => next.user_progress.merge(patch),
        Action::UpdateSettings(patch) => next.user_settings.merge(patch),
        Action::AddFavorite(id) => next.user_progress.add_favorite(id),
        Action::RemoveFavorite(id) => next.user_progress.remove_favorite(&id),
        Action::MarkStoryRead(id) => next.user_progress.mark_read(id),
        Action::RecordAnswer { is_correct } => next.user_progress.record_answer(is_correct),
        Action::ResetProgress => next.user_progress.reset(),
        Action::ClearFavorites => next.user_progress.clear_favorites(),
        Action::ReplaceDocument(doc) => next = *doc,
    }
    next
}
