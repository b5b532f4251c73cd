use std::cmp::Ordering;
use std::sync::Arc;

use truths_core::model::{Story, StoryId, Verdict};
use truths_core::{Action, AppState, Catalog};

use crate::error::StoryError;
use crate::platform::{HapticIntensity, Platform, Route, ShareMessage};
use crate::store::StateStore;

//
// ─── LIST ITEMS ────────────────────────────────────────────────────────────────
//

/// Title ordering of the story list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// A row of the story list, annotated with the user's progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryListItem {
    pub id: StoryId,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub is_favorite: bool,
    pub is_read: bool,
}

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// Result of a truth-or-myth guess, shown on the explanation screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub verdict: Verdict,
    pub explanation: String,
}

impl AnswerOutcome {
    #[must_use]
    pub fn headline(&self) -> &'static str {
        if self.is_correct {
            "Correct!"
        } else {
            "Not quite right"
        }
    }
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Reading, quiz, favorites and sharing for catalog stories.
#[derive(Clone)]
pub struct StoryService {
    catalog: Arc<Catalog>,
    platform: Platform,
}

impl StoryService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, platform: Platform) -> Self {
        Self { catalog, platform }
    }

    /// Look up a story by id.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::UnknownStory` if the catalog has no such story.
    pub fn story(&self, id: &StoryId) -> Result<&Story, StoryError> {
        self.catalog
            .get(id)
            .ok_or_else(|| StoryError::UnknownStory(id.clone()))
    }

    /// All stories sorted by title.
    #[must_use]
    pub fn list(&self, state: &AppState, order: SortOrder) -> Vec<StoryListItem> {
        let progress = state.user_progress();
        let mut stories: Vec<&Story> = self.catalog.stories().iter().collect();
        stories.sort_by(|a, b| {
            let cmp = compare_titles(a, b);
            match order {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
            }
        });
        stories
            .into_iter()
            .map(|story| StoryListItem {
                id: story.id().clone(),
                title: story.title().to_owned(),
                excerpt: story.excerpt().to_owned(),
                image: story.image().to_owned(),
                is_favorite: progress.is_favorite(story.id()),
                is_read: progress.is_read(story.id()),
            })
            .collect()
    }

    /// Mark a story read and show its detail screen.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::UnknownStory` if the catalog has no such story.
    pub fn open(&self, store: &mut StateStore, id: &StoryId) -> Result<&Story, StoryError> {
        let story = self.story(id)?;
        store.dispatch(Action::MarkStoryRead(id.clone()));
        self.platform.navigator.navigate(Route::StoryDetail(id.clone()));
        Ok(story)
    }

    /// Flip the favorite flag of a story. Returns the new flag.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::UnknownStory` if the catalog has no such story.
    pub fn toggle_favorite(&self, store: &mut StateStore, id: &StoryId) -> Result<bool, StoryError> {
        self.story(id)?;
        if store.state().user_progress().is_favorite(id) {
            store.dispatch(Action::RemoveFavorite(id.clone()));
            Ok(false)
        } else {
            store.dispatch(Action::AddFavorite(id.clone()));
            Ok(true)
        }
    }

    /// Record a guess for a story.
    ///
    /// A wrong guess triggers heavy haptics when vibration is enabled.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::UnknownStory` if the catalog has no such story.
    pub fn answer(
        &self,
        store: &mut StateStore,
        id: &StoryId,
        guess: Verdict,
    ) -> Result<AnswerOutcome, StoryError> {
        let story = self.story(id)?;
        let is_correct = story.is_correct(guess);
        store.dispatch(Action::RecordAnswer { is_correct });

        if !is_correct && store.state().user_settings().vibration_enabled() {
            self.platform.haptics.trigger(HapticIntensity::Heavy);
        }

        Ok(AnswerOutcome {
            is_correct,
            verdict: story.verdict(),
            explanation: story.explanation().to_owned(),
        })
    }

    /// Message offered to the share sheet for a story.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::UnknownStory` if the catalog has no such story.
    pub fn share_message(&self, id: &StoryId) -> Result<ShareMessage, StoryError> {
        let story = self.story(id)?;
        Ok(ShareMessage {
            title: story.title().to_owned(),
            message: format!(
                "Check out this fascinating story: \"{}\" from Hidden Truths app!",
                story.title()
            ),
        })
    }

    /// Open the share sheet for a story.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::UnknownStory` if the catalog has no such story.
    pub fn share(&self, id: &StoryId) -> Result<(), StoryError> {
        let message = self.share_message(id)?;
        self.platform.share.share(message);
        Ok(())
    }

    /// Favorite stories in catalog order.
    #[must_use]
    pub fn saved<'a>(&'a self, state: &AppState) -> Vec<&'a Story> {
        let progress = state.user_progress();
        self.catalog
            .stories()
            .iter()
            .filter(|story| progress.is_favorite(story.id()))
            .collect()
    }

    /// Remove a story from the saved list.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::UnknownStory` if the catalog has no such story.
    pub fn remove_saved(&self, store: &mut StateStore, id: &StoryId) -> Result<(), StoryError> {
        self.story(id)?;
        store.dispatch(Action::RemoveFavorite(id.clone()));
        Ok(())
    }

    /// Leave the empty saved list for the story list.
    pub fn browse(&self) {
        self.platform.navigator.navigate(Route::Stories);
    }
}

fn compare_titles(a: &Story, b: &Story) -> Ordering {
    a.title()
        .to_lowercase()
        .cmp(&b.title().to_lowercase())
        .then_with(|| a.id().cmp(b.id()))
}
