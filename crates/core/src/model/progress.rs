use serde::{Deserialize, Serialize};

use crate::model::ids::StoryId;
use crate::model::rank::Rank;

/// Number of stories shipped in the built-in catalog.
pub const DEFAULT_TOTAL_STORIES: u32 = 10;

//
// ─── USER PROGRESS ────────────────────────────────────────────────────────────
//

/// Reading and quiz progress of the user.
///
/// `read_stories` and `favorites` are ordered sets: insertion order is kept and
/// no id appears twice. `record_answer` keeps `correct_answers <= total_answers`;
/// a patch may set either counter on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProgress {
    total_stories: u32,
    read_stories: Vec<StoryId>,
    correct_answers: u32,
    total_answers: u32,
    favorites: Vec<StoryId>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self::with_total(DEFAULT_TOTAL_STORIES)
    }
}

impl UserProgress {
    /// Empty progress for a catalog of `total_stories` entries.
    #[must_use]
    pub fn with_total(total_stories: u32) -> Self {
        Self {
            total_stories,
            read_stories: Vec::new(),
            correct_answers: 0,
            total_answers: 0,
            favorites: Vec::new(),
        }
    }

    #[must_use]
    pub fn total_stories(&self) -> u32 {
        self.total_stories
    }

    #[must_use]
    pub fn read_stories(&self) -> &[StoryId] {
        &self.read_stories
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn total_answers(&self) -> u32 {
        self.total_answers
    }

    #[must_use]
    pub fn favorites(&self) -> &[StoryId] {
        &self.favorites
    }

    #[must_use]
    pub fn is_favorite(&self, id: &StoryId) -> bool {
        self.favorites.contains(id)
    }

    #[must_use]
    pub fn is_read(&self, id: &StoryId) -> bool {
        self.read_stories.contains(id)
    }

    /// Share of answers that were correct, or 0 before the first answer.
    #[must_use]
    pub fn truth_accuracy(&self) -> f64 {
        ratio(self.correct_answers, self.total_answers)
    }

    /// Share of the catalog the user has opened, or 0 for an empty catalog.
    #[must_use]
    pub fn reading_progress(&self) -> f64 {
        let read = u32::try_from(self.read_stories.len()).unwrap_or(u32::MAX);
        ratio(read, self.total_stories)
    }

    #[must_use]
    pub fn accuracy_rank(&self) -> Rank {
        Rank::from_ratio(self.truth_accuracy())
    }

    #[must_use]
    pub fn reading_rank(&self) -> Rank {
        Rank::from_ratio(self.reading_progress())
    }

    // ─── Mutations (crate-private; driven by `reduce`) ─────────────────────────

    pub(crate) fn add_favorite(&mut self, id: StoryId) {
        if !self.favorites.contains(&id) {
            self.favorites.push(id);
        }
    }

    pub(crate) fn remove_favorite(&mut self, id: &StoryId) {
        self.favorites.retain(|fav| fav != id);
    }

    pub(crate) fn clear_favorites(&mut self) {
        self.favorites.clear();
    }

    pub(crate) fn mark_read(&mut self, id: StoryId) {
        if !self.read_stories.contains(&id) {
            self.read_stories.push(id);
        }
    }

    pub(crate) fn record_answer(&mut self, is_correct: bool) {
        self.total_answers = self.total_answers.saturating_add(1);
        if is_correct {
            self.correct_answers = self.correct_answers.saturating_add(1);
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::with_total(self.total_stories);
    }

    pub(crate) fn merge(&mut self, patch: ProgressPatch) {
        let ProgressPatch {
            total_stories,
            read_stories,
            correct_answers,
            total_answers,
            favorites,
        } = patch;
        let sets_both_counters = correct_answers.is_some() && total_answers.is_some();

        if let Some(total) = total_stories {
            self.total_stories = total;
        }
        if let Some(read) = read_stories {
            self.read_stories = dedup_preserving_order(read);
        }
        if let Some(correct) = correct_answers {
            self.correct_answers = correct;
        }
        if let Some(total) = total_answers {
            self.total_answers = total;
        }
        if let Some(favs) = favorites {
            self.favorites = dedup_preserving_order(favs);
        }
        if sets_both_counters {
            self.correct_answers = self.correct_answers.min(self.total_answers);
        }
    }

    /// Restores the ordered-set and counter invariants on data that did not
    /// come through the reducer (for example a hand-edited stored record).
    pub(crate) fn normalize(&mut self) {
        self.read_stories = dedup_preserving_order(std::mem::take(&mut self.read_stories));
        self.favorites = dedup_preserving_order(std::mem::take(&mut self.favorites));
        self.correct_answers = self.correct_answers.min(self.total_answers);
    }
}

//
// ─── PATCH ────────────────────────────────────────────────────────────────────
//

/// Partial update of `UserProgress`; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressPatch {
    pub total_stories: Option<u32>,
    pub read_stories: Option<Vec<StoryId>>,
    pub correct_answers: Option<u32>,
    pub total_answers: Option<u32>,
    pub favorites: Option<Vec<StoryId>>,
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    f64::from(numerator) / f64::from(denominator)
}

fn dedup_preserving_order(ids: Vec<StoryId>) -> Vec<StoryId> {
    let mut out: Vec<StoryId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> StoryId {
        StoryId::new(raw)
    }

    #[test]
    fn defaults_match_catalog_size() {
        let progress = UserProgress::default();
        assert_eq!(progress.total_stories(), DEFAULT_TOTAL_STORIES);
        assert!(progress.read_stories().is_empty());
        assert!(progress.favorites().is_empty());
        assert_eq!(progress.correct_answers(), 0);
        assert_eq!(progress.total_answers(), 0);
    }

    #[test]
    fn accuracy_is_zero_without_answers() {
        let progress = UserProgress::default();
        assert!(progress.truth_accuracy().abs() < f64::EPSILON);
        assert_eq!(progress.accuracy_rank(), Rank::Unawakened);
    }

    #[test]
    fn reading_progress_handles_empty_catalog() {
        let mut progress = UserProgress::with_total(0);
        progress.mark_read(id("1"));
        assert!(progress.reading_progress().abs() < f64::EPSILON);
    }

    #[test]
    fn reading_progress_counts_unique_reads() {
        let mut progress = UserProgress::default();
        progress.mark_read(id("1"));
        progress.mark_read(id("1"));
        progress.mark_read(id("2"));
        assert!((progress.reading_progress() - 0.2).abs() < f64::EPSILON);
        assert_eq!(progress.reading_rank(), Rank::Seeker);
    }

    #[test]
    fn merge_clamps_counters_set_together() {
        let mut progress = UserProgress::default();
        progress.merge(ProgressPatch {
            correct_answers: Some(5),
            total_answers: Some(3),
            ..ProgressPatch::default()
        });
        assert_eq!(progress.correct_answers(), 3);
        assert_eq!(progress.total_answers(), 3);
    }

    #[test]
    fn merge_deduplicates_sets() {
        let mut progress = UserProgress::default();
        progress.merge(ProgressPatch {
            favorites: Some(vec![id("2"), id("1"), id("2")]),
            ..ProgressPatch::default()
        });
        assert_eq!(progress.favorites(), &[id("2"), id("1")]);
    }

    #[test]
    fn merge_leaves_unpatched_counter_alone() {
        let mut progress = UserProgress::default();
        progress.merge(ProgressPatch {
            correct_answers: Some(4),
            ..ProgressPatch::default()
        });
        assert_eq!(progress.correct_answers(), 4);
        assert_eq!(progress.total_answers(), 0);
    }

    #[test]
    fn missing_fields_decode_to_defaults() {
        let progress: UserProgress =
            serde_json::from_str(r#"{"readStories":["1"],"totalAnswers":2}"#).unwrap();
        assert_eq!(progress.total_stories(), DEFAULT_TOTAL_STORIES);
        assert_eq!(progress.read_stories(), &[id("1")]);
        assert_eq!(progress.total_answers(), 2);
        assert!(progress.favorites().is_empty());
    }
}
