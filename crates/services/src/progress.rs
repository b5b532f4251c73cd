use truths_core::AppState;
use truths_core::model::{Rank, UserProgress};

/// A ratio with the numbers behind it, as drawn by a progress ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioStat {
    pub ratio: f64,
    pub rank: Rank,
    pub numerator: u32,
    pub denominator: u32,
}

impl RatioStat {
    fn new(ratio: f64, numerator: u32, denominator: u32) -> Self {
        Self {
            ratio,
            rank: Rank::from_ratio(ratio),
            numerator,
            denominator,
        }
    }

    /// `"n/total"` caption shown under the rank.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }

    /// Ratio as a whole percentage, clamped to `0..=100`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u8 {
        // Clamped, so the cast cannot truncate.
        (self.ratio.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Both progress rings of the progress screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressOverview {
    pub accuracy: RatioStat,
    pub reading: RatioStat,
}

impl ProgressOverview {
    #[must_use]
    pub fn from_progress(progress: &UserProgress) -> Self {
        let read = u32::try_from(progress.read_stories().len()).unwrap_or(u32::MAX);
        Self {
            accuracy: RatioStat::new(
                progress.truth_accuracy(),
                progress.correct_answers(),
                progress.total_answers(),
            ),
            reading: RatioStat::new(progress.reading_progress(), read, progress.total_stories()),
        }
    }

    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        Self::from_progress(state.user_progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use truths_core::model::StoryId;
    use truths_core::{Action, reduce};

    #[test]
    fn fresh_overview_is_unawakened() {
        let overview = ProgressOverview::from_state(&AppState::default());
        assert_eq!(overview.accuracy.rank, Rank::Unawakened);
        assert_eq!(overview.accuracy.caption(), "0/0");
        assert_eq!(overview.reading.caption(), "0/10");
        assert_eq!(overview.reading.percent(), 0);
    }

    #[test]
    fn overview_tracks_answers_and_reads() {
        let mut state = AppState::default();
        for is_correct in [true, true, true, false, false] {
            state = reduce(&state, Action::RecordAnswer { is_correct });
        }
        for n in 1..=10 {
            state = reduce(&state, Action::MarkStoryRead(StoryId::new(n.to_string())));
        }

        let overview = ProgressOverview::from_state(&state);
        assert_eq!(overview.accuracy.rank, Rank::Wise);
        assert_eq!(overview.accuracy.caption(), "3/5");
        assert_eq!(overview.accuracy.percent(), 60);
        assert_eq!(overview.reading.rank, Rank::TruthKeeper);
        assert_eq!(overview.reading.caption(), "10/10");
        assert_eq!(overview.reading.percent(), 100);
    }
}
