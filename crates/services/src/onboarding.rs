use std::sync::Arc;

use truths_core::{Action, AppState};

use crate::platform::{Navigator, Route};
use crate::store::StateStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Welcome,
    Stories,
    Quiz,
    Progress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingPage {
    pub step: OnboardingStep,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub const PAGES: [OnboardingPage; 4] = [
    OnboardingPage {
        step: OnboardingStep::Welcome,
        title: "Welcome to Hidden Truths",
        subtitle: "Uncover the stories between fact and fable",
        description: "Step into a world where myths and history intertwine. Each story hides a secret \u{2014} your task is to decide whether it's true or just a tale.",
    },
    OnboardingPage {
        step: OnboardingStep::Stories,
        title: "Explore Mysterious Stories",
        subtitle: "Read 10 captivating tales",
        description: "Discover stories inspired by real legends and timeless myths. From ancient civilizations to modern mysteries, each tale will challenge your understanding of truth.",
    },
    OnboardingPage {
        step: OnboardingStep::Quiz,
        title: "Truth or Tale Quiz",
        subtitle: "Test your intuition",
        description: "After each story, decide whether it's based on truth or myth. Learn the fascinating facts behind every tale and improve your accuracy over time.",
    },
    OnboardingPage {
        step: OnboardingStep::Progress,
        title: "Track Your Progress",
        subtitle: "Earn ranks and save favorites",
        description: "Follow your reading journey and accuracy through elegant progress trackers. Save your favorite stories and unlock achievements as you explore.",
    },
];

/// What finishing the carousel does to the onboarding flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnboardingCompletion {
    /// Navigate only; the carousel shows again on next launch.
    #[default]
    LeaveIncomplete,
    /// Also dispatch `SetOnboardingComplete(true)`.
    MarkComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingOutcome {
    Continue(&'static OnboardingPage),
    Finished,
}

/// The first screen to show for a given document.
#[must_use]
pub fn initial_route(state: &AppState) -> Route {
    if state.has_completed_onboarding() {
        Route::MainTabs
    } else {
        Route::Onboarding
    }
}

/// Cursor over the introductory pages.
pub struct Onboarding {
    index: usize,
    completion: OnboardingCompletion,
    navigator: Arc<dyn Navigator>,
}

impl Onboarding {
    #[must_use]
    pub fn new(navigator: Arc<dyn Navigator>, completion: OnboardingCompletion) -> Self {
        Self {
            index: 0,
            completion,
            navigator,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> &'static OnboardingPage {
        &PAGES[self.index]
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == PAGES.len()
    }

    /// Jump to a page, e.g. after a swipe. Out-of-range indices clamp.
    pub fn go_to(&mut self, index: usize) -> &'static OnboardingPage {
        self.index = index.min(PAGES.len() - 1);
        self.current()
    }

    /// Advance one page, finishing after the last.
    pub fn next(&mut self, store: &mut StateStore) -> OnboardingOutcome {
        if self.is_last() {
            self.finish(store);
            return OnboardingOutcome::Finished;
        }
        self.index += 1;
        OnboardingOutcome::Continue(self.current())
    }

    pub fn skip(&mut self, store: &mut StateStore) -> OnboardingOutcome {
        self.finish(store);
        OnboardingOutcome::Finished
    }

    fn finish(&self, store: &mut StateStore) {
        if self.completion == OnboardingCompletion::MarkComplete {
            store.dispatch(Action::SetOnboardingComplete(true));
        }
        self.navigator.navigate(Route::MainTabs);
    }
}
