#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod onboarding;
pub mod persistence;
pub mod platform;
pub mod progress;
pub mod settings_service;
pub mod store;
pub mod story_service;

#[cfg(test)]
mod test_harness;

pub use app_services::AppServices;
pub use error::{AppServicesError, SettingsError, StoryError};
pub use onboarding::{Onboarding, OnboardingCompletion, OnboardingOutcome, initial_route};
pub use persistence::{BackgroundPersister, PersistSink, PersistenceGateway};
pub use platform::{
    HapticIntensity, Haptics, LoggedHaptics, Navigator, Platform, Route, ShareMessage, ShareSheet,
};
pub use progress::{ProgressOverview, RatioStat};
pub use settings_service::SettingsService;
pub use store::StateStore;
pub use story_service::{AnswerOutcome, SortOrder, StoryListItem, StoryService};
